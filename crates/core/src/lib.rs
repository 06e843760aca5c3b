#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod language;
pub mod parser;
pub mod stats;

pub use language::{LanguageDefinition, LanguageRegistry, LineClassifier, LineKind};
pub use parser::count_bytes;
pub use stats::LineCounts;
