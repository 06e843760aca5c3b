// crates/cli/src/lib.rs
// clap と ignore の推移的依存で windows-sys が複数バージョン混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Code Analyser";
