//! 組み込み言語カタログ
//!
//! Order matters: when two entries claim the same extension the earlier
//! entry wins. Contested extensions and their owners:
//!
//! | Extension | Owner | Also used by |
//! |-----------|-------|--------------|
//! | `.h` | C | C++, Objective-C |
//! | `.m` | Objective-C | MATLAB |
//! | `.pl` | Perl | Prolog |
//! | `.v` | Verilog | Coq |
//! | `.inc` | PHP | Assembly, Pascal |

/// One catalog row: name, extensions, line tokens, block delimiters.
pub type CatalogEntry = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [(&'static str, &'static str)],
);

const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const C_LINE: &[&str] = &["//"];
const HASH: &[&str] = &["#"];
const DASHES: &[&str] = &["--"];
const XML_BLOCK: &[(&str, &str)] = &[("<!--", "-->")];

pub const BUILTIN: &[CatalogEntry] = &[
    ("C", &[".c", ".h"], C_LINE, C_BLOCK),
    ("C++", &[".cpp", ".cc", ".cxx", ".c++", ".hpp", ".hh", ".hxx", ".h++", ".h"], C_LINE, C_BLOCK),
    ("Objective-C", &[".m", ".mm"], C_LINE, C_BLOCK),
    ("C#", &[".cs"], C_LINE, C_BLOCK),
    ("Go", &[".go"], C_LINE, C_BLOCK),
    ("Rust", &[".rs"], C_LINE, C_BLOCK),
    ("Java", &[".java"], C_LINE, C_BLOCK),
    ("Kotlin", &[".kt", ".kts"], C_LINE, C_BLOCK),
    ("Scala", &[".scala", ".sc"], C_LINE, C_BLOCK),
    ("Swift", &[".swift"], C_LINE, C_BLOCK),
    ("Dart", &[".dart"], C_LINE, C_BLOCK),
    ("Zig", &[".zig"], C_LINE, &[]),
    ("JavaScript", &[".js", ".mjs", ".cjs", ".jsx"], C_LINE, C_BLOCK),
    ("TypeScript", &[".ts", ".tsx", ".mts", ".cts"], C_LINE, C_BLOCK),
    ("Vue", &[".vue"], C_LINE, &[("<!--", "-->"), ("/*", "*/")]),
    ("Perl", &[".pl", ".pm"], HASH, &[("=pod", "=cut"), ("=head", "=cut")]),
    ("PHP", &[".php", ".phtml", ".inc"], &["//", "#"], C_BLOCK),
    ("Python", &[".py", ".pyw", ".pyi"], HASH, &[("\"\"\"", "\"\"\""), ("'''", "'''")]),
    ("Ruby", &[".rb", ".rake", ".gemspec"], HASH, &[("=begin", "=end")]),
    ("Lua", &[".lua"], DASHES, &[("--[[", "]]")]),
    ("Shell", &[".sh", ".bash", ".zsh", ".fish"], HASH, &[]),
    ("PowerShell", &[".ps1", ".psm1", ".psd1"], HASH, &[("<#", "#>")]),
    ("Batch", &[".bat", ".cmd"], &["REM", "rem", "::", "@REM", "@rem"], &[]),
    ("SQL", &[".sql"], DASHES, C_BLOCK),
    ("Haskell", &[".hs", ".lhs"], DASHES, &[("{-", "-}")]),
    ("Elm", &[".elm"], DASHES, &[("{-", "-}")]),
    ("OCaml", &[".ml", ".mli"], &[], &[("(*", "*)")]),
    ("F#", &[".fs", ".fsi", ".fsx"], C_LINE, &[("(*", "*)")]),
    ("Pascal", &[".pas", ".dpr"], C_LINE, &[("{", "}"), ("(*", "*)")]),
    ("Erlang", &[".erl", ".hrl"], &["%"], &[]),
    ("Elixir", &[".ex", ".exs"], HASH, &[]),
    ("Clojure", &[".clj", ".cljs", ".cljc", ".edn"], &[";"], &[]),
    ("Lisp", &[".lisp", ".lsp", ".el", ".scm", ".rkt"], &[";"], &[("#|", "|#")]),
    ("R", &[".r"], HASH, &[]),
    ("Julia", &[".jl"], HASH, &[("#=", "=#")]),
    ("MATLAB", &[".m"], &["%"], &[("%{", "%}")]),
    ("Fortran", &[".f", ".f90", ".f95", ".f03", ".f08", ".for"], &["!"], &[]),
    ("Verilog", &[".v", ".sv", ".svh"], C_LINE, C_BLOCK),
    ("VHDL", &[".vhd", ".vhdl"], DASHES, &[]),
    ("Assembly", &[".asm", ".s", ".nasm", ".inc"], &[";", "#"], C_BLOCK),
    ("Visual Basic", &[".vb", ".vbs", ".bas"], &["'", "REM "], &[]),
    ("TeX", &[".tex", ".sty", ".bib"], &["%"], &[]),
    ("HTML", &[".html", ".htm", ".xhtml"], &[], XML_BLOCK),
    ("XML", &[".xml", ".xsd", ".xsl", ".xslt", ".svg"], &[], XML_BLOCK),
    ("Markdown", &[".md", ".markdown"], &[], XML_BLOCK),
    ("CSS", &[".css"], &[], C_BLOCK),
    ("SCSS", &[".scss", ".sass", ".less"], C_LINE, C_BLOCK),
    ("JSON", &[".json"], &[], &[]),
    ("YAML", &[".yml", ".yaml"], HASH, &[]),
    ("TOML", &[".toml"], HASH, &[]),
    ("INI", &[".ini", ".cfg", ".conf"], &[";", "#"], &[]),
    ("Protocol Buffers", &[".proto"], C_LINE, C_BLOCK),
    ("GraphQL", &[".graphql", ".gql"], HASH, &[]),
    ("Terraform", &[".tf", ".tfvars"], &["#", "//"], C_BLOCK),
    ("Nix", &[".nix"], HASH, C_BLOCK),
    ("Makefile", &[".mk", "makefile", "gnumakefile"], HASH, &[]),
    ("CMake", &[".cmake", "cmakelists.txt"], HASH, &[("#[[", "]]")]),
    ("Dockerfile", &[".dockerfile", "dockerfile"], HASH, &[]),
    ("Plain Text", &[".txt"], &[], &[]),
];
