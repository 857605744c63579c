//! Library crate root re-exporting CLI and precheck modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod precheck;
