//! Interactive front end for the stockroom inventory.
//!
//! Thin glue: prompts, menu dispatch and rendering. Inventory rules live in
//! `stockroom-inventory`.

pub mod config;
pub mod prompt;
pub mod shell;

pub use config::CliArgs;
pub use prompt::{CommandError, Prompter};
pub use shell::{Flow, MenuChoice, Shell};
