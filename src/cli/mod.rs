//! Command-line interface.

pub mod args;
pub mod check;
pub mod export;
pub mod init;

pub use args::{CheckArgs, Cli, Commands, ExportArgs};
