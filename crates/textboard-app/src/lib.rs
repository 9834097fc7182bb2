//! Textboard Application
//!
//! The application shell: owns the [`Board`](textboard_core::Board) and
//! turns line commands into board calls.

mod commands;
mod shell;

pub use commands::{Command, CommandHelp};
pub use shell::{Shell, ShellError, ShellResult};
