//! webpi - A simulated Raspberry Pi terminal
//!
//! An in-memory virtual file system, `~`-confined path resolution and a
//! small fixed set of shell commands behind a single request/response call.
//! Script files are never executed.

pub mod commands;
pub mod config;
pub mod fs;
pub mod parser;
pub mod script;
pub mod terminal;

pub use config::{ConfigError, ShellConfig};
pub use fs::{FileSystem, VirtualFs, VirtualPath};
pub use terminal::{CommandRequest, CommandResponse, Terminal, TerminalOptions};
