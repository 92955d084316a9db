//! Parser module for terminal input
//!
//! The grammar is `command := word (SP rest)?`. Only the first space splits;
//! `rest` is handed to the command unparsed.

pub mod command_line;

pub use command_line::{parse_command_line, CommandLine};
