// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod ls;
pub mod nano_cmd;
pub mod pwd;
pub mod python_cmd;
pub mod registry;
pub mod types;
pub mod whoami_cmd;

pub use registry::{create_default_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
