//! File System Module
//!
//! Provides the virtual file system for the shell session:
//! - VirtualFs: in-memory tree of home roots, seeded at startup
//! - VirtualPath: `~`-rooted paths and lexical normalization
//! - resolver: confinement-checked resolution of `cd` targets

pub mod path;
pub mod resolver;
pub mod types;
pub mod virtual_fs;

pub use path::VirtualPath;
pub use resolver::{resolve, ResolveError};
pub use types::*;
pub use virtual_fs::VirtualFs;
