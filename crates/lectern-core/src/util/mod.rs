//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file discovery and reading utilities
//! - [`paths`]: Path helpers (tilde expansion, route/file mapping)

pub mod files;
pub mod paths;
