//! I/O helpers for metashift commands.

pub mod config;
pub mod init;
pub mod metadata_store;
