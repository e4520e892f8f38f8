//! detfetch library
//!
//! Core functionality for the `detfetch` CLI: ensure a detection dataset
//! extracted from a remote gzip-tar archive is present on disk.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
