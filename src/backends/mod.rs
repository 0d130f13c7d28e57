//! Backends module - filesystem traversal
//!
//! Provides:
//! - scan: recursive collection of files by extension

pub mod scan;
