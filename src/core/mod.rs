//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Collection model and error types
//! - Path normalization and extension matching
//! - File reading with placeholder substitution
//! - Rendering of the collection text and console report

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
