//! Flows module - end-to-end pipelines
//!
//! Provides:
//! - collect: discover, read, render and write source files

pub mod collect;
