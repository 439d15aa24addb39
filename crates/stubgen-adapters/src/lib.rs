//! Infrastructure adapters for Stubgen.
//!
//! This crate implements the ports defined in `stubgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_stubs;
pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
