//! Application layer for Stubgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All generation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GeneratedFile, GeneratorService};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactWriter, StubReader};

pub use error::ApplicationError;
