//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubgen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StubgenResult;

/// Port for reading stub template text.
///
/// Implemented by:
/// - `stubgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stubgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait StubReader: Send + Sync {
    /// Read the full text of the stub at `path`.
    ///
    /// Fails with `ApplicationError::StubRead` if the file is missing or
    /// unreadable. There is no fallback stub.
    fn read_stub(&self, path: &Path) -> StubgenResult<String>;
}

/// Port for writing generated artifacts.
///
/// ## Design Notes
///
/// - `write_artifact` performs no directory creation: a missing destination
///   directory is an `ApplicationError::ArtifactWrite`.
/// - An existing file at the destination is overwritten, not appended to.
pub trait ArtifactWriter: Send + Sync {
    /// Write `content` to `path`, replacing any existing file.
    fn write_artifact(&self, path: &Path, content: &str) -> StubgenResult<()>;

    /// Check if a path exists (used only for overwrite logging).
    fn exists(&self, path: &Path) -> bool;
}
