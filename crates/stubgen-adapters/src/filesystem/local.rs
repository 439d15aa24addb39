//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use stubgen_core::{
    application::ports::{ArtifactWriter, StubReader},
    error::StubgenResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Reads and writes are blocking calls on the invoking thread; each call
/// opens one file handle and releases it before returning. `write_artifact`
/// does not create directories: the target layout is expected to exist
/// (`stubgen init` sets it up), and a missing directory surfaces as a write
/// error.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StubReader for LocalFilesystem {
    fn read_stub(&self, path: &Path) -> StubgenResult<String> {
        debug!(path = %path.display(), "reading stub");
        std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))
    }
}

impl ArtifactWriter for LocalFilesystem {
    fn write_artifact(&self, path: &Path, content: &str) -> StubgenResult<()> {
        debug!(path = %path.display(), "writing artifact");
        std::fs::write(path, content).map_err(|e| map_write_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_read_error(path: &Path, e: io::Error) -> stubgen_core::error::StubgenError {
    use stubgen_core::application::ApplicationError;

    ApplicationError::StubRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_write_error(path: &Path, e: io::Error) -> stubgen_core::error::StubgenError {
    use stubgen_core::application::ApplicationError;

    ApplicationError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stubgen_core::{application::ApplicationError, error::StubgenError};

    #[test]
    fn read_missing_stub_is_stub_read_error() {
        let fs = LocalFilesystem::new();
        let err = fs
            .read_stub(Path::new("/nonexistent/Stubs/Repository.stub"))
            .unwrap_err();
        assert!(matches!(
            err,
            StubgenError::Application(ApplicationError::StubRead { .. })
        ));
    }

    #[test]
    fn write_into_missing_directory_is_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("Repositories/UserRepository.php");

        let err = fs.write_artifact(&target, "class UserRepository {}").unwrap_err();
        assert!(matches!(
            err,
            StubgenError::Application(ApplicationError::ArtifactWrite { .. })
        ));
        assert!(!target.exists());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("a.php");

        fs.write_artifact(&target, "first").unwrap();
        fs.write_artifact(&target, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn read_round_trips_written_text() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let stub = tmp.path().join("Service.stub");

        fs.write_artifact(&stub, "class {{name}}Service {}").unwrap();
        assert_eq!(fs.read_stub(&stub).unwrap(), "class {{name}}Service {}");
        assert!(fs.exists(&stub));
    }
}
