//! Artifact kinds, path layout, and generated artifacts.

use std::fmt;
use std::path::{Path, PathBuf};

use super::name::EntityName;

/// The category of generated artifact.
///
/// The kind determines the destination directory, the file-name suffix and
/// the stub file it is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Repository,
    Interface,
    Service,
}

impl ArtifactKind {
    /// Destination directory under the application root.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Repository => "Repositories",
            Self::Interface => "Interfaces",
            Self::Service => "Services",
        }
    }

    /// File-name suffix appended to the entity name.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Interface => "Interface",
            Self::Service => "Service",
        }
    }

    /// Stub file name under the stub directory.
    pub fn stub_file(self) -> &'static str {
        match self {
            Self::Repository => "Repository.stub",
            Self::Interface => "Interface.stub",
            Self::Service => "Service.stub",
        }
    }

    /// All kinds, in generation order.
    pub fn all() -> [Self; 3] {
        [Self::Repository, Self::Interface, Self::Service]
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository => write!(f, "repository"),
            Self::Interface => write!(f, "interface"),
            Self::Service => write!(f, "service"),
        }
    }
}

/// The fixed directory layout rooted at the application directory.
///
/// All paths are pure functions of the root, the kind and the name; the
/// layout never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    app_root: PathBuf,
}

impl AppLayout {
    /// Create a layout rooted at `app_root` (conventionally `app`).
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
        }
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// Directory holding the stub files.
    pub fn stub_dir(&self) -> PathBuf {
        self.app_root.join("Stubs")
    }

    /// Fixed source path of the stub for `kind`.
    pub fn stub_path(&self, kind: ArtifactKind) -> PathBuf {
        self.stub_dir().join(kind.stub_file())
    }

    /// Destination directory for artifacts of `kind`.
    pub fn artifact_dir(&self, kind: ArtifactKind) -> PathBuf {
        self.app_root.join(kind.directory())
    }

    /// Destination path: `<app-root>/<KindDirectory>/<Name><Suffix>.php`.
    pub fn artifact_path(&self, kind: ArtifactKind, name: &EntityName) -> PathBuf {
        self.artifact_dir(kind)
            .join(format!("{}{}.php", name.as_str(), kind.suffix()))
    }
}

/// Substituted content plus its destination path.
///
/// Written once; the in-memory representation is discarded after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}
