//! Generator Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Load the stub text for each artifact
//! 2. Substitute the name tokens
//! 3. Write the artifacts to their fixed destinations
//!
//! All stubs for an invocation are loaded before the first write, so a
//! missing stub never leaves partial output behind. The writes themselves
//! are independent: if a later write fails, earlier artifacts from the same
//! invocation stay in place.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{ArtifactWriter, StubReader},
    domain::{AppLayout, ArtifactKind, EntityName, GeneratedArtifact, Substitution},
    error::StubgenResult,
};

/// Path and kind of an artifact that was written, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: ArtifactKind,
    pub path: std::path::PathBuf,
}

impl From<&GeneratedArtifact> for GeneratedFile {
    fn from(artifact: &GeneratedArtifact) -> Self {
        Self {
            kind: artifact.kind,
            path: artifact.path.clone(),
        }
    }
}

/// Main generation service.
///
/// Orchestrates stub loading, token substitution and artifact writing
/// through the injected ports.
pub struct GeneratorService {
    reader: Box<dyn StubReader>,
    writer: Box<dyn ArtifactWriter>,
    layout: AppLayout,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(
        reader: Box<dyn StubReader>,
        writer: Box<dyn ArtifactWriter>,
        layout: AppLayout,
    ) -> Self {
        Self {
            reader,
            writer,
            layout,
        }
    }

    /// Generate a repository class and its interface.
    #[instrument(skip_all, fields(name = %name))]
    pub fn make_repository(&self, name: &EntityName) -> StubgenResult<Vec<GeneratedFile>> {
        let artifacts = self.render_repository(name)?;
        self.write_all(&artifacts)
    }

    /// Generate a service class.
    #[instrument(skip_all, fields(name = %name))]
    pub fn make_service(&self, name: &EntityName) -> StubgenResult<Vec<GeneratedFile>> {
        let artifacts = self.render_service(name)?;
        self.write_all(&artifacts)
    }

    /// Load and substitute the repository artifacts without writing them.
    ///
    /// Both stubs are read here, before any write can happen, so `--dry-run`
    /// and the missing-stub guarantee share one code path. The repository
    /// stub receives only the `{{name}}` pair; the interface stub receives
    /// `{{name}}` and `{{var_name}}`.
    pub fn render_repository(&self, name: &EntityName) -> StubgenResult<Vec<GeneratedArtifact>> {
        let repository_stub = self.load_stub(ArtifactKind::Repository)?;
        let interface_stub = self.load_stub(ArtifactKind::Interface)?;

        Ok(vec![
            GeneratedArtifact {
                kind: ArtifactKind::Repository,
                path: self.layout.artifact_path(ArtifactKind::Repository, name),
                content: Substitution::name_only(name).apply(&repository_stub),
            },
            GeneratedArtifact {
                kind: ArtifactKind::Interface,
                path: self.layout.artifact_path(ArtifactKind::Interface, name),
                content: Substitution::for_name(name).apply(&interface_stub),
            },
        ])
    }

    /// Load and substitute the service artifact without writing it.
    pub fn render_service(&self, name: &EntityName) -> StubgenResult<Vec<GeneratedArtifact>> {
        let service_stub = self.load_stub(ArtifactKind::Service)?;

        Ok(vec![GeneratedArtifact {
            kind: ArtifactKind::Service,
            path: self.layout.artifact_path(ArtifactKind::Service, name),
            content: Substitution::for_name(name).apply(&service_stub),
        }])
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn load_stub(&self, kind: ArtifactKind) -> StubgenResult<String> {
        let path = self.layout.stub_path(kind);
        let text = self.reader.read_stub(&path)?;
        info!(stub = %path.display(), "Stub loaded");
        Ok(text)
    }

    /// Write artifacts in order. Last writer wins at each path; an existing
    /// destination is overwritten with a WARN event, not an error.
    fn write_all(&self, artifacts: &[GeneratedArtifact]) -> StubgenResult<Vec<GeneratedFile>> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            if self.writer.exists(&artifact.path) {
                warn!(path = %artifact.path.display(), "Overwriting existing artifact");
            }
            self.writer.write_artifact(&artifact.path, &artifact.content)?;
            info!(kind = %artifact.kind, path = %artifact.path.display(), "Artifact written");
            written.push(GeneratedFile::from(artifact));
        }

        Ok(written)
    }
}
