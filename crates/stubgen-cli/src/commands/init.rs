//! `stubgen init` — seed the application layout and default stubs.

use stubgen_adapters::builtin_stubs;
use stubgen_core::domain::{AppLayout, ArtifactKind};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create `<app-root>/Stubs` plus the artifact directories, and write the
/// built-in default stub files.
///
/// This is the only place that creates directories: the generator itself
/// never does, so running `init` first is what makes the `make:*` commands
/// able to write.
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = AppLayout::new(config.resolved_app_root(global.app_root.as_deref()));

    output.info(&format!(
        "Initialising application layout at {}...",
        layout.app_root().display()
    ))?;

    std::fs::create_dir_all(layout.stub_dir()).map_err(|e| CliError::IoError {
        message: format!("Failed to create '{}'", layout.stub_dir().display()),
        source: e,
    })?;
    for kind in ArtifactKind::all() {
        let dir = layout.artifact_dir(kind);
        std::fs::create_dir_all(&dir).map_err(|e| CliError::IoError {
            message: format!("Failed to create '{}'", dir.display()),
            source: e,
        })?;
    }

    for (kind, stub) in builtin_stubs::default_stubs() {
        let path = layout.stub_path(kind);

        if path.exists() && !args.force {
            output.warning(&format!(
                "Stub already exists at {}  (use --force to overwrite)",
                path.display(),
            ))?;
            continue;
        }

        std::fs::write(&path, stub).map_err(|e| CliError::IoError {
            message: format!("Failed to write stub to '{}'", path.display()),
            source: e,
        })?;
        output.print(&format!("  wrote {}", path.display()))?;
    }

    output.success("Application layout initialised.")?;

    Ok(())
}
