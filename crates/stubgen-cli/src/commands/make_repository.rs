//! Implementation of the `stubgen make:repository` command.

use tracing::{info, instrument};

use stubgen_core::domain::EntityName;

use crate::{
    cli::{GlobalArgs, MakeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `make:repository`.
///
/// Writes `Repositories/<Name>Repository.php` and
/// `Interfaces/<Name>Interface.php`, in that order.  The two writes are
/// independent: a failure on the second leaves the first in place.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = EntityName::new(&args.name).map_err(|e| CliError::Core(e.into()))?;
    let service = super::build_service(&global, &config);

    if args.dry_run {
        let artifacts = service.render_repository(&name).map_err(CliError::Core)?;
        output.info(&format!("Dry run: would write for '{name}':"))?;
        for artifact in &artifacts {
            output.print(&format!("  {}", artifact.path.display()))?;
        }
        return Ok(());
    }

    let files = service.make_repository(&name).map_err(CliError::Core)?;
    info!(name = %name, "Repository generated");

    for file in &files {
        output.print(&format!("  created {}", file.path.display()))?;
    }
    output.success(&format!(
        "{name} repository and its interface created successfully."
    ))?;

    Ok(())
}
