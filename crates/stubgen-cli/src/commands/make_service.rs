//! Implementation of the `stubgen make:service` command.

use tracing::{info, instrument};

use stubgen_core::domain::EntityName;

use crate::{
    cli::{GlobalArgs, MakeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `make:service`.  Single write to `Services/<Name>Service.php`.
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
        let artifacts = service.render_service(&name).map_err(CliError::Core)?;
        output.info(&format!("Dry run: would write for '{name}':"))?;
        for artifact in &artifacts {
            output.print(&format!("  {}", artifact.path.display()))?;
        }
        return Ok(());
    }

    let files = service.make_service(&name).map_err(CliError::Core)?;
    info!(name = %name, "Service generated");

    for file in &files {
        output.print(&format!("  created {}", file.path.display()))?;
    }
    output.success(&format!("{name} service created successfully."))?;

    Ok(())
}
