//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments into
//! core types, call the generator service, and display results.  No
//! generation logic lives here.

pub mod completions;
pub mod init;
pub mod make_repository;
pub mod make_service;

use stubgen_adapters::LocalFilesystem;
use stubgen_core::{application::GeneratorService, domain::AppLayout};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Build a production generator service for the resolved application root.
pub(crate) fn build_service(global: &GlobalArgs, config: &AppConfig) -> GeneratorService {
    let layout = AppLayout::new(config.resolved_app_root(global.app_root.as_deref()));
    GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LocalFilesystem::new()),
        layout,
    )
}
