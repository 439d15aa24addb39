//! Tracing subscriber setup.
//!
//! `stubgen-core` and `stubgen-adapters` only emit events; installing a
//! subscriber is this crate's job, once, at startup. Verbosity flags map to
//! a per-crate filter — WARN by default, `-v` INFO, `-vv` DEBUG, `-vvv`
//! TRACE, `--quiet` ERROR — and an explicit `RUST_LOG` replaces the whole
//! filter. Events go to stderr so generated-output listings on stdout stay
//! clean.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call before the first tracing macro fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = filter_level(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "stubgen={level},stubgen_core={level},stubgen_adapters={level}"
        ))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // try_init so a second call surfaces as an error instead of a panic.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn filter_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            app_root: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn quiet_drops_to_error() {
        assert_eq!(filter_level(&args_with(0, true)), "error");
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(filter_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(filter_level(&args_with(1, false)), "info");
        assert_eq!(filter_level(&args_with(2, false)), "debug");
        assert_eq!(filter_level(&args_with(3, false)), "trace");
        assert_eq!(filter_level(&args_with(10, false)), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(filter_level(&args_with(3, true)), "error");
    }
}
