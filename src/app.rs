//! Application orchestrator.
//! Builds the config, initializes logging, prepares the destination, then
//! streams candidates through the mover while printing one line per move.

use anyhow::Result;
use tracing::{debug, error};

use ext_mover::cli::Args;
use ext_mover::output as out;
use ext_mover::{ExtMoveError, MoveResult, organize};

use crate::logging::init_tracing;

/// Run the CLI application. Only setup failures return `Err`.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config()?;

    // Hold the guard until the end of run so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting ext_mover: {:?}", args);

    cfg.validate().inspect_err(log_fatal)?;

    let summary = organize(&cfg, |outcome| match outcome {
        MoveResult::Moved { from, to } => out::print_user(&out::moved_line(from, to)),
        MoveResult::Planned { from, to } => out::print_user(&out::planned_line(from, to)),
        MoveResult::Failed { from, reason } => {
            out::print_warn(&format!("Failed to move {}: {}", from.display(), reason));
        }
    })
    .inspect_err(log_fatal)?;

    if summary.total() == 0 {
        out::print_info(&format!(
            "No {} files found under {}",
            cfg.traversal.target_extension(),
            cfg.traversal.source_root().display()
        ));
    } else if summary.failed > 0 {
        out::print_warn(&summary.to_string());
    } else {
        out::print_success(&summary.to_string());
    }
    Ok(())
}

fn log_fatal(e: &ExtMoveError) {
    error!(code = e.code(), error = %e, "Aborting run");
}
