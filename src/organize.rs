//! Run driver: feeds each planned candidate straight into the mover.

use tracing::info;

use crate::config::Config;
use crate::errors::ExtMoveError;
use crate::fs_ops::{MoveResult, Planner, RunSummary, move_candidate};

/// Walk the configured source and move every candidate into the destination.
///
/// `report` sees each outcome as soon as it is known. Per-file failures are
/// counted, not returned; only a traversal that cannot start is an error.
/// The destination must already exist unless `config.dry_run` is set
/// (see [`Config::validate`]).
pub fn organize<F>(config: &Config, mut report: F) -> Result<RunSummary, ExtMoveError>
where
    F: FnMut(&MoveResult),
{
    let traversal = &config.traversal;
    let mut planner = Planner::new(traversal)?;
    let mut summary = RunSummary::default();

    for candidate in planner.by_ref() {
        let src = candidate?;
        let outcome = move_candidate(&src, traversal.dest_root(), config.dry_run);
        summary.record(&outcome);
        report(&outcome);
    }
    summary.skipped = planner.skipped();

    info!(
        moved = summary.moved,
        planned = summary.planned,
        failed = summary.failed,
        skipped = summary.skipped,
        "Run finished"
    );
    Ok(summary)
}
