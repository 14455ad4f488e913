//! Filesystem operations: traversal planning, name resolution and moves.

mod atomic;
mod duplicate;
mod file_move;
mod helpers;
mod outcome;
mod plan;
mod util;

pub use duplicate::{disambiguated_name, resolve_destination, resolve_destination_with};
pub use file_move::move_candidate;
pub use helpers::{describe_io_error, hint_for};
pub use outcome::{MoveResult, RunSummary};
pub use plan::{Planner, Visit, matches_extension};
