//! Core library for `ext_mover`.
//!
//! Gathers every file with a given extension from a source tree into one
//! destination directory. A [`fs_ops::Planner`] walks the tree and yields
//! candidates lazily; [`fs_ops::move_candidate`] renames each one under a
//! collision-free name. [`organize`] wires the two together.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod organize;
pub mod output;
pub mod platform;

pub use config::{Config, LogLevel, TraversalConfig, path_has_symlink_ancestor};
pub use errors::ExtMoveError;
pub use fs_ops::{MoveResult, Planner, RunSummary, move_candidate, resolve_destination};
pub use organize::organize;
