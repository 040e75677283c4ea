//! Merge engine for the two-list staging workflow
//!
//! Two-layer pattern:
//! 1. Reconcile - compute the post-commit collection (pure, testable)
//! 2. Controller - the Browsing/Staging mode machine that owns the
//!    repository, selection, and workspace (effectful)

mod controller;
mod reconcile;

pub use controller::{MergeController, SELECTION_COUNT_MESSAGE};
pub use reconcile::{next_partition_id, reconcile};
