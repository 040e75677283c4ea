//! Merge controller - the Browsing/Staging mode machine (EFFECTFUL)
//!
//! Owns the repository, the selection, and the workspace while one is
//! alive, and runs every transition synchronously to completion. The
//! only suspend point is [`MergeController::load`].

use crate::merge::reconcile::reconcile;
use crate::repo::ItemRepository;
use crate::select::Selection;
use crate::source::ListSource;
use crate::staging::Workspace;
use crate::types::{Bucket, Mode};
use tracing::debug;

/// Validation message surfaced when staging is requested with the
/// wrong number of selected lists
pub const SELECTION_COUNT_MESSAGE: &str =
    "You should select exactly 2 lists to create a new list";

/// Orchestrates the browse/stage/commit lifecycle
///
/// All operations are synchronous and run to completion; no partially
/// moved item or partially reconciled repository is ever observable.
#[derive(Debug, Default)]
pub struct MergeController {
    repo: ItemRepository,
    selection: Selection,
    workspace: Option<Workspace>,
    validation: Option<String>,
}

impl MergeController {
    /// Create a controller with an empty repository, in `Browsing`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, derived from workspace ownership
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.workspace.is_some() {
            Mode::Staging
        } else {
            Mode::Browsing
        }
    }

    /// The item repository (read access)
    #[must_use]
    pub const fn repo(&self) -> &ItemRepository {
        &self.repo
    }

    /// The current selection (read access)
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The staging workspace, while in `Staging`
    #[must_use]
    pub const fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    /// The validation message, if a failed staging request set one
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Load (or reload) the item collection from the source
    ///
    /// The async boundary: suspends on the fetch and resolves exactly
    /// once. Failures land in `LoadStatus::Failed` rather than
    /// propagating; a retry simply calls this again. Returns `false`
    /// if the completion was stale (a newer load already resolved).
    pub async fn load(&mut self, source: &dyn ListSource) -> bool {
        let token = self.repo.begin_load();
        let outcome = source.fetch_lists().await;
        self.repo.complete_load(token, outcome)
    }

    /// Toggle a partition in the selection (browsing only)
    pub fn toggle(&mut self, partition: u32) {
        if self.workspace.is_some() {
            debug!(partition, "toggle ignored while staging");
            return;
        }
        self.selection.toggle(partition);
    }

    /// Request the transition into `Staging`
    ///
    /// Precondition: exactly two partitions selected. On violation the
    /// controller stays in `Browsing` and surfaces a validation
    /// message - a reported error, not a fault. On success the two
    /// partitions are snapshotted in selection order and the message
    /// is cleared.
    pub fn request_merge(&mut self) {
        if self.workspace.is_some() {
            debug!("request_merge ignored while staging");
            return;
        }
        let &[a, b] = self.selection.current() else {
            self.validation = Some(SELECTION_COUNT_MESSAGE.to_string());
            return;
        };
        self.workspace = Some(Workspace::snapshot(
            a,
            self.repo.by_partition(a),
            b,
            self.repo.by_partition(b),
        ));
        self.validation = None;
    }

    /// Move an item between buckets (staging only)
    ///
    /// Delegates validation to the workspace; illegal moves are a
    /// no-op returning `false`, as is any move while browsing.
    pub fn move_item(&mut self, item_id: u64, from: Bucket, to: Bucket) -> bool {
        match self.workspace.as_mut() {
            Some(ws) => ws.move_item(item_id, from, to),
            None => {
                debug!(item_id, "move ignored while browsing");
                false
            }
        }
    }

    /// Discard the workspace and return to `Browsing`
    ///
    /// A pure discard: buckets are dropped, the selection and any
    /// validation message are cleared, and the repository is left
    /// exactly as it was before `request_merge`.
    pub fn cancel(&mut self) {
        if self.workspace.take().is_none() {
            debug!("cancel ignored while browsing");
            return;
        }
        self.selection.clear();
        self.validation = None;
    }

    /// Commit the workspace and return to `Browsing`
    ///
    /// Flattens the buckets back into the repository with rewritten
    /// partition tags (see [`reconcile`]) in one atomic swap, then
    /// clears the selection and any validation message.
    pub fn commit(&mut self) {
        let Some(ws) = self.workspace.take() else {
            debug!("commit ignored while browsing");
            return;
        };
        let merged = reconcile(&ws, self.repo.all());
        self.repo.replace_all(merged);
        self.selection.clear();
        self.validation = None;
    }
}
