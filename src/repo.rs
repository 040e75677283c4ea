//! Item repository - the single source of truth for persisted items

use crate::error::Error;
use crate::types::{Item, LoadStatus};
use tracing::debug;

/// Token identifying one load attempt
///
/// Tokens are monotonically increasing; [`ItemRepository::complete_load`]
/// only applies the outcome carried by the newest token, so a slow,
/// stale response cannot overwrite a fresher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Holds the full item collection and its load state
///
/// Readers never observe a partial write: `complete_load` and
/// `replace_all` swap the whole collection in one step.
#[derive(Debug, Default)]
pub struct ItemRepository {
    items: Vec<Item>,
    status: LoadStatus,
    latest_token: u64,
}

impl ItemRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a load attempt
    ///
    /// Enters `Loading` and mints the token the caller must hand back
    /// to [`complete_load`](Self::complete_load).
    pub fn begin_load(&mut self) -> LoadToken {
        self.latest_token += 1;
        self.status = LoadStatus::Loading;
        LoadToken(self.latest_token)
    }

    /// Complete a load attempt
    ///
    /// Returns `false` (leaving all state untouched) when `token` is
    /// not the newest issued. Otherwise replaces the contents
    /// wholesale on success or records the failure message.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        outcome: Result<Vec<Item>, Error>,
    ) -> bool {
        if token.0 != self.latest_token {
            debug!(stale = token.0, latest = self.latest_token, "ignoring stale load");
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Atomically swap the repository contents (commit path)
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Every item, in insertion order
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Items tagged with `partition`, insertion order preserved
    #[must_use]
    pub fn by_partition(&self, partition: u32) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| i.partition == partition)
            .cloned()
            .collect()
    }

    /// Distinct partition ids present, sorted
    #[must_use]
    pub fn partition_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.items.iter().map(|i| i.partition).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Current load status
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Item> {
        vec![
            Item::new(1, "X", "first", 1),
            Item::new(2, "Y", "second", 2),
            Item::new(3, "Z", "third", 1),
        ]
    }

    #[test]
    fn load_success_populates_and_marks_loaded() {
        let mut repo = ItemRepository::new();
        assert_eq!(*repo.status(), LoadStatus::Empty);

        let token = repo.begin_load();
        assert_eq!(*repo.status(), LoadStatus::Loading);
        assert!(repo.complete_load(token, Ok(seed())));

        assert!(repo.status().is_loaded());
        assert_eq!(repo.all().len(), 3);
    }

    #[test]
    fn load_failure_is_failed_not_empty() {
        let mut repo = ItemRepository::new();
        let token = repo.begin_load();
        assert!(repo.complete_load(token, Err(Error::Fetch("boom".into()))));

        match repo.status() {
            LoadStatus::Failed(msg) => assert!(msg.contains("boom")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(repo.all().is_empty());
    }

    #[test]
    fn retry_after_failure_overwrites() {
        let mut repo = ItemRepository::new();
        let first = repo.begin_load();
        repo.complete_load(first, Err(Error::Fetch("down".into())));

        let second = repo.begin_load();
        assert!(repo.complete_load(second, Ok(seed())));
        assert!(repo.status().is_loaded());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut repo = ItemRepository::new();
        let stale = repo.begin_load();
        let fresh = repo.begin_load();

        assert!(repo.complete_load(fresh, Ok(seed())));
        // The slow first response arrives after the retry resolved.
        assert!(!repo.complete_load(stale, Err(Error::Fetch("late".into()))));

        assert!(repo.status().is_loaded());
        assert_eq!(repo.all().len(), 3);
    }

    #[test]
    fn by_partition_filters_in_insertion_order() {
        let mut repo = ItemRepository::new();
        let token = repo.begin_load();
        repo.complete_load(token, Ok(seed()));

        let ones = repo.by_partition(1);
        assert_eq!(ones.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(repo.by_partition(9).is_empty());
    }

    #[test]
    fn partition_ids_sorted_and_deduplicated() {
        let mut repo = ItemRepository::new();
        let token = repo.begin_load();
        repo.complete_load(
            token,
            Ok(vec![
                Item::new(1, "a", "", 5),
                Item::new(2, "b", "", 1),
                Item::new(3, "c", "", 5),
            ]),
        );
        assert_eq!(repo.partition_ids(), vec![1, 5]);
    }
}
