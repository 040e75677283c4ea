//! Staging workspace - the three-bucket board

use crate::types::{Bucket, Item};
use tracing::debug;

/// The in-progress merge board
///
/// Snapshotted from the repository when staging begins and exclusively
/// owns bucket placement until commit or cancel; the repository is
/// never touched while a workspace is alive.
///
/// Invariant: the multiset of items across the three buckets is
/// exactly the snapshot taken at creation - transfers never create,
/// duplicate, or lose an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    partition_a: u32,
    partition_b: u32,
    source_a: Vec<Item>,
    staging: Vec<Item>,
    source_b: Vec<Item>,
}

impl Workspace {
    /// Snapshot a workspace from the two selected partitions
    ///
    /// `items_a` and `items_b` are the partitions' items in selection
    /// order; staging starts empty.
    #[must_use]
    pub fn snapshot(
        partition_a: u32,
        items_a: Vec<Item>,
        partition_b: u32,
        items_b: Vec<Item>,
    ) -> Self {
        Self {
            partition_a,
            partition_b,
            source_a: items_a,
            staging: Vec::new(),
            source_b: items_b,
        }
    }

    /// Partition id snapshotted into the left bucket
    #[must_use]
    pub const fn partition_a(&self) -> u32 {
        self.partition_a
    }

    /// Partition id snapshotted into the right bucket
    #[must_use]
    pub const fn partition_b(&self) -> u32 {
        self.partition_b
    }

    /// Items of one bucket, in board order
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &[Item] {
        match bucket {
            Bucket::SourceA => &self.source_a,
            Bucket::Staging => &self.staging,
            Bucket::SourceB => &self.source_b,
        }
    }

    /// Total item count across all three buckets
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.source_a.len() + self.staging.len() + self.source_b.len()
    }

    /// Move an item between adjacent buckets
    ///
    /// The item must currently be in `from` (by id) and `to` must be
    /// adjacency-reachable from `from`. Violations are rejected as a
    /// no-op returning `false` - the board validates independently
    /// rather than trusting the shell to only offer legal moves. The
    /// item is removed from `from` preserving the relative order of
    /// the rest and appended to the end of `to`.
    pub fn move_item(&mut self, item_id: u64, from: Bucket, to: Bucket) -> bool {
        if !from.is_adjacent(to) {
            debug!(%from, %to, item_id, "rejected non-adjacent move");
            return false;
        }
        let Some(pos) = self.bucket(from).iter().position(|i| i.id == item_id) else {
            debug!(%from, item_id, "rejected move of absent item");
            return false;
        };
        let item = self.bucket_mut(from).remove(pos);
        self.bucket_mut(to).push(item);
        true
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Item> {
        match bucket {
            Bucket::SourceA => &mut self.source_a,
            Bucket::Staging => &mut self.staging,
            Bucket::SourceB => &mut self.source_b,
        }
    }
}
