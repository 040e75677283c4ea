//! Commit reconciliation - pure functions for flattening the board
//!
//! This module contains the pure, testable logic for turning a staged
//! workspace back into a flat item collection. No I/O happens here -
//! all data is passed in, making it easy to unit test.

use crate::staging::Workspace;
use crate::types::{Bucket, Item};

/// Compute a fresh partition id for the staged bucket
///
/// One greater than the maximum id present anywhere in the collection,
/// so repeated merges never collide with an existing partition.
#[must_use]
pub fn next_partition_id(items: &[Item]) -> u32 {
    items.iter().map(|i| i.partition).max().unwrap_or(0) + 1
}

/// Flatten a staged workspace into the post-commit collection (PURE)
///
/// Items keep the partition of the bucket they sit in at commit time,
/// not the one they started in:
/// - left bucket items are tagged with partition A,
/// - right bucket items with partition B,
/// - staged items with a fresh id from [`next_partition_id`].
///
/// Items of `all_items` that belong to neither source partition are
/// preserved verbatim in their original positions; the merged buckets
/// are appended after them in board order.
#[must_use]
pub fn reconcile(workspace: &Workspace, all_items: &[Item]) -> Vec<Item> {
    let (a, b) = (workspace.partition_a(), workspace.partition_b());
    let new_partition = next_partition_id(all_items);

    let retag = |items: &[Item], partition: u32| {
        items.iter().cloned().map(move |mut item| {
            item.partition = partition;
            item
        }).collect::<Vec<_>>()
    };

    let mut result: Vec<Item> = all_items
        .iter()
        .filter(|i| i.partition != a && i.partition != b)
        .cloned()
        .collect();
    result.extend(retag(workspace.bucket(Bucket::SourceA), a));
    result.extend(retag(workspace.bucket(Bucket::SourceB), b));
    result.extend(retag(workspace.bucket(Bucket::Staging), new_partition));
    result
}
