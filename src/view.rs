//! Rendering-boundary projection
//!
//! Pure data structures handed to whatever shell draws the screen.
//! The shell translates user gestures into controller operations; it
//! must not mutate buckets or partition tags directly, and everything
//! here is read-only to keep that boundary honest.

use crate::merge::MergeController;
use crate::types::{Bucket, Item, LoadStatus, Mode};

/// One item as the shell should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Item identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Description text
    pub description: String,
    /// Buckets this item may legally move to right now (empty while
    /// browsing)
    pub targets: &'static [Bucket],
}

impl ItemView {
    fn browsing(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            targets: &[],
        }
    }

    fn staged(item: &Item, bucket: Bucket) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            targets: bucket.targets(),
        }
    }
}

/// One partition as listed in the browsing screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionView {
    /// Partition id
    pub partition: u32,
    /// Whether this partition is currently selected
    pub selected: bool,
    /// The partition's items, insertion order
    pub items: Vec<ItemView>,
}

/// One bucket of the staging board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketView {
    /// Which bucket this is
    pub bucket: Bucket,
    /// The partition tag this bucket commits to (`None` for staging,
    /// whose tag is only computed at commit time)
    pub partition: Option<u32>,
    /// The bucket's items with their legal move targets
    pub items: Vec<ItemView>,
}

/// Everything a shell needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Current controller mode
    pub mode: Mode,
    /// Current repository load status
    pub status: LoadStatus,
    /// Selected partition ids, in selection order
    pub selection: Vec<u32>,
    /// Validation message from a failed staging request, if any
    pub validation: Option<String>,
    /// Browsing: one entry per partition, sorted by id. Empty while
    /// staging.
    pub partitions: Vec<PartitionView>,
    /// Staging: the three buckets in board order. Empty while
    /// browsing.
    pub buckets: Vec<BucketView>,
}

impl BoardView {
    /// Project the controller's state into display data
    #[must_use]
    pub fn project(controller: &MergeController) -> Self {
        let mode = controller.mode();
        let (partitions, buckets) = match controller.workspace() {
            Some(ws) => {
                let buckets = Bucket::ALL
                    .into_iter()
                    .map(|bucket| BucketView {
                        bucket,
                        partition: match bucket {
                            Bucket::SourceA => Some(ws.partition_a()),
                            Bucket::Staging => None,
                            Bucket::SourceB => Some(ws.partition_b()),
                        },
                        items: ws
                            .bucket(bucket)
                            .iter()
                            .map(|i| ItemView::staged(i, bucket))
                            .collect(),
                    })
                    .collect();
                (Vec::new(), buckets)
            }
            None => {
                let partitions = controller
                    .repo()
                    .partition_ids()
                    .into_iter()
                    .map(|partition| PartitionView {
                        partition,
                        selected: controller.selection().contains(partition),
                        items: controller
                            .repo()
                            .by_partition(partition)
                            .iter()
                            .map(ItemView::browsing)
                            .collect(),
                    })
                    .collect();
                (partitions, Vec::new())
            }
        };

        Self {
            mode,
            status: controller.repo().status().clone(),
            selection: controller.selection().current().to_vec(),
            validation: controller.validation_message().map(String::from),
            partitions,
            buckets,
        }
    }
}
