//! Core types for listfold

use serde::{Deserialize, Serialize};

/// A single list entry
///
/// The `id` is immutable and globally unique across the whole
/// repository, staged copies included: moving an item between buckets
/// changes its bucket membership, never its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique item identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Description text
    pub description: String,
    /// Partition tag (wire field `list_number`), rewritten only by
    /// commit reconciliation
    #[serde(rename = "list_number")]
    pub partition: u32,
}

impl Item {
    /// Create an item with the given partition tag
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        partition: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            partition,
        }
    }
}

/// One of the three staging containers
///
/// Buckets are adjacency-constrained: `SourceA` exchanges only with
/// `Staging`, `Staging` with both sources, and `SourceA`/`SourceB`
/// never exchange directly. The table lives in [`Bucket::targets`], so
/// illegal transfers are a closed, statically known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Snapshot of the first selected partition
    SourceA,
    /// The new list being assembled
    Staging,
    /// Snapshot of the second selected partition
    SourceB,
}

impl Bucket {
    /// All three buckets in board order (left to right)
    pub const ALL: [Self; 3] = [Self::SourceA, Self::Staging, Self::SourceB];

    /// Buckets an item may legally move to from this bucket
    #[must_use]
    pub const fn targets(self) -> &'static [Self] {
        match self {
            Self::SourceA => &[Self::Staging],
            Self::Staging => &[Self::SourceA, Self::SourceB],
            Self::SourceB => &[Self::Staging],
        }
    }

    /// Check whether a direct transfer to `other` is legal
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.targets().contains(&other)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceA => write!(f, "list 1"),
            Self::Staging => write!(f, "new list"),
            Self::SourceB => write!(f, "list 2"),
        }
    }
}

/// Current mode of the merge controller
///
/// Initial state is `Browsing`. There is no terminal state: `Staging`
/// always returns to `Browsing` via commit or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Viewing partitions and picking the two to merge
    #[default]
    Browsing,
    /// Moving items across the three-bucket board
    Staging,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browsing => write!(f, "browsing"),
            Self::Staging => write!(f, "staging"),
        }
    }
}

/// Repository load state
///
/// `Failed` is distinct from `Empty`: a failed load keeps its message
/// and is retried by issuing a new load, which overwrites whatever
/// state existed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load attempted yet
    #[default]
    Empty,
    /// A load is in flight; data-dependent actions are rejected
    Loading,
    /// Items are populated
    Loaded,
    /// The last load failed; retryable
    Failed(String),
}

impl LoadStatus {
    /// Whether items are available to act on
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}
