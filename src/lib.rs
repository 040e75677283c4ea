//! listfold - interactive merge of two item lists into a new list
//!
//! The core is a small state machine: pick exactly two lists while
//! browsing, stage their items across a three-bucket board, then
//! commit the board back into the collection under rewritten list
//! tags, or cancel and discard it. Fetching the collection and
//! drawing the screens are thin shells around that core.
//!
//! - [`types`] - items, buckets, modes, load states
//! - [`source`] - the external data source boundary
//! - [`repo`] - the item repository and its load-state machine
//! - [`select`] - the capacity-2 list picker
//! - [`staging`] - the three-bucket board and its transfer rules
//! - [`merge`] - commit reconciliation and the mode controller
//! - [`view`] - the projection consumed by the rendering shell

pub mod config;
pub mod error;
pub mod merge;
pub mod repo;
pub mod select;
pub mod source;
pub mod staging;
pub mod types;
pub mod view;
