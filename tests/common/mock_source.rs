//! Mock list source for testing
//!
//! These are test utilities - not all may be used in current tests but
//! are available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use listfold::error::{Error, Result};
use listfold::source::ListSource;
use listfold::types::Item;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Simple mock list source for testing
///
/// This manually implements `ListSource` rather than using a mocking
/// crate, matching how the rest of the suite builds its doubles.
///
/// Features:
/// - Scripted responses, consumed in order (one per fetch)
/// - Call counting for verification
/// - Error injection for failure path testing
pub struct MockListSource {
    endpoint: String,
    responses: Mutex<VecDeque<std::result::Result<Vec<Item>, String>>>,
    fetch_calls: AtomicUsize,
}

impl MockListSource {
    /// Create a mock with no scripted responses
    pub fn new() -> Self {
        Self {
            endpoint: "mock://lists".to_string(),
            responses: Mutex::new(VecDeque::new()),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Script a successful fetch returning `items`
    pub fn push_items(&self, items: Vec<Item>) {
        self.responses.lock().unwrap().push_back(Ok(items));
    }

    /// Script a failed fetch with the given message
    pub fn push_error(&self, msg: &str) {
        self.responses.lock().unwrap().push_back(Err(msg.to_string()));
    }

    /// Number of times `fetch_lists` was called
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockListSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListSource for MockListSource {
    async fn fetch_lists(&self) -> Result<Vec<Item>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(items)) => Ok(items),
            Some(Err(msg)) => Err(Error::Fetch(msg)),
            None => Err(Error::Fetch(
                "fetch_lists: no response configured".to_string(),
            )),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
