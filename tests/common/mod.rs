//! Shared fixtures for the test suites

#![allow(dead_code)]

pub mod mock_source;

use listfold::merge::MergeController;
use listfold::types::Item;
use mock_source::MockListSource;

/// The two-item collection from the reference data set
pub fn reference_items() -> Vec<Item> {
    vec![
        Item::new(1, "X", "first item", 1),
        Item::new(2, "Y", "second item", 2),
    ]
}

/// A richer collection: three items in list 1, two in list 2, and one
/// unrelated item in list 9
pub fn grocery_items() -> Vec<Item> {
    vec![
        Item::new(1, "Bananas", "A dozen", 1),
        Item::new(2, "Oats", "Rolled", 1),
        Item::new(3, "Milk", "Two liters", 1),
        Item::new(4, "Bread", "Sourdough", 2),
        Item::new(5, "Butter", "Salted", 2),
        Item::new(6, "Batteries", "AA", 9),
    ]
}

/// Build a controller whose repository is loaded with `items`
pub async fn loaded_controller(items: Vec<Item>) -> MergeController {
    let source = MockListSource::new();
    source.push_items(items);

    let mut controller = MergeController::new();
    assert!(controller.load(&source).await);
    assert!(controller.repo().status().is_loaded());
    controller
}
