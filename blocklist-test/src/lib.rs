//! Test utilities for blocklist.
//!
//! Provides a reference `Model` of the list, and a `Scenario` driving both the list and the model through a seeded,
//! hence reproducible, sequence of random operations.

mod model;
mod scenario;

pub use model::Model;
pub use scenario::{Operation, Scenario};
