//! Storage module - the string key-value store seam and the goal
//! persistence adapter built on it.
//!
//! Concrete on-disk stores live in the `storage-file` crate; this module only
//! defines the trait plus an in-memory implementation.

mod goal_repository;
mod key_value;

pub use goal_repository::LocalGoalRepository;
pub use key_value::{KeyValueStore, MemoryKeyValueStore};
