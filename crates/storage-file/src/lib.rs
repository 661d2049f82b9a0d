//! File-backed storage for the gaman savings tracker.
//!
//! Implements the `KeyValueStore` trait from `gaman-core` on top of a single
//! JSON document on disk, the desktop counterpart of browser local storage.
//!
//! ```text
//! core (goal store) ──► LocalGoalRepository ──► KeyValueStore
//!                                                    │
//!                                                    ▼
//!                                      FileKeyValueStore (this crate)
//!                                                    │
//!                                                    ▼
//!                                               store.json
//! ```

pub mod errors;
mod file_store;

pub use errors::StorageError;
pub use file_store::FileKeyValueStore;
