//! Gaman Core - a personal savings-goal tracker.
//!
//! This crate contains the whole domain: the goal store and its
//! persistence, the pure renderer that turns goals into a view model, and
//! the completion celebration. It is storage-agnostic; durable key-value
//! stores are implemented by the `storage-file` crate.

pub mod app;
pub mod celebration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod images;
pub mod input;
pub mod render;
pub mod storage;
pub mod utils;
pub mod validation;

pub use app::{GamanApp, GoalForm, UserPrompt};
pub use goals::{Goal, GoalService, NewGoal};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
