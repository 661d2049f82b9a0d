//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful goal mutations. Hosts implement the sink to react to goal
//! changes; the completion event is what drives the celebration.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
