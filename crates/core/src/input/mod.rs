//! Input helpers that sit between host widgets and the goal store.

mod hold_repeat;

pub use hold_repeat::HoldRepeat;
