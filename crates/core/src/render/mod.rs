//! Renderer - a pure projection from the goal collection to a view model.
//!
//! The whole list is rebuilt on every change; nothing is diffed. Hosts turn
//! the serialized view model into their own widgets or DOM.

mod renderer;
mod view_model;

pub use renderer::{progress_percent, render_goal_card, render_goals, render_goals_in};
pub use view_model::{GoalCardView, GoalListView, Thumbnail};
