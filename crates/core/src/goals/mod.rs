//! Goals module - domain models, the goal store, and the repository trait.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::{Contribution, ContributionOutcome, Goal, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::GoalRepositoryTrait;
