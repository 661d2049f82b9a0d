use crate::errors::Result;
use crate::goals::goals_model::Goal;

/// Trait for goal persistence.
///
/// The collection is always read and written as a whole; there are no
/// partial updates.
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads the stored collection. Missing or unreadable data yields an
    /// empty collection; this never fails.
    fn load_goals(&self) -> Vec<Goal>;

    /// Replaces the stored collection with `goals`.
    fn save_goals(&self, goals: &[Goal]) -> Result<()>;
}
