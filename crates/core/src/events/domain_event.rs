//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by the goal store after successful mutations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was added to the collection.
    GoalCreated { goal_id: String },

    /// A contribution was recorded.
    GoalContributed { goal_id: String, amount: u64 },

    /// A goal's saved total reached its target for the first time since
    /// creation or the last reset. Emitted at most once per such edge.
    GoalCompleted { goal_id: String, name: String },

    /// A goal's progress and history were cleared.
    GoalReset { goal_id: String },

    /// A goal was removed from the collection.
    GoalDeleted { goal_id: String },
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: impl Into<String>) -> Self {
        Self::GoalCreated {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a GoalContributed event.
    pub fn goal_contributed(goal_id: impl Into<String>, amount: u64) -> Self {
        Self::GoalContributed {
            goal_id: goal_id.into(),
            amount,
        }
    }

    /// Creates a GoalCompleted event.
    pub fn goal_completed(goal_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::GoalCompleted {
            goal_id: goal_id.into(),
            name: name.into(),
        }
    }

    /// Creates a GoalReset event.
    pub fn goal_reset(goal_id: impl Into<String>) -> Self {
        Self::GoalReset {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a GoalDeleted event.
    pub fn goal_deleted(goal_id: impl Into<String>) -> Self {
        Self::GoalDeleted {
            goal_id: goal_id.into(),
        }
    }

    pub fn goal_id(&self) -> &str {
        match self {
            Self::GoalCreated { goal_id }
            | Self::GoalContributed { goal_id, .. }
            | Self::GoalCompleted { goal_id, .. }
            | Self::GoalReset { goal_id }
            | Self::GoalDeleted { goal_id } => goal_id,
        }
    }
}
