use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info};

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::goals_model::{Contribution, ContributionOutcome, Goal, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::utils::id::unique_goal_id;
use crate::validation::validate_goal_name;

/// The goal store: the single in-memory collection (newest first) and the
/// only place it is mutated. Every successful mutation writes the whole
/// collection through the repository and emits a domain event.
pub struct GoalService {
    goals: Vec<Goal>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    /// Builds the store from whatever the repository holds.
    pub fn load(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        let goals = goal_repo.load_goals();
        GoalService {
            goals,
            goal_repo,
            event_sink,
        }
    }

    pub fn list_goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn create_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        let name = validate_goal_name(&new_goal.name)?;
        if new_goal.target == 0 {
            return Err(ValidationError::InvalidTarget(new_goal.target.to_string()).into());
        }

        let id = unique_goal_id(|candidate| self.goals.iter().any(|g| g.id == candidate));
        let goal = Goal {
            id,
            name,
            target: new_goal.target,
            saved: 0,
            image: new_goal.image,
            history: Vec::new(),
            completed: false,
        };
        debug!("Created goal {} ({})", goal.id, goal.name);

        self.goals.insert(0, goal.clone());
        self.persist();
        self.event_sink.emit(DomainEvent::goal_created(&goal.id));
        Ok(goal)
    }

    /// Records a contribution. Completion is edge-triggered on the
    /// `completed` flag: only the contribution that first reaches the target
    /// reports `completed_now`.
    pub fn contribute(&mut self, goal_id: &str, amount: u64) -> Result<ContributionOutcome> {
        if amount == 0 {
            return Err(ValidationError::InvalidAmount(amount.to_string()).into());
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::GoalNotFound(goal_id.to_string()))?;
        let saved = goal
            .saved
            .checked_add(amount)
            .ok_or(ValidationError::AmountOverflow)?;

        goal.saved = saved;
        goal.history.insert(
            0,
            Contribution {
                amount,
                timestamp: Utc::now().timestamp_millis(),
            },
        );

        let completed_now = !goal.completed && goal.is_target_reached();
        if completed_now {
            goal.completed = true;
            info!("Goal {} ({}) reached its target", goal.id, goal.name);
        }
        let goal = goal.clone();

        self.persist();
        let mut events = vec![DomainEvent::goal_contributed(&goal.id, amount)];
        if completed_now {
            events.push(DomainEvent::goal_completed(&goal.id, &goal.name));
        }
        self.event_sink.emit_batch(events);

        Ok(ContributionOutcome {
            goal,
            completed_now,
        })
    }

    /// Clears saved amount, history and the completed flag.
    pub fn reset_progress(&mut self, goal_id: &str) -> Result<Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::GoalNotFound(goal_id.to_string()))?;
        goal.saved = 0;
        goal.history.clear();
        goal.completed = false;
        let goal = goal.clone();
        debug!("Reset progress of goal {}", goal.id);

        self.persist();
        self.event_sink.emit(DomainEvent::goal_reset(&goal.id));
        Ok(goal)
    }

    /// Removes the goal. Returns false, and changes nothing, when no goal
    /// has this id.
    pub fn delete_goal(&mut self, goal_id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != goal_id);
        if self.goals.len() == before {
            debug!("Delete ignored, goal {} not found", goal_id);
            return false;
        }

        self.persist();
        self.event_sink.emit(DomainEvent::goal_deleted(goal_id));
        true
    }

    /// A failed write loses only that save; the in-memory state stays
    /// authoritative.
    fn persist(&self) {
        if let Err(e) = self.goal_repo.save_goals(&self.goals) {
            error!("Failed to persist {} goals: {}", self.goals.len(), e);
        }
    }
}
