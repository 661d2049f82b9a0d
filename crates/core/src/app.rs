//! Application controller.
//!
//! Owns the goal store, the latest rendered view and the celebration, and
//! runs every user action through the same pipeline: validate, mutate the
//! store (which persists), re-render, and celebrate on a completion edge.
//! Widgets, dialogs and the canvas belong to the host and reach the core only
//! through these methods and the [`UserPrompt`] trait.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};

use crate::celebration::{CelebrationEffect, CelebrationFrame, Viewport};
use crate::config::TrackerConfig;
use crate::errors::Result;
use crate::events::DomainEventSink;
use crate::goals::{ContributionOutcome, Goal, GoalService, NewGoal};
use crate::images::ImageEncoder;
use crate::input::HoldRepeat;
use crate::render::{render_goals, GoalListView};
use crate::storage::{KeyValueStore, LocalGoalRepository};
use crate::validation::{parse_positive_amount, parse_target, validate_goal_name};

const RESET_CONFIRMATION: &str = "この目標の進捗を0に戻します。よろしいですか？";
const DELETE_CONFIRMATION: &str = "この目標を削除します。よろしいですか？";

/// Blocking dialogs provided by the host.
pub trait UserPrompt {
    /// Asks a yes/no question; true means the user agreed.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Raw values from the goal creation form.
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub name: String,
    pub target: String,
    pub image_path: Option<PathBuf>,
}

/// A held quick-add button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAdd {
    pub goal_id: String,
    pub amount: u64,
}

pub fn celebration_message(goal_name: &str) -> String {
    format!("「{}」を達成！おめでとう🎉", goal_name)
}

pub struct GamanApp<P: UserPrompt> {
    config: TrackerConfig,
    goals: GoalService,
    view: GoalListView,
    celebration: CelebrationEffect,
    hold: HoldRepeat<QuickAdd>,
    prompt: P,
}

impl<P: UserPrompt> GamanApp<P> {
    /// Loads stored goals and renders them once. Fails on an invalid config.
    pub fn new(
        config: TrackerConfig,
        store: Arc<dyn KeyValueStore>,
        event_sink: Arc<dyn DomainEventSink>,
        prompt: P,
        viewport: Viewport,
    ) -> Result<Self> {
        let celebration = CelebrationEffect::new(config.celebration.clone(), viewport);
        Self::with_celebration(config, store, event_sink, prompt, celebration)
    }

    pub fn with_celebration(
        config: TrackerConfig,
        store: Arc<dyn KeyValueStore>,
        event_sink: Arc<dyn DomainEventSink>,
        prompt: P,
        celebration: CelebrationEffect,
    ) -> Result<Self> {
        config.validate()?;
        let repository = Arc::new(LocalGoalRepository::with_key(
            store,
            config.storage_key.clone(),
        ));
        let goals = GoalService::load(repository, event_sink);
        let view = render_goals(goals.list_goals(), &config.quick_add_amounts);
        let hold = HoldRepeat::new(config.hold_repeat.clone());
        Ok(GamanApp {
            config,
            goals,
            view,
            celebration,
            hold,
            prompt,
        })
    }

    pub fn view(&self) -> &GoalListView {
        &self.view
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.list_goals()
    }

    pub fn celebration(&self) -> &CelebrationEffect {
        &self.celebration
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Creates a goal from the form. Name and target are checked before the
    /// photo is read; any failure is shown to the user and leaves the store
    /// untouched.
    pub async fn submit_goal(
        &mut self,
        form: GoalForm,
        encoder: &dyn ImageEncoder,
    ) -> Result<Goal> {
        let result = self.create_from_form(form, encoder).await;
        match &result {
            Ok(goal) => {
                debug!("Goal {} submitted", goal.id);
                self.rerender();
            }
            Err(e) => self.prompt.alert(&e.user_message()),
        }
        result
    }

    async fn create_from_form(
        &mut self,
        form: GoalForm,
        encoder: &dyn ImageEncoder,
    ) -> Result<Goal> {
        let name = validate_goal_name(&form.name)?;
        let target = parse_target(&form.target)?;

        let mut new_goal = NewGoal::new(name, target);
        if let Some(path) = &form.image_path {
            new_goal = new_goal.with_image(encoder.encode(path).await?);
        }
        self.goals.create_goal(new_goal)
    }

    /// Adds the amount typed into a goal card.
    pub fn add_contribution(
        &mut self,
        goal_id: &str,
        raw_amount: &str,
        now: Instant,
    ) -> Result<ContributionOutcome> {
        let result = parse_positive_amount(raw_amount)
            .and_then(|amount| self.apply_contribution(goal_id, amount, now));
        if let Err(e) = &result {
            self.prompt.alert(&e.user_message());
        }
        result
    }

    /// Quick-add button went down: contributes once now and keeps repeating
    /// from [`GamanApp::tick`] until released.
    pub fn press_quick_add(
        &mut self,
        goal_id: &str,
        amount: u64,
        now: Instant,
    ) -> Result<ContributionOutcome> {
        let action = self.hold.press(
            QuickAdd {
                goal_id: goal_id.to_string(),
                amount,
            },
            now,
        );
        let result = self.apply_contribution(&action.goal_id, action.amount, now);
        if let Err(e) = &result {
            self.hold.release();
            self.prompt.alert(&e.user_message());
        }
        result
    }

    pub fn release_quick_add(&mut self) {
        self.hold.release();
    }

    /// Resets a goal after the user confirms. Returns whether it was reset.
    pub fn request_reset(&mut self, goal_id: &str) -> Result<bool> {
        if !self.prompt.confirm(RESET_CONFIRMATION) {
            return Ok(false);
        }
        self.goals.reset_progress(goal_id)?;
        self.rerender();
        Ok(true)
    }

    /// Deletes a goal after the user confirms. Returns whether a goal was
    /// removed.
    pub fn request_delete(&mut self, goal_id: &str) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return false;
        }
        let removed = self.goals.delete_goal(goal_id);
        if removed {
            if self
                .hold
                .held_action()
                .is_some_and(|held| held.goal_id == goal_id)
            {
                self.hold.release();
            }
            self.rerender();
        }
        removed
    }

    /// Runs the held quick-add repeat if it is due, then advances the
    /// celebration by one frame.
    pub fn tick(&mut self, now: Instant) -> CelebrationFrame {
        if let Some(action) = self.hold.tick(now) {
            if let Err(e) = self.apply_contribution(&action.goal_id, action.amount, now) {
                warn!("Stopping quick-add repeat for {}: {}", action.goal_id, e);
                self.hold.release();
            }
        }
        self.celebration.tick(now)
    }

    /// Earliest time the host must call [`GamanApp::tick`] even without an
    /// animation frame pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.hold.next_deadline(), self.celebration.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.celebration.resize(viewport);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.celebration.set_reduced_motion(reduced);
    }

    fn apply_contribution(
        &mut self,
        goal_id: &str,
        amount: u64,
        now: Instant,
    ) -> Result<ContributionOutcome> {
        let outcome = self.goals.contribute(goal_id, amount)?;
        self.rerender();
        if outcome.completed_now {
            self.celebration
                .celebrate(celebration_message(&outcome.goal.name), now);
        }
        Ok(outcome)
    }

    fn rerender(&mut self) {
        self.view = render_goals(self.goals.list_goals(), &self.config.quick_add_amounts);
    }
}
