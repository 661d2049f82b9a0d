//! Press-and-hold auto-repeat.
//!
//! A press fires once immediately. While the button stays down the action
//! fires again after the initial delay and then at every interval. Releasing
//! (or pressing again) cancels the pending repeat. Repeats missed while the
//! host was not ticking are dropped, never replayed.

use std::time::{Duration, Instant};

use crate::config::HoldRepeatConfig;

#[derive(Debug, Clone)]
struct Held<T> {
    action: T,
    next_fire: Instant,
}

#[derive(Debug, Clone)]
pub struct HoldRepeat<T> {
    config: HoldRepeatConfig,
    held: Option<Held<T>>,
}

impl<T: Clone> HoldRepeat<T> {
    pub fn new(config: HoldRepeatConfig) -> Self {
        HoldRepeat { config, held: None }
    }

    /// Starts holding `action` and returns it for the immediate first fire.
    pub fn press(&mut self, action: T, now: Instant) -> T {
        self.held = Some(Held {
            action: action.clone(),
            next_fire: now + self.config.initial_delay(),
        });
        action
    }

    /// Stops repeating. Returns the action that was held, if any.
    pub fn release(&mut self) -> Option<T> {
        self.held.take().map(|h| h.action)
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    pub fn held_action(&self) -> Option<&T> {
        self.held.as_ref().map(|h| &h.action)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.held.as_ref().map(|h| h.next_fire)
    }

    /// Returns the repeat due at `now`, if any. At most one fires per tick;
    /// a late tick moves the schedule to the next interval boundary after
    /// `now`. A zero interval fires the delayed repeat once and stops.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        let interval = self.config.interval();
        let held = self.held.as_mut()?;
        if held.next_fire > now {
            return None;
        }
        if interval.is_zero() {
            return self.release();
        }

        let into_interval = now.duration_since(held.next_fire).as_nanos() % interval.as_nanos();
        let into_interval = Duration::from_nanos(u64::try_from(into_interval).unwrap_or(0));
        held.next_fire = now + (interval - into_interval);
        Some(held.action.clone())
    }
}
