//! Celebration effect shown when a goal is completed: falling confetti on a
//! full-viewport canvas plus a transient banner.
//!
//! Nothing here schedules itself. The host calls [`CelebrationEffect::tick`]
//! once per animation frame while [`CelebrationFrame::needs_next_frame`] is
//! set, and again at [`CelebrationEffect::next_deadline`] so timers can fire.

mod effect;
mod particle;

pub use effect::{CelebrationEffect, CelebrationFrame, CelebrationState};
pub use particle::{particle_count, Particle, ParticleSprite, Viewport};
