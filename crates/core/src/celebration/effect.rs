use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::particle::{particle_count, Particle, ParticleSprite, Viewport};
use crate::config::CelebrationConfig;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CelebrationState {
    Idle,
    /// Particles are falling and the clear timer is pending.
    Animating,
    /// Every particle has left the screen; the clear timer is still pending.
    CoolingDown,
}

/// What the host should draw for one animation frame.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationFrame {
    /// Wipe the canvas before drawing `sprites`.
    pub clear_canvas: bool,
    pub sprites: Vec<ParticleSprite>,
    pub banner: Option<String>,
    /// Schedule another animation frame.
    pub needs_next_frame: bool,
}

#[derive(Debug, Clone)]
struct Banner {
    message: String,
    expires_at: Instant,
}

/// Confetti and banner state machine.
///
/// A completion event restarts the particle set and reschedules both timers;
/// there is never more than one pending clear or banner timer.
pub struct CelebrationEffect<R: Rng = StdRng> {
    config: CelebrationConfig,
    viewport: Viewport,
    state: CelebrationState,
    particles: Vec<Particle>,
    clear_at: Option<Instant>,
    banner: Option<Banner>,
    rng: R,
}

impl CelebrationEffect<StdRng> {
    pub fn new(config: CelebrationConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// Deterministic particle layout, for tests and replays.
    pub fn with_seed(config: CelebrationConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CelebrationEffect<R> {
    pub fn with_rng(config: CelebrationConfig, viewport: Viewport, rng: R) -> Self {
        CelebrationEffect {
            config,
            viewport,
            state: CelebrationState::Idle,
            particles: Vec::new(),
            clear_at: None,
            banner: None,
            rng,
        }
    }

    pub fn state(&self) -> CelebrationState {
        self.state
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.reduced_motion = reduced;
    }

    /// The banner text if it is still showing at `now`.
    pub fn banner(&self, now: Instant) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|b| now < b.expires_at)
            .map(|b| b.message.as_str())
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        let banner_at = self.banner.as_ref().map(|b| b.expires_at);
        match (self.clear_at, banner_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Starts (or restarts) the celebration.
    pub fn celebrate(&mut self, message: impl Into<String>, now: Instant) {
        self.banner = Some(Banner {
            message: message.into(),
            expires_at: now + self.config.banner_duration(),
        });

        if self.config.reduced_motion {
            debug!("Reduced motion requested, showing banner only");
            return;
        }

        let count = particle_count(self.viewport, &self.config);
        let viewport = self.viewport;
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(&mut *rng, viewport)).collect();
        self.clear_at = Some(now + self.config.clear_after());
        self.state = CelebrationState::Animating;
        debug!("Celebration started with {} particles", count);
    }

    /// Advances one animation frame and fires any timer due at `now`.
    pub fn tick(&mut self, now: Instant) -> CelebrationFrame {
        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }

        if self.clear_at.is_some_and(|at| now >= at) {
            self.clear_at = None;
            self.particles.clear();
            self.state = CelebrationState::Idle;
            return CelebrationFrame {
                clear_canvas: true,
                sprites: Vec::new(),
                banner: self.banner(now).map(str::to_string),
                needs_next_frame: false,
            };
        }

        if self.state != CelebrationState::Animating {
            return CelebrationFrame {
                clear_canvas: false,
                sprites: Vec::new(),
                banner: self.banner(now).map(str::to_string),
                needs_next_frame: false,
            };
        }

        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(|p| p.is_visible(viewport));
        if self.particles.is_empty() {
            self.state = CelebrationState::CoolingDown;
        }

        CelebrationFrame {
            clear_canvas: true,
            sprites: self.particles.iter().map(Particle::sprite).collect(),
            banner: self.banner(now).map(str::to_string),
            needs_next_frame: self.state == CelebrationState::Animating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn effect(viewport: Viewport) -> CelebrationEffect {
        CelebrationEffect::with_seed(CelebrationConfig::default(), viewport, 9)
    }

    #[test]
    fn test_starts_idle() {
        let mut fx = effect(Viewport::new(800.0, 600.0));
        assert_eq!(fx.state(), CelebrationState::Idle);
        let frame = fx.tick(Instant::now());
        assert!(!frame.needs_next_frame);
        assert!(frame.sprites.is_empty());
        assert!(fx.next_deadline().is_none());
    }

    #[test]
    fn test_celebrate_seeds_particles_and_banner() {
        let mut fx = effect(Viewport::new(1920.0, 1080.0));
        let t0 = Instant::now();
        fx.celebrate("「Camera」を達成！おめでとう🎉", t0);

        assert_eq!(fx.state(), CelebrationState::Animating);
        assert_eq!(fx.particle_count(), 82);
        assert_eq!(fx.banner(t0), Some("「Camera」を達成！おめでとう🎉"));

        let frame = fx.tick(t0 + Duration::from_millis(16));
        assert!(frame.clear_canvas);
        assert!(frame.needs_next_frame);
        assert_eq!(frame.sprites.len(), 82);
    }

    #[test]
    fn test_particles_fall_out_then_cool_down() {
        let mut fx = effect(Viewport::new(800.0, 300.0));
        let t0 = Instant::now();
        fx.celebrate("done", t0);

        // vy >= 2 px/frame from at most 110 px above the top.
        let mut frames = 0;
        while fx.tick(t0).needs_next_frame {
            frames += 1;
            assert!(frames < 300, "particles never left the viewport");
        }
        assert_eq!(fx.state(), CelebrationState::CoolingDown);
        assert_eq!(fx.particle_count(), 0);

        let frame = fx.tick(t0 + Duration::from_millis(2800));
        assert_eq!(fx.state(), CelebrationState::Idle);
        assert!(frame.clear_canvas);
    }

    #[test]
    fn test_clear_timer_caps_animation() {
        let mut fx = effect(Viewport::new(800.0, 100_000.0));
        let t0 = Instant::now();
        fx.celebrate("done", t0);
        fx.tick(t0 + Duration::from_millis(16));
        assert!(fx.particle_count() > 0);

        let frame = fx.tick(t0 + Duration::from_millis(2800));
        assert_eq!(fx.state(), CelebrationState::Idle);
        assert_eq!(fx.particle_count(), 0);
        assert!(frame.clear_canvas);
        assert!(frame.sprites.is_empty());
        assert!(!frame.needs_next_frame);
    }

    #[test]
    fn test_new_completion_restarts_and_reschedules() {
        let mut fx = effect(Viewport::new(800.0, 100_000.0));
        let t0 = Instant::now();
        fx.celebrate("first", t0);
        for _ in 0..10 {
            fx.tick(t0);
        }

        let t1 = t0 + Duration::from_millis(1000);
        fx.celebrate("second", t1);
        assert_eq!(fx.next_deadline(), Some(t1 + Duration::from_millis(2200)));

        // The first clear deadline (t0 + 2.8s) no longer applies.
        let frame = fx.tick(t0 + Duration::from_millis(2900));
        assert_eq!(fx.state(), CelebrationState::Animating);
        assert!(frame.needs_next_frame);
        assert_eq!(frame.banner.as_deref(), Some("second"));

        fx.tick(t1 + Duration::from_millis(2800));
        assert_eq!(fx.state(), CelebrationState::Idle);
    }

    #[test]
    fn test_banner_expires_independently() {
        let mut fx = effect(Viewport::new(800.0, 100_000.0));
        let t0 = Instant::now();
        fx.celebrate("done", t0);

        let frame = fx.tick(t0 + Duration::from_millis(2199));
        assert_eq!(frame.banner.as_deref(), Some("done"));

        let frame = fx.tick(t0 + Duration::from_millis(2200));
        assert!(frame.banner.is_none());
        assert_eq!(fx.state(), CelebrationState::Animating);
        assert_eq!(fx.next_deadline(), Some(t0 + Duration::from_millis(2800)));
    }

    #[test]
    fn test_reduced_motion_shows_banner_only() {
        let config = CelebrationConfig {
            reduced_motion: true,
            ..CelebrationConfig::default()
        };
        let mut fx = CelebrationEffect::with_seed(config, Viewport::new(800.0, 600.0), 3);
        let t0 = Instant::now();
        fx.celebrate("done", t0);

        assert_eq!(fx.state(), CelebrationState::Idle);
        assert_eq!(fx.particle_count(), 0);
        let frame = fx.tick(t0);
        assert!(frame.sprites.is_empty());
        assert!(!frame.needs_next_frame);
        assert_eq!(frame.banner.as_deref(), Some("done"));
    }

    #[test]
    fn test_resize_changes_next_seed_count() {
        let mut fx = effect(Viewport::new(800.0, 600.0));
        fx.resize(Viewport::new(4000.0, 3000.0));
        fx.celebrate("done", Instant::now());
        assert_eq!(fx.particle_count(), 220);
    }
}
