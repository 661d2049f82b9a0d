use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CelebrationConfig;
use crate::constants::{CONFETTI_COLORS, PARTICLE_EXIT_MARGIN};

/// Canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Number of particles for a viewport: one per `area_per_particle` square
/// pixels, clamped to the configured bounds.
pub fn particle_count(viewport: Viewport, config: &CelebrationConfig) -> usize {
    let area = (viewport.width.max(0.0) * viewport.height.max(0.0)).floor();
    let raw = (area / config.area_per_particle as f64).floor() as usize;
    raw.max(config.min_particles).min(config.max_particles)
}

/// One confetti piece. Velocities are per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub angular_velocity: f64,
}

impl Particle {
    /// Spawns above the top edge at a random horizontal position.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Particle {
            x: rng.gen::<f64>() * viewport.width,
            y: -10.0 - rng.gen::<f64>() * 100.0,
            width: 6.0 + rng.gen::<f64>() * 6.0,
            height: 8.0 + rng.gen::<f64>() * 10.0,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            vy: 2.0 + rng.gen::<f64>() * 3.0,
            vx: -1.0 + rng.gen::<f64>() * 2.0,
            rotation: rng.gen::<f64>() * PI,
            angular_velocity: -0.2 + rng.gen::<f64>() * 0.4,
        }
    }

    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.angular_velocity;
    }

    pub fn is_visible(&self, viewport: Viewport) -> bool {
        self.y < viewport.height + PARTICLE_EXIT_MARGIN
    }

    pub fn sprite(&self) -> ParticleSprite {
        ParticleSprite {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            color: self.color.to_string(),
        }
    }
}

/// A rectangle to fill, centered on (`x`, `y`) and rotated by `rotation`
/// radians.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub color: String,
}
