use macroquad::prelude::*;
use ::rand::Rng;

use crate::color::{self, Hsl};
use crate::config;

/// A single scattering particle produced by an explosion burst.
#[derive(Clone, Debug)]
pub struct Confetto {
    pub pos: Vec2,
    pub size: f32,
    pub velocity: Vec2,
    pub color: Hsl,
    pub alpha: f32,
}

impl Confetto {
    /// Advance one frame: move along the fixed velocity and fade.
    pub fn advance(&mut self) {
        self.pos += self.velocity;
        self.alpha -= config::CONFETTO_FADE_PER_FRAME;
    }

    pub fn expired(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Append a full burst of confetti centered on a point. Particle count and
/// the shared speed cap are drawn once per burst; direction, speed, size,
/// alpha and color per particle.
pub fn spawn_burst(rng: &mut impl Rng, center: Vec2, out: &mut Vec<Confetto>) -> usize {
    let count = rng.gen_range(config::BURST_COUNT_MIN..config::BURST_COUNT_MAX);
    let max_speed = rng.gen_range(config::BURST_SPEED_MIN..config::BURST_SPEED_MAX);

    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.0..max_speed);

        out.push(Confetto {
            pos: center,
            size: rng.gen_range(config::CONFETTO_SIZE_MIN..config::CONFETTO_SIZE_MAX),
            velocity: Vec2::from_angle(angle) * speed,
            color: color::random_palette(rng),
            alpha: rng.gen_range(config::CONFETTO_ALPHA_MIN..1.0),
        });
    }

    count
}
