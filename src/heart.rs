use macroquad::prelude::*;
use ::rand::Rng;

use crate::color::{self, Hsl};
use crate::config;

/// What happens to a heart after one frame of movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartFate {
    /// Reached its target height with the explosion flag set; burst and remove.
    Explode,
    /// Fully off-screen; remove silently.
    OffScreen,
    /// Still visible; keep and draw.
    Rising,
}

#[derive(Clone, Debug)]
pub struct Heart {
    pub pos: Vec2,
    pub size: f32,
    pub rise_speed: f32,
    pub drift_speed: f32,
    pub color: Hsl,
    pub alpha: f32,
    pub will_explode: bool,
    pub target_height: f32,
}

impl Heart {
    /// Spawn a heart just below the bottom edge of a surface.
    pub fn spawn(rng: &mut impl Rng, surface_width: f32, surface_height: f32) -> Self {
        Self {
            pos: vec2(
                rng.gen_range(0.0..surface_width),
                surface_height + config::SPAWN_Y_OFFSET,
            ),
            size: rng.gen_range(config::HEART_SIZE_MIN..config::HEART_SIZE_MAX),
            rise_speed: rng.gen_range(config::HEART_RISE_SPEED_MIN..config::HEART_RISE_SPEED_MAX),
            drift_speed: rng
                .gen_range(-config::HEART_DRIFT_SPEED_MAX..config::HEART_DRIFT_SPEED_MAX),
            color: color::random_palette(rng),
            alpha: 1.0,
            will_explode: rng.gen_bool(config::HEART_EXPLODE_CHANCE),
            target_height: rng.gen_range(
                surface_height * config::TARGET_HEIGHT_MIN_FRAC
                    ..surface_height * config::TARGET_HEIGHT_MAX_FRAC,
            ),
        }
    }

    /// Advance one frame: rise, drift, random-walk the drift speed and
    /// recompute alpha from height. Alpha is left unclamped here; it only
    /// gets clamped when handed to the renderer.
    pub fn advance(&mut self, rng: &mut impl Rng, surface_height: f32) {
        self.pos.y -= self.rise_speed;
        self.pos.x += self.drift_speed;
        self.drift_speed += rng.gen_range(-config::HEART_DRIFT_JITTER..config::HEART_DRIFT_JITTER);
        self.alpha =
            config::HEART_ALPHA_FLOOR + (self.pos.y / surface_height) * config::HEART_ALPHA_RANGE;
    }

    /// Classify the heart after an advance. Explosion wins over the
    /// off-screen check.
    pub fn fate(&self, surface_width: f32) -> HeartFate {
        if self.pos.y <= self.target_height && self.will_explode {
            HeartFate::Explode
        } else if self.pos.y < -self.size
            || self.pos.x < -self.size
            || self.pos.x > surface_width + self.size
        {
            HeartFate::OffScreen
        } else {
            HeartFate::Rising
        }
    }

    /// Alpha as the renderer should use it.
    pub fn draw_alpha(&self) -> f32 {
        self.alpha.clamp(0.0, 1.0)
    }

    /// Whether a surface-space point falls inside this heart's hit radius.
    pub fn hit_by(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.size
    }
}
