use macroquad::prelude::*;
use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::confetti::{self, Confetto};
use crate::config;
use crate::heart::{Heart, HeartFate};

/// Owner of all animation state: the two particle collections, the RNG, the
/// surface size and the lifecycle flag. The spawner clock and the frame tick
/// are driven separately by the caller, mirroring the interval-timer /
/// refresh-callback split of the animation.
pub struct Animation {
    pub hearts: Vec<Heart>,
    pub confetti: Vec<Confetto>,
    pub width: f32,
    pub height: f32,
    pub rng: ChaCha8Rng,
    pub running: bool,
    pub hover: bool,
    pub frame_count: u64,
    spawn_accumulator: f64,
}

impl Animation {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            hearts: Vec::new(),
            confetti: Vec::new(),
            width,
            height,
            rng: ChaCha8Rng::seed_from_u64(seed),
            running: true,
            hover: false,
            frame_count: 0,
            spawn_accumulator: 0.0,
        }
    }

    /// Feed wall-clock time into the spawn timer. One heart is appended per
    /// elapsed 300 ms period; the timer only accumulates while running.
    pub fn advance_clock(&mut self, dt: f64) {
        if !self.running {
            return;
        }
        self.spawn_accumulator += dt;
        while self.spawn_accumulator >= config::SPAWN_PERIOD {
            self.spawn_accumulator -= config::SPAWN_PERIOD;
            let heart = Heart::spawn(&mut self.rng, self.width, self.height);
            self.hearts.push(heart);
        }
    }

    /// One frame of simulation. A tick that fires after `stop` is a no-op.
    ///
    /// Hearts advance first and are resolved by stable filtering, so a
    /// removal never skips a neighbor's update. Bursts are appended before
    /// the confetti pass and therefore advance and fade once on their birth
    /// frame, matching the heart pass ordering.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        for heart in &mut self.hearts {
            heart.advance(&mut self.rng, self.height);
        }

        let width = self.width;
        let mut burst_centers: Vec<Vec2> = Vec::new();
        self.hearts.retain(|heart| match heart.fate(width) {
            HeartFate::Explode => {
                burst_centers.push(heart.pos);
                false
            }
            HeartFate::OffScreen => false,
            HeartFate::Rising => true,
        });
        for center in burst_centers {
            confetti::spawn_burst(&mut self.rng, center, &mut self.confetti);
        }

        for c in &mut self.confetti {
            c.advance();
        }
        self.confetti.retain(|c| !c.expired());

        self.frame_count += 1;
    }

    /// Pop every heart whose hit radius contains the click point.
    pub fn handle_click(&mut self, point: Vec2) {
        let Self { hearts, confetti, rng, .. } = self;
        hearts.retain(|heart| {
            if heart.hit_by(point) {
                confetti::spawn_burst(rng, heart.pos, confetti);
                false
            } else {
                true
            }
        });
    }

    /// Refresh the hover cue from the current pointer position.
    pub fn update_hover(&mut self, point: Vec2) -> bool {
        self.hover = self.hearts.iter().any(|heart| heart.hit_by(point));
        self.hover
    }

    /// Follow a viewport resize. Particle positions are left alone; anything
    /// now out of bounds culls on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Halt the spawner and the frame tick. Particle state stays in memory.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart both, with a fresh spawn cadence (no stale accumulated time).
    pub fn resume(&mut self) {
        self.running = true;
        self.spawn_accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;

    fn test_animation() -> Animation {
        Animation::new(800.0, 600.0, 42)
    }

    fn test_heart(pos: Vec2) -> Heart {
        Heart {
            pos,
            size: 30.0,
            rise_speed: 1.0,
            drift_speed: 0.0,
            color: Hsl { hue: 0.0, saturation: 80.0, lightness: 50.0 },
            alpha: 1.0,
            will_explode: false,
            target_height: 100.0,
        }
    }

    fn test_confetto(alpha: f32) -> Confetto {
        Confetto {
            pos: vec2(50.0, 50.0),
            size: 4.0,
            velocity: vec2(2.0, -1.0),
            color: Hsl { hue: 200.0, saturation: 80.0, lightness: 50.0 },
            alpha,
        }
    }

    #[test]
    fn spawner_appends_one_heart_per_period() {
        let mut anim = test_animation();
        for _ in 0..10 {
            anim.advance_clock(0.3);
        }
        assert_eq!(anim.hearts.len(), 10);

        // a partial period carries over to the next call
        anim.advance_clock(0.2);
        assert_eq!(anim.hearts.len(), 10);
        anim.advance_clock(0.1);
        assert_eq!(anim.hearts.len(), 11);
    }

    #[test]
    fn spawner_catches_up_over_a_long_interval() {
        let mut anim = test_animation();
        anim.advance_clock(1.0);
        assert_eq!(anim.hearts.len(), 3);
    }

    #[test]
    fn stopped_animation_neither_spawns_nor_ticks() {
        let mut anim = test_animation();
        anim.hearts.push(test_heart(vec2(400.0, 300.0)));
        anim.confetti.push(test_confetto(0.8));
        anim.stop();

        anim.advance_clock(5.0);
        anim.tick();

        assert_eq!(anim.hearts.len(), 1);
        assert_eq!(anim.hearts[0].pos, vec2(400.0, 300.0));
        assert!((anim.confetti[0].alpha - 0.8).abs() < 1e-6);
        assert_eq!(anim.frame_count, 0);
    }

    #[test]
    fn resume_restarts_the_cadence_from_zero() {
        let mut anim = test_animation();
        anim.advance_clock(0.2);
        anim.stop();
        anim.advance_clock(9.0);
        anim.resume();

        // the 0.2 s accrued before the stop must not count
        anim.advance_clock(0.2);
        assert_eq!(anim.hearts.len(), 0);
        anim.advance_clock(0.1);
        assert_eq!(anim.hearts.len(), 1);
    }

    #[test]
    fn heart_reaching_target_bursts_into_confetti() {
        let mut anim = test_animation();
        let mut heart = test_heart(vec2(400.0, 100.5));
        heart.will_explode = true;
        anim.hearts.push(heart);

        anim.tick();

        assert!(anim.hearts.is_empty());
        assert!(
            (20..60).contains(&anim.confetti.len()),
            "burst produced {} confetti",
            anim.confetti.len()
        );
        // burst particles already advanced once on their birth frame
        for c in &anim.confetti {
            assert!(c.alpha < 1.0);
        }
    }

    #[test]
    fn offscreen_heart_is_culled_without_confetti() {
        let mut anim = test_animation();
        let mut heart = test_heart(vec2(400.0, -29.5));
        heart.target_height = -1000.0;
        anim.hearts.push(heart);

        anim.tick();

        assert!(anim.hearts.is_empty());
        assert!(anim.confetti.is_empty());
    }

    #[test]
    fn every_removal_candidate_is_resolved_in_one_tick() {
        // adjacent removals must not shadow each other
        let mut anim = test_animation();
        for i in 0..4 {
            let mut heart = test_heart(vec2(100.0 + i as f32 * 50.0, -29.5));
            heart.target_height = -1000.0;
            anim.hearts.push(heart);
        }

        anim.tick();
        assert!(anim.hearts.is_empty());
    }

    #[test]
    fn click_pops_every_hit_heart() {
        let mut anim = test_animation();
        anim.hearts.push(test_heart(vec2(200.0, 200.0)));
        anim.hearts.push(test_heart(vec2(210.0, 205.0)));
        anim.hearts.push(test_heart(vec2(600.0, 400.0)));

        anim.handle_click(vec2(205.0, 202.0));

        assert_eq!(anim.hearts.len(), 1);
        assert_eq!(anim.hearts[0].pos, vec2(600.0, 400.0));
        assert!(
            (40..120).contains(&anim.confetti.len()),
            "two bursts produced {} confetti",
            anim.confetti.len()
        );
    }

    #[test]
    fn hover_cue_tracks_the_pointer() {
        let mut anim = test_animation();
        anim.hearts.push(test_heart(vec2(300.0, 300.0)));

        assert!(anim.update_hover(vec2(310.0, 300.0)));
        assert!(anim.hover);
        assert!(!anim.update_hover(vec2(500.0, 300.0)));
        assert!(!anim.hover);
    }

    #[test]
    fn tick_fades_confetti_and_culls_expired() {
        let mut anim = test_animation();
        anim.confetti.push(test_confetto(0.5));
        anim.confetti.push(test_confetto(0.005));

        anim.tick();

        assert_eq!(anim.confetti.len(), 1);
        assert!((anim.confetti[0].alpha - 0.49).abs() < 1e-4);
        assert_eq!(anim.confetti[0].pos, vec2(52.0, 49.0));
    }

    #[test]
    fn resize_leaves_particles_for_normal_culling() {
        let mut anim = test_animation();
        anim.hearts.push(test_heart(vec2(400.0, 300.0)));

        anim.resize(100.0, 100.0);
        assert_eq!(anim.hearts[0].pos, vec2(400.0, 300.0));

        // x is now beyond width + size, so the next tick culls it quietly
        anim.tick();
        assert!(anim.hearts.is_empty());
        assert!(anim.confetti.is_empty());
    }
}
