use macroquad::prelude::Color;
use ::rand::Rng;

use crate::config;

/// A color in HSL space: hue in degrees [0,360), saturation and lightness
/// in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Convert to an RGB color with the given alpha.
    pub fn to_color(self, alpha: f32) -> Color {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = self.hue / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Color::new(r1 + m, g1 + m, b1 + m, alpha)
    }
}

/// Draw a palette color: hue from one of three weighted bands (reds,
/// cyans/blues, pinks/magentas), saturation and lightness uniform within
/// their bands.
pub fn random_palette(rng: &mut impl Rng) -> Hsl {
    let pick: f64 = rng.gen();
    let (lo, hi) = if pick < config::HUE_WEIGHT_RED {
        config::HUE_BAND_RED
    } else if pick < config::HUE_WEIGHT_RED + config::HUE_WEIGHT_CYAN {
        config::HUE_BAND_CYAN
    } else {
        config::HUE_BAND_PINK
    };

    Hsl {
        hue: rng.gen_range(lo..hi),
        saturation: rng.gen_range(config::SATURATION_MIN..config::SATURATION_MAX),
        lightness: rng.gen_range(config::LIGHTNESS_MIN..config::LIGHTNESS_MAX),
    }
}
