use macroquad::prelude::*;

use crate::animation::Animation;
use crate::color::Hsl;

const BG_COLOR: Color = Color::new(0.02, 0.03, 0.08, 1.0);

/// Points sampled per bezier half of the heart outline.
const CURVE_SEGMENTS: usize = 16;

/// Draw one frame: clear the whole surface, then every surviving particle.
pub fn draw(anim: &Animation) {
    clear_background(BG_COLOR);

    for heart in &anim.hearts {
        draw_heart_shape(heart.pos, heart.size, heart.color, heart.draw_alpha());
    }

    for c in &anim.confetti {
        let color = c.color.to_color(c.alpha.clamp(0.0, 1.0));
        draw_circle(c.pos.x, c.pos.y, c.size / 2.0, color);
    }

    if !anim.running {
        draw_stopped_overlay();
    }
}

/// Filled curved-heart path: two mirrored cubic beziers running from the top
/// notch down around each lobe to the bottom tip, fanned into triangles
/// around the local origin.
fn draw_heart_shape(center: Vec2, size: f32, color: Hsl, alpha: f32) {
    let fill = color.to_color(alpha);
    let outline = heart_outline(size);

    for pair in outline.windows(2) {
        draw_triangle(center, center + pair[0], center + pair[1], fill);
    }
    if let (Some(first), Some(last)) = (outline.first(), outline.last()) {
        draw_triangle(center, center + *last, center + *first, fill);
    }
}

/// Sample the heart outline in local space. The notch sits at (0, -size/2),
/// the tip at (0, 0.4*size); the right lobe is traced first, then the left.
fn heart_outline(size: f32) -> Vec<Vec2> {
    let notch = vec2(0.0, -size / 2.0);
    let tip = vec2(0.0, size * 0.4);

    let mut points = Vec::with_capacity(CURVE_SEGMENTS * 2);
    for i in 0..CURVE_SEGMENTS {
        let t = i as f32 / CURVE_SEGMENTS as f32;
        points.push(cubic_point(
            notch,
            vec2(size / 2.0, -size),
            vec2(size, -size / 8.0),
            tip,
            t,
        ));
    }
    for i in 0..CURVE_SEGMENTS {
        let t = i as f32 / CURVE_SEGMENTS as f32;
        points.push(cubic_point(
            tip,
            vec2(-size, -size / 8.0),
            vec2(-size / 2.0, -size),
            notch,
            t,
        ));
    }
    points
}

fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

fn draw_stopped_overlay() {
    let text = "HIDDEN (Space to resume)";
    let tw = measure_text(text, None, 24, 1.0).width;
    let x = screen_width() * 0.5 - tw * 0.5;
    draw_text(text, x + 1.0, 31.0, 24.0, Color::new(0.0, 0.0, 0.0, 0.5));
    draw_text(text, x, 30.0, 24.0, Color::new(1.0, 0.8, 0.2, 0.9));
}
