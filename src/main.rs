use macroquad::prelude::*;

mod animation;
mod color;
mod confetti;
mod config;
mod heart;
mod renderer;

use animation::Animation;

fn window_conf() -> Conf {
    Conf {
        window_title: "HEARTBURST — Rising Hearts & Confetti".to_string(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42);

    let mut anim = Animation::new(screen_width(), screen_height(), seed);
    eprintln!("[HEARTBURST] started (seed {seed})");

    loop {
        let frame_time = get_frame_time() as f64;

        // Surface dims follow the host window; stale particles cull normally.
        if screen_width() != anim.width || screen_height() != anim.height {
            anim.resize(screen_width(), screen_height());
        }

        // Space stands in for the host hide/show signal.
        if is_key_pressed(KeyCode::Space) {
            if anim.running {
                anim.stop();
                eprintln!(
                    "[HEARTBURST] hidden at frame {}: {} hearts, {} confetti retained",
                    anim.frame_count,
                    anim.hearts.len(),
                    anim.confetti.len()
                );
            } else {
                anim.resume();
                eprintln!("[HEARTBURST] visible: spawner and frame loop resumed");
            }
        }

        let pointer = Vec2::from(mouse_position());
        anim.update_hover(pointer);
        set_pointer_cursor(anim.hover);
        if is_mouse_button_pressed(MouseButton::Left) {
            anim.handle_click(pointer);
        }

        anim.advance_clock(frame_time.min(0.1));
        anim.tick();

        renderer::draw(&anim);

        next_frame().await;
    }
}

fn set_pointer_cursor(hover: bool) {
    use macroquad::miniquad::{window, CursorIcon};
    window::set_mouse_cursor(if hover {
        CursorIcon::Pointer
    } else {
        CursorIcon::Default
    });
}
