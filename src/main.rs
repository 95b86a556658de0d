use anyhow::Result;
use cinerig::app::App;
use cinerig::config::Config;
use cinerig::gfx::math::Vec2;
use log::{info, warn};
use rand::Rng;
use std::time::{Duration, Instant};

/// Player speed in world units per second.
const PLAYER_SPEED: f32 = 120.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config ({}), using defaults", e);
        Config::default()
    });
    let frames = config.frames;
    let frame_budget = Duration::from_secs_f32(1.0 / config.fps_cap.max(1) as f32);
    let mut app = App::new(config)?;
    let mut rng = rand::thread_rng();

    info!("Running {} frames", frames);
    app.fade_out()?;

    let mut heading = Vec2::new(1.0, 0.0);
    let mut last_frame = Instant::now();

    for frame in 0..frames {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Wander: nudge the heading a little every frame.
        heading = Vec2::new(
            heading.x + rng.gen_range(-0.2..0.2),
            heading.y + rng.gen_range(-0.2..0.2),
        );
        let len = heading.length().max(f32::EPSILON);
        heading = heading * (1.0 / len);
        app.move_player(heading * PLAYER_SPEED, dt);

        if rng.gen_bool(0.02) {
            app.shake()?;
        }
        if frame + 60 == frames {
            app.fade_in()?;
        }

        let time = app.update(dt);
        app.render();

        if frame % 30 == 0 {
            let camera = app.camera.borrow();
            let player = app.player.borrow();
            info!(
                "t={:.2}s player=({:.1}, {:.1}) camera=({:.1}, {:.1}, {:.1}) shake={:.1} fading={}",
                time.total,
                player.position.x,
                player.position.y,
                camera.position.x,
                camera.position.y,
                camera.position.z,
                app.rig.shake_strength(),
                app.fade.is_fading(),
            );
        }

        // Sleep briefly to cap framerate
        let spent = now.elapsed();
        if spent < frame_budget {
            std::thread::sleep(frame_budget - spent);
        }
    }

    info!("Done, {} fades finished", app.faded_count());
    Ok(())
}
