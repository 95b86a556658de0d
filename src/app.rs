use crate::clock::{Clock, FrameTime};
use crate::config::Config;
use crate::features::{camera_rig::CameraRig, fade::FadeOverlay, shake::ShakeWave, Feature};
use crate::gfx::{canvas::CpuCanvas, math::{Color, Vec2, Vec3}};
use crate::transform::{SharedTransform, Transform};
use anyhow::Result;
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;

/// Headless host: owns the clock, the player and camera transforms, and a
/// CPU canvas, and drives the rig and fade overlay once per tick.
pub struct App {
    pub config: Config,
    pub clock: Clock,
    pub player: SharedTransform,
    pub camera: SharedTransform,
    pub rig: CameraRig,
    pub fade: FadeOverlay,
    pub canvas: CpuCanvas,
    fade_color: Color,
    faded: Rc<Cell<u32>>,
    tracked: Vec3,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let player = Transform::default().shared();
        let camera = Transform::at(Vec3::new(0.0, 0.0, -10.0)).shared();

        let mut rig = CameraRig::new(camera.clone());
        rig.set_target(Some(&player));
        rig.set_trailing_distance(config.rig.trailing_distance);
        rig.set_align_with_target(config.rig.align_with_target);
        rig.set_lean_back_ratio(config.rig.lean_back_ratio);

        let fade_color = config.fade.color().unwrap_or_else(|e| {
            warn!("{}, using black", e);
            Color::BLACK
        });

        let faded = Rc::new(Cell::new(0));
        let mut fade = FadeOverlay::new();
        let counter = faded.clone();
        fade.set_on_faded(move || {
            counter.set(counter.get() + 1);
            info!("faded");
        });

        let canvas = CpuCanvas::new(config.viewport.width, config.viewport.height, Color::WHITE);
        let tracked = camera.borrow().position;

        Ok(Self {
            config,
            clock: Clock::new(),
            player,
            camera,
            rig,
            fade,
            canvas,
            fade_color,
            faded,
            tracked,
        })
    }

    /// Number of fades that have finished.
    pub fn faded_count(&self) -> u32 {
        self.faded.get()
    }

    /// Triggers the configured shake. An unknown direction name falls back
    /// to a circular shake.
    pub fn shake(&mut self) -> Result<()> {
        let wave = match self.config.shake.direction() {
            Ok(direction) => direction.into(),
            Err(e) => {
                warn!("{}, shaking circular", e);
                ShakeWave::Circular
            }
        };
        self.rig.shake_with(wave, self.config.shake.params())?;
        Ok(())
    }

    pub fn fade_in(&mut self) -> Result<()> {
        let ease = self.config.fade.ease().unwrap_or_default();
        self.fade.fade_in(self.config.fade.duration, self.fade_color, ease)?;
        Ok(())
    }

    pub fn fade_out(&mut self) -> Result<()> {
        let ease = self.config.fade.ease().unwrap_or_default();
        self.fade.fade_out(self.config.fade.duration, self.fade_color, ease)?;
        Ok(())
    }

    /// Moves the player for this tick. Call before [`App::update`].
    pub fn move_player(&mut self, velocity: Vec2, dt: f32) {
        let mut player = self.player.borrow_mut();
        player.set_velocity(velocity);
        player.move_by(Vec3::from_xy(velocity * dt, 0.0));
    }

    pub fn update(&mut self, dt: f32) -> FrameTime {
        let frame = self.clock.tick(dt);

        for feature in [&mut self.rig as &mut dyn Feature, &mut self.fade] {
            debug!("update {} at t={:.3}s", feature.name(), frame.total);
            feature.update(&frame);
        }

        // Camera velocity is measured on the followed position, without the
        // rig's own shake and lean offset.
        let tracked = self.camera.borrow().position - self.rig.last_offset();
        if frame.delta > 0.0 {
            let velocity = (tracked.xy() - self.tracked.xy()) * (1.0 / frame.delta);
            self.camera.borrow_mut().set_velocity(velocity);
        }
        self.tracked = tracked;

        frame
    }

    pub fn render(&mut self) {
        self.canvas.clear(Color::WHITE);
        for feature in [&self.rig as &dyn Feature, &self.fade] {
            debug!("render {}", feature.name());
            feature.render(&mut self.canvas);
        }
    }
}
