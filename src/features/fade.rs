use super::Feature;
use crate::clock::FrameTime;
use crate::error::RigResult;
use crate::gfx::anim::{Ease, StopBehavior, Tween, TweenState};
use crate::gfx::draw::DrawSurface;
use crate::gfx::math::Color;
use log::{debug, info};

/// Full-viewport color fade.
///
/// Call [`FadeOverlay::update`] before [`FadeOverlay::draw`] every tick so the
/// drawn color is the one for the current tick.
pub struct FadeOverlay {
    tween: Tween<Color>,
    on_faded: Option<Box<dyn FnMut()>>,
}

impl FadeOverlay {
    pub fn new() -> Self {
        Self {
            tween: Tween::new(Color::TRANSPARENT),
            on_faded: None,
        }
    }

    /// Sets the callback fired once when a fade finishes.
    pub fn set_on_faded(&mut self, f: impl FnMut() + 'static) {
        self.on_faded = Some(Box::new(f));
    }

    pub fn is_fading(&self) -> bool {
        self.tween.is_running()
    }

    pub fn state(&self) -> TweenState {
        self.tween.state()
    }

    pub fn tween(&self) -> &Tween<Color> {
        &self.tween
    }

    pub fn current_color(&self) -> Color {
        self.tween.value()
    }

    /// Fades from transparent to `color`. Dropped while another fade runs.
    pub fn fade_in(&mut self, duration: f32, color: Color, ease: Ease) -> RigResult<()> {
        self.begin("in", color.with_alpha(0.0), color, duration, ease)
    }

    /// Fades from `color` to transparent. Dropped while another fade runs.
    pub fn fade_out(&mut self, duration: f32, color: Color, ease: Ease) -> RigResult<()> {
        self.begin("out", color, color.with_alpha(0.0), duration, ease)
    }

    fn begin(
        &mut self,
        kind: &str,
        from: Color,
        to: Color,
        duration: f32,
        ease: Ease,
    ) -> RigResult<()> {
        let busy = self.is_fading();
        self.tween.start(from, to, duration, ease)?;
        if busy {
            debug!("fade {} ignored, a fade is already running", kind);
        } else {
            info!("fade {} over {}s", kind, duration);
        }
        Ok(())
    }

    /// Advances the fade. Returns `true` on the tick a fade finishes, after
    /// the completion callback has run.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.tween.update(dt) {
            return false;
        }
        if let Some(on_faded) = self.on_faded.as_mut() {
            on_faded();
        }
        self.tween.stop(StopBehavior::ForceComplete);
        true
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if !self.is_fading() {
            return;
        }
        let viewport = surface.viewport();
        surface.fill_rect(viewport, self.tween.value());
    }
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for FadeOverlay {
    fn name(&self) -> &'static str {
        "fade_overlay"
    }

    fn update(&mut self, frame: &FrameTime) {
        FadeOverlay::update(self, frame.delta);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RigError;
    use crate::gfx::canvas::CpuCanvas;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted(overlay: &mut FadeOverlay) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        overlay.set_on_faded(move || c.set(c.get() + 1));
        count
    }

    #[test]
    fn fade_in_goes_from_clear_to_color() {
        let mut overlay = FadeOverlay::new();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        overlay.fade_in(1.0, red, Ease::Linear).unwrap();

        assert_eq!(overlay.current_color(), red.with_alpha(0.0));
        overlay.update(0.25);
        assert_eq!(overlay.current_color(), red.with_alpha(0.25));
    }

    #[test]
    fn fade_out_goes_from_color_to_clear() {
        let mut overlay = FadeOverlay::new();
        overlay.fade_out(2.0, Color::BLACK, Ease::Linear).unwrap();
        assert_eq!(overlay.current_color(), Color::BLACK);
        overlay.update(1.0);
        assert_eq!(overlay.current_color().a, 0.5);
    }

    #[test]
    fn fade_request_while_fading_is_dropped() {
        let mut overlay = FadeOverlay::new();
        overlay.fade_in(1.0, Color::BLACK, Ease::Linear).unwrap();
        overlay.update(0.5);
        overlay.fade_out(3.0, Color::WHITE, Ease::InCubic).unwrap();

        let tween = overlay.tween();
        assert_eq!(tween.start_value(), Color::BLACK.with_alpha(0.0));
        assert_eq!(tween.end_value(), Color::BLACK);
        assert_eq!(tween.duration(), 1.0);
        assert_eq!(tween.ease(), Ease::Linear);
        assert_eq!(tween.elapsed(), 0.5);
    }

    #[test]
    fn faded_fires_once_per_fade() {
        let mut overlay = FadeOverlay::new();
        let count = counted(&mut overlay);

        overlay.fade_in(0.5, Color::BLACK, Ease::Linear).unwrap();
        assert!(!overlay.update(0.25));
        assert_eq!(count.get(), 0);
        assert!(overlay.update(0.25));
        assert_eq!(count.get(), 1);
        assert_eq!(overlay.state(), TweenState::Idle);
        assert_eq!(overlay.current_color(), Color::BLACK);

        for _ in 0..10 {
            assert!(!overlay.update(0.25));
        }
        assert_eq!(count.get(), 1);

        overlay.fade_out(0.5, Color::BLACK, Ease::Linear).unwrap();
        overlay.update(1.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut overlay = FadeOverlay::new();
        let err = overlay.fade_in(-0.5, Color::BLACK, Ease::Linear).unwrap_err();
        assert!(matches!(err, RigError::InvalidArgument { .. }));
        assert!(!overlay.is_fading());
    }

    #[test]
    fn draws_only_while_fading() {
        let mut overlay = FadeOverlay::new();
        let mut canvas = CpuCanvas::new(8, 8, Color::WHITE);

        overlay.draw(&mut canvas);
        assert_eq!(canvas.fill_count(), 0);

        overlay.fade_out(1.0, Color::BLACK, Ease::Linear).unwrap();
        overlay.update(0.5);
        overlay.draw(&mut canvas);
        assert_eq!(canvas.fill_count(), 1);
        let px = canvas.pixel(7, 0).unwrap();
        assert!((px.r - 0.5).abs() < 1e-6);

        overlay.update(0.5);
        canvas.clear(Color::WHITE);
        overlay.draw(&mut canvas);
        assert_eq!(canvas.fill_count(), 0);
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }
}
