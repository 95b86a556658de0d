use super::math::{Color, Vec2, Vec3};
use crate::error::{RigError, RigResult};
use log::debug;
use std::str::FromStr;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: f32, t: f32) -> f32 {
        lerp(self, to, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, to: Vec2, t: f32) -> Vec2 {
        Vec2::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }
}

impl Lerp for Vec3 {
    fn lerp(self, to: Vec3, t: f32) -> Vec3 {
        Vec3::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t), lerp(self.z, to.z, t))
    }
}

impl Lerp for Color {
    fn lerp(self, to: Color, t: f32) -> Color {
        Color::new(
            lerp(self.r, to.r, t),
            lerp(self.g, to.g, t),
            lerp(self.b, to.b, t),
            lerp(self.a, to.a, t),
        )
    }
}

/// Progress remapping curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    Custom(fn(f32) -> f32),
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

impl FromStr for Ease {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "in_quad" => Ok(Self::InQuad),
            "out_quad" => Ok(Self::OutQuad),
            "in_out_quad" => Ok(Self::InOutQuad),
            "in_cubic" => Ok(Self::InCubic),
            "out_cubic" => Ok(Self::OutCubic),
            "in_out_cubic" => Ok(Self::InOutCubic),
            _ => Err(RigError::UnknownEase(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Idle,
    Running,
    /// Reached its end; waiting for the owner to acknowledge with [`Tween::stop`].
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBehavior {
    /// Jump to the end value.
    ForceComplete,
    /// Keep whatever value the tween had reached.
    Freeze,
}

/// Timed interpolation between two values.
///
/// `value()` is recomputed from the stored fields on every read.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    state: TweenState,
    start: T,
    end: T,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: TweenState::Idle,
            start: initial,
            end: initial,
            duration: 0.0,
            elapsed: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    pub fn start_value(&self) -> T {
        self.start
    }

    pub fn end_value(&self) -> T {
        self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Begins a run. A negative duration is rejected; a call while already
    /// running is dropped.
    pub fn start(&mut self, start: T, end: T, duration: f32, ease: Ease) -> RigResult<()> {
        let duration = RigError::check_duration("duration", duration)?;
        if self.is_running() {
            debug!("tween already running, start request dropped");
            return Ok(());
        }
        self.start = start;
        self.end = end;
        self.duration = duration;
        self.ease = ease;
        self.elapsed = 0.0;
        self.state = TweenState::Running;
        Ok(())
    }

    /// Advances a running tween. Returns `true` on the tick it stops.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.state = TweenState::Stopped;
            return true;
        }
        false
    }

    pub fn stop(&mut self, behavior: StopBehavior) {
        if behavior == StopBehavior::ForceComplete {
            self.elapsed = self.duration;
        }
        self.state = TweenState::Idle;
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn eased_progress(&self) -> f32 {
        self.ease.apply(self.progress())
    }

    pub fn value(&self) -> T {
        self.start.lerp(self.end, self.eased_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn ease_names_parse() {
        assert_eq!("in-out-cubic".parse::<Ease>(), Ok(Ease::InOutCubic));
        assert_eq!("Linear".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!(
            "bounce".parse::<Ease>(),
            Err(RigError::UnknownEase("bounce".into()))
        );
    }

    #[test]
    fn value_tracks_elapsed() {
        let mut tween = Tween::new(0.0f32);
        tween.start(2.0, 6.0, 2.0, Ease::Linear).unwrap();
        assert_eq!(tween.value(), 2.0);

        tween.update(0.5);
        assert_eq!(tween.value(), 3.0);
        tween.update(1.0);
        assert_eq!(tween.value(), 5.0);

        assert!(tween.update(0.5));
        assert_eq!(tween.state(), TweenState::Stopped);
        assert_eq!(tween.value(), 6.0);

        // overshoot is clamped
        let mut tween = Tween::new(0.0f32);
        tween.start(0.0, 1.0, 1.0, Ease::Linear).unwrap();
        tween.update(3.0);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn start_while_running_is_dropped() {
        let mut tween = Tween::new(0.0f32);
        tween.start(0.0, 1.0, 1.0, Ease::Linear).unwrap();
        tween.update(0.25);
        tween.start(5.0, 9.0, 4.0, Ease::InQuad).unwrap();

        assert_eq!(tween.start_value(), 0.0);
        assert_eq!(tween.end_value(), 1.0);
        assert_eq!(tween.duration(), 1.0);
        assert_eq!(tween.ease(), Ease::Linear);
        assert_eq!(tween.elapsed(), 0.25);
    }

    #[test]
    fn negative_duration_leaves_state_alone() {
        let mut tween = Tween::new(0.0f32);
        let err = tween.start(0.0, 1.0, -1.0, Ease::Linear).unwrap_err();
        assert!(matches!(err, RigError::InvalidArgument { name: "duration", .. }));
        assert_eq!(tween.state(), TweenState::Idle);
        assert_eq!(tween.duration(), 0.0);
    }

    #[test]
    fn update_only_advances_running() {
        let mut tween = Tween::new(1.0f32);
        assert!(!tween.update(10.0));
        assert_eq!(tween.elapsed(), 0.0);
        assert_eq!(tween.state(), TweenState::Idle);

        tween.start(0.0, 1.0, 1.0, Ease::Linear).unwrap();
        assert!(tween.update(1.0));
        assert!(!tween.update(1.0));
        assert_eq!(tween.elapsed(), 1.0);
    }

    #[test]
    fn stop_behaviors() {
        let mut tween = Tween::new(0.0f32);
        tween.start(0.0, 10.0, 1.0, Ease::Linear).unwrap();
        tween.update(0.5);
        tween.stop(StopBehavior::Freeze);
        assert_eq!(tween.state(), TweenState::Idle);
        assert_eq!(tween.value(), 5.0);

        tween.start(0.0, 10.0, 1.0, Ease::Linear).unwrap();
        tween.update(0.5);
        tween.stop(StopBehavior::ForceComplete);
        assert_eq!(tween.state(), TweenState::Idle);
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn zero_duration_completes_on_first_update() {
        let mut tween = Tween::new(0.0f32);
        tween.start(0.0, 4.0, 0.0, Ease::Linear).unwrap();
        assert_eq!(tween.value(), 4.0);
        assert!(tween.update(0.0));
    }

    #[test]
    fn restart_after_stopped() {
        let mut tween = Tween::new(0.0f32);
        tween.start(0.0, 1.0, 1.0, Ease::Linear).unwrap();
        tween.update(2.0);
        assert_eq!(tween.state(), TweenState::Stopped);
        tween.start(1.0, 0.0, 1.0, Ease::OutQuad).unwrap();
        assert!(tween.is_running());
        assert_eq!(tween.value(), 1.0);
    }
}
