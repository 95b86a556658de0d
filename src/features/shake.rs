use crate::error::RigError;
use crate::gfx::math::Vec2;
use std::fmt;
use std::str::FromStr;

/// Built-in shake waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeDirection {
    Horizontal,
    Vertical,
    Circular,
}

impl FromStr for ShakeDirection {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "circular" => Ok(Self::Circular),
            _ => Err(RigError::UnknownDirection(s.to_string())),
        }
    }
}

/// Maps time to a displacement in `[-1, 1]²`.
pub enum ShakeWave {
    Horizontal,
    Vertical,
    Circular,
    Custom(Box<dyn Fn(f32) -> Vec2>),
}

impl ShakeWave {
    pub fn custom(f: impl Fn(f32) -> Vec2 + 'static) -> Self {
        Self::Custom(Box::new(f))
    }

    pub fn sample(&self, t: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(t.cos(), 0.0),
            Self::Vertical => Vec2::new(0.0, t.cos()),
            Self::Circular => Vec2::new(t.sin(), t.cos()),
            Self::Custom(f) => f(t),
        }
    }
}

impl From<ShakeDirection> for ShakeWave {
    fn from(direction: ShakeDirection) -> Self {
        match direction {
            ShakeDirection::Horizontal => Self::Horizontal,
            ShakeDirection::Vertical => Self::Vertical,
            ShakeDirection::Circular => Self::Circular,
        }
    }
}

impl fmt::Debug for ShakeWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("Horizontal"),
            Self::Vertical => f.write_str("Vertical"),
            Self::Circular => f.write_str("Circular"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Parameters of a single shake request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParams {
    /// Peak displacement in world units.
    pub strength: f32,
    /// Seconds until this request alone would decay away.
    pub duration: f32,
    /// Waveform time scale.
    pub speed: f32,
}

impl ShakeParams {
    pub fn new(strength: f32, duration: f32, speed: f32) -> Self {
        Self {
            strength,
            duration,
            speed,
        }
    }
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self::new(10.0, 0.5, 100.0)
    }
}

/// Active shake on a rig.
#[derive(Debug)]
pub struct ShakeState {
    pub wave: ShakeWave,
    pub strength: f32,
    /// Strength lost per second.
    pub damping: f32,
    pub speed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn built_in_waves() {
        assert_eq!(ShakeWave::Horizontal.sample(0.0), Vec2::new(1.0, 0.0));
        assert_eq!(ShakeWave::Vertical.sample(0.0), Vec2::new(0.0, 1.0));
        assert_eq!(ShakeWave::Circular.sample(0.0), Vec2::new(0.0, 1.0));
        let quarter = ShakeWave::Circular.sample(FRAC_PI_2);
        assert!((quarter.x - 1.0).abs() < 1e-6);
        assert!(quarter.y.abs() < 1e-6);
    }

    #[test]
    fn waves_stay_in_unit_square() {
        for i in 0..200 {
            let t = i as f32 * 0.37;
            for wave in [ShakeWave::Horizontal, ShakeWave::Vertical, ShakeWave::Circular] {
                let v = wave.sample(t);
                assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0);
            }
        }
    }

    #[test]
    fn custom_wave_is_called() {
        let wave = ShakeWave::custom(|t| Vec2::new(t, -t));
        assert_eq!(wave.sample(0.5), Vec2::new(0.5, -0.5));
        assert_eq!(format!("{wave:?}"), "Custom(..)");
    }

    #[test]
    fn directions_parse() {
        assert_eq!("Circular".parse::<ShakeDirection>(), Ok(ShakeDirection::Circular));
        assert_eq!(
            "diagonal".parse::<ShakeDirection>(),
            Err(RigError::UnknownDirection("diagonal".into()))
        );
    }

    #[test]
    fn default_params() {
        assert_eq!(ShakeParams::default(), ShakeParams::new(10.0, 0.5, 100.0));
    }
}
