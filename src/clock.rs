//! Frame timing for the per-tick update loop.
//!
//! The host feeds the measured frame delta into [`Clock::tick`] once per
//! frame and hands the resulting [`FrameTime`] to every component.

/// Nominal frame duration used to derive the time multiplier.
pub const NOMINAL_FRAME: f32 = 1.0 / 60.0;

/// Timing snapshot for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub delta: f32,
    /// `delta` relative to the nominal frame; 1.0 at the nominal rate.
    pub time_mult: f32,
    /// Monotonic seconds since the clock started.
    pub total: f32,
}

impl FrameTime {
    pub fn new(delta: f32, time_mult: f32, total: f32) -> Self {
        Self {
            delta,
            time_mult,
            total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Clock {
    nominal_frame: f32,
    total: f32,
    last: FrameTime,
}

impl Clock {
    pub fn new() -> Self {
        Self::with_nominal_frame(NOMINAL_FRAME)
    }

    pub fn with_nominal_frame(nominal_frame: f32) -> Self {
        Self {
            nominal_frame,
            total: 0.0,
            last: FrameTime::new(0.0, 0.0, 0.0),
        }
    }

    /// Advances by `delta` seconds. Negative deltas are treated as zero.
    pub fn tick(&mut self, delta: f32) -> FrameTime {
        let delta = delta.max(0.0);
        self.total += delta;
        self.last = FrameTime::new(delta, delta / self.nominal_frame, self.total);
        self.last
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn last(&self) -> FrameTime {
        self.last
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
