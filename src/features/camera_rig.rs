use super::shake::{ShakeDirection, ShakeParams, ShakeState, ShakeWave};
use super::Feature;
use crate::clock::FrameTime;
use crate::error::{RigError, RigResult};
use crate::gfx::draw::DrawSurface;
use crate::gfx::math::Vec3;
use crate::transform::{SharedTransform, Transform};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Upper bound for [`CameraRig::set_trailing_distance`].
pub const MAX_TRAILING_DISTANCE: f32 = 0.9;

/// Shake strength at or below which an active shake is dropped.
const SHAKE_CUTOFF: f32 = 1.0;

/// Moves a camera transform: follows a target, shakes, and leans back with
/// speed.
///
/// Shake and lean-back are applied as a synthetic offset that is removed
/// again at the start of the next tick, so following always works on the
/// tracked position.
#[derive(Debug)]
pub struct CameraRig {
    transform: SharedTransform,
    target: Option<Weak<RefCell<Transform>>>,
    trailing_distance: f32,
    align_with_target: bool,
    lean_back_ratio: f32,
    shake: Option<ShakeState>,
    last_offset: Vec3,
}

impl CameraRig {
    pub fn new(transform: SharedTransform) -> Self {
        Self {
            transform,
            target: None,
            trailing_distance: 0.0,
            align_with_target: false,
            lean_back_ratio: 0.0,
            shake: None,
            last_offset: Vec3::ZERO,
        }
    }

    pub fn transform(&self) -> &SharedTransform {
        &self.transform
    }

    /// The followed transform, if one is set and still alive.
    pub fn target(&self) -> Option<SharedTransform> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_target(&mut self, target: Option<&SharedTransform>) {
        self.target = target.map(Rc::downgrade);
    }

    pub fn trailing_distance(&self) -> f32 {
        self.trailing_distance
    }

    /// Clamped to `[0, 0.9]`.
    pub fn set_trailing_distance(&mut self, value: f32) {
        self.trailing_distance = value.clamp(0.0, MAX_TRAILING_DISTANCE);
    }

    pub fn align_with_target(&self) -> bool {
        self.align_with_target
    }

    pub fn set_align_with_target(&mut self, align: bool) {
        self.align_with_target = align;
    }

    pub fn lean_back_ratio(&self) -> f32 {
        self.lean_back_ratio
    }

    /// Negative ratios zoom in with speed instead of pulling back.
    pub fn set_lean_back_ratio(&mut self, ratio: f32) {
        self.lean_back_ratio = ratio;
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    pub fn shake_strength(&self) -> f32 {
        self.shake.as_ref().map_or(0.0, |s| s.strength)
    }

    pub fn shake_damping(&self) -> f32 {
        self.shake.as_ref().map_or(0.0, |s| s.damping)
    }

    /// Offset added to the transform on the last tick.
    pub fn last_offset(&self) -> Vec3 {
        self.last_offset
    }

    pub fn shake(&mut self, direction: ShakeDirection, params: ShakeParams) -> RigResult<()> {
        self.shake_with(direction.into(), params)
    }

    /// Starts or reinforces a shake.
    ///
    /// Strength adds to whatever is left of a running shake. Damping, speed
    /// and waveform come from this request alone, so a short follow-up shake
    /// also speeds up the decay of the combined strength.
    pub fn shake_with(&mut self, wave: ShakeWave, params: ShakeParams) -> RigResult<()> {
        let duration = RigError::check_duration("duration", params.duration)?;
        let remaining = self.shake_strength();

        debug!(
            "shake {:?}: strength {} (+{} remaining), duration {}s, speed {}",
            wave, params.strength, remaining, duration, params.speed
        );

        self.shake = Some(ShakeState {
            wave,
            strength: remaining + params.strength,
            // a zero-length request settles on the next update
            damping: if duration > 0.0 {
                params.strength / duration
            } else {
                f32::INFINITY
            },
            speed: params.speed,
        });
        Ok(())
    }

    pub fn update(&mut self, frame: &FrameTime) {
        let mut transform = self.transform.borrow_mut();
        transform.move_by(-self.last_offset);

        // a rig targeting its own transform has nothing to follow
        let target = self.target().filter(|t| !Rc::ptr_eq(t, &self.transform));
        if let Some(target) = target {
            let target = target.borrow();
            let closing = (self.trailing_distance * frame.time_mult).min(1.0);
            let delta = (target.position.xy() - transform.position.xy()) * closing;
            transform.move_by(Vec3::from_xy(delta, 0.0));
            if self.align_with_target {
                transform.turn_to(target.angle);
            }
        }

        let mut offset = Vec3::ZERO;
        if let Some(shake) = &mut self.shake {
            let wobble = shake.wave.sample(frame.total * shake.speed) * shake.strength;
            shake.strength -= if shake.damping.is_finite() {
                shake.damping * frame.delta * frame.time_mult
            } else {
                f32::INFINITY
            };
            if !(shake.strength > SHAKE_CUTOFF) {
                info!("shake settled");
                self.shake = None;
            } else {
                offset = Vec3::from_xy(wobble, 0.0);
            }
        }
        offset.z = -transform.velocity.length() * self.lean_back_ratio;

        transform.move_by(offset);
        self.last_offset = offset;
    }
}

impl Feature for CameraRig {
    fn name(&self) -> &'static str {
        "camera_rig"
    }

    fn update(&mut self, frame: &FrameTime) {
        CameraRig::update(self, frame);
    }

    fn render(&self, _surface: &mut dyn DrawSurface) {}
}
