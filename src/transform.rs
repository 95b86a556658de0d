use crate::gfx::math::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Transform handle shared between the host and the components that move it.
pub type SharedTransform = Rc<RefCell<Transform>>;

/// Position, orientation and planar velocity of a scene object.
///
/// Velocity is owned by the host (usually whatever moves the object); the
/// rig only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    /// Radians.
    pub angle: f32,
    pub velocity: Vec2,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn shared(self) -> SharedTransform {
        Rc::new(RefCell::new(self))
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn turn_to(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
