//! Camera rig motion and screen fades for per-frame game loops.
//!
//! [`features::camera_rig::CameraRig`] follows a target, shakes and leans
//! back with speed; [`features::fade::FadeOverlay`] fades the whole
//! viewport to or from a color using the [`gfx::anim::Tween`] engine.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod features;
pub mod gfx;
pub mod transform;

pub use error::{RigError, RigResult};
