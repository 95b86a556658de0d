pub mod camera_rig;
pub mod fade;
pub mod shake;

use crate::clock::FrameTime;
use crate::gfx::draw::DrawSurface;

/// A per-tick component driven by the host loop.
///
/// Each tick the host calls `update` on every feature, then `render`.
pub trait Feature {
    fn name(&self) -> &'static str;
    fn update(&mut self, frame: &FrameTime);
    fn render(&self, surface: &mut dyn DrawSurface);
}
