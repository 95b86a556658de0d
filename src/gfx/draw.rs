use super::math::{Color, Rect};

/// Target for overlay drawing. Fills are composited source-over.
pub trait DrawSurface {
    fn viewport(&self) -> Rect;
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
