use super::draw::DrawSurface;
use super::math::{Color, Rect};

/// Software RGBA surface. Pixels are straight (non-premultiplied) alpha.
#[derive(Debug, Clone)]
pub struct CpuCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fills: usize,
}

impl CpuCanvas {
    pub fn new(width: u32, height: u32, clear: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![clear; width as usize * height as usize],
            fills: 0,
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        self.fills = 0;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Number of fills since the last clear.
    pub fn fill_count(&self) -> usize {
        self.fills
    }
}

fn blend_over(dst: Color, src: Color) -> Color {
    let a = src.a + dst.a * (1.0 - src.a);
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let channel = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / a;
    Color::new(channel(src.r, dst.r), channel(src.g, dst.g), channel(src.b, dst.b), a)
}

impl DrawSurface for CpuCanvas {
    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills += 1;
        let x0 = rect.x.max(0.0).floor() as u32;
        let y0 = rect.y.max(0.0).floor() as u32;
        let x1 = ((rect.x + rect.width).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((rect.y + rect.height).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            let row = (y * self.width) as usize;
            for x in x0..x1 {
                let px = &mut self.pixels[row + x as usize];
                *px = blend_over(*px, color);
            }
        }
    }
}
