use ca_grid::{Canvas, Rect, Rgba};

/// Rasterizes canvas commands into an RGBA frame buffer, such as the one
/// `Pixels::frame_mut` hands out.
pub struct PixelsCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    background: Rgba,
}

impl<'a> PixelsCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, background: Rgba) -> Self {
        assert_eq!(frame.len(), 4 * width as usize * height as usize);
        Self {
            frame,
            width,
            height,
            background,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixel_index(x, y).map(|index| {
            let mut color = [0; 4];
            color.copy_from_slice(&self.frame[index..index + 4]);
            Rgba(color)
        })
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(4 * (y as usize * self.width as usize + x as usize))
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(index) = self.pixel_index(x, y) {
            self.frame[index..index + 4].copy_from_slice(&color.0);
        }
    }

    /// Covered pixel range along one axis, before clipping: (first, last).
    fn span(start: f64, len: f64) -> (i64, i64) {
        let first = start.floor() as i64;
        let last = (start + len).ceil() as i64 - 1;
        (first, last)
    }

    fn clip(first: i64, last: i64, max: u32) -> std::ops::RangeInclusive<i64> {
        first.max(0)..=last.min(max as i64 - 1)
    }
}

impl Canvas for PixelsCanvas<'_> {
    fn clear(&mut self) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&self.background.0);
        }
    }

    /// Fills the rectangle and strokes a one-pixel outline along its inside edge.
    fn draw_rect(&mut self, rect: Rect, fill: Rgba, outline: Rgba) {
        let (left, right) = Self::span(rect.x, rect.w);
        let (top, bottom) = Self::span(rect.y, rect.h);
        for y in Self::clip(top, bottom, self.height) {
            for x in Self::clip(left, right, self.width) {
                let on_edge = x == left || x == right || y == top || y == bottom;
                let color = if on_edge { outline } else { fill };
                self.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}
