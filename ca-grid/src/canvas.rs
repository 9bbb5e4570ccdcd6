#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Self = Self([0, 0, 0, 0xff]);
    pub const WHITE: Self = Self([0xff, 0xff, 0xff, 0xff]);

    /// Opaque color from hue in degrees, saturation and value. Saturation and
    /// value are clamped into [0, 1] first.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue / 360.0).rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match i as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self([
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            0xff,
        ])
    }
}

/// Rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Drawing surface the automaton renders onto.
pub trait Canvas {
    fn clear(&mut self);
    fn draw_rect(&mut self, rect: Rect, fill: Rgba, outline: Rgba);
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Clear,
    Rect { rect: Rect, fill: Rgba, outline: Rgba },
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Rect { rect, fill, .. } => Some((rect, fill)),
            DrawCommand::Clear => None,
        })
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Rgba, outline: Rgba) {
        self.commands.push(DrawCommand::Rect {
            rect,
            fill,
            outline,
        });
    }
}
