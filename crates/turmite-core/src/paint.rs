//! Paint events emitted for the presentation layer.
//!
//! The engine never renders. It reports logical `(position, color index)`
//! pairs; a host translates the index through the simulation's palette
//! into an [`Rgba`] and paints however it likes.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Creates an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts an HSV triple (each component in `[0, 1]`) to an opaque color.
    ///
    /// Hue wraps; saturation and value are clamped.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let (r, g, b) = if s < 0.0001 {
            (v, v, v)
        } else {
            let h = h.rem_euclid(1.0) * 6.0;
            let i = h.floor() as i32;
            let f = h - i as f32;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));
            match i % 6 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };
        Self::opaque(channel(r), channel(g), channel(b))
    }

    /// Packs the color as `0xRRGGBBAA`.
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

/// One cell repainted by a simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellChange {
    /// Column of the cell.
    pub x: i32,
    /// Row of the cell.
    pub y: i32,
    /// Palette index to paint the cell with.
    ///
    /// This is the state the cell held *before* the visit, i.e. the state
    /// the ant is leaving behind.
    pub color_index: u32,
}

/// A notification for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintEvent {
    /// Every cell must be repainted with the given palette index.
    ///
    /// The engine clears with index 0. That is the background color
    /// except under a single-state rule, where index 0 is the ink.
    Clear {
        /// Palette index to fill the whole canvas with.
        color_index: u32,
    },
    /// A single cell must be repainted.
    Cell(CellChange),
}

impl From<CellChange> for PaintEvent {
    fn from(change: CellChange) -> Self {
        PaintEvent::Cell(change)
    }
}
