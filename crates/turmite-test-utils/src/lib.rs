//! Test utilities and fixtures for Turmite development.
//!
//! Provides a [`Canvas`] that replays paint events the way a renderer
//! would, and standard simulation configs in [`fixtures`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{config, langton_8x8, run};

use turmite_core::PaintEvent;

/// A palette-index framebuffer driven only by paint events.
///
/// Mirrors what a renderer sees: it never reads the grid, so comparing a
/// canvas against the grid checks the paint stream itself.
pub struct Canvas {
    width: u32,
    pixels: Vec<Option<u32>>,
}

impl Canvas {
    /// A canvas where no pixel has been painted yet.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            pixels: vec![None; (width as usize) * (height as usize)],
        }
    }

    /// Apply events in order.
    pub fn apply<I: IntoIterator<Item = PaintEvent>>(&mut self, events: I) {
        for event in events {
            match event {
                PaintEvent::Clear { color_index } => self.pixels.fill(Some(color_index)),
                PaintEvent::Cell(change) => {
                    let i = (change.y as usize) * (self.width as usize) + (change.x as usize);
                    self.pixels[i] = Some(change.color_index);
                }
            }
        }
    }

    /// Palette index at `(x, y)`, or `None` if never painted.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}
