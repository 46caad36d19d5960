//! Buffered paint notifications awaiting the host.

use std::vec::Drain;

use turmite_core::{CellChange, PaintEvent};

/// Ordered queue of [`PaintEvent`]s the host has not drained yet.
///
/// The engine appends; the host drains once per step or once per frame.
/// A [`PaintEvent::Clear`] supersedes everything before it, so queuing a
/// clear drops older events.
#[derive(Clone, Debug, Default)]
pub struct PaintBuffer {
    events: Vec<PaintEvent>,
}

impl PaintBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single-cell repaint.
    #[inline]
    pub fn push_cell(&mut self, change: CellChange) {
        self.events.push(PaintEvent::Cell(change));
    }

    /// Discard pending events and queue a full repaint.
    pub fn clear_canvas(&mut self, color_index: u32) {
        self.events.clear();
        self.events.push(PaintEvent::Clear { color_index });
    }

    /// Remove and return all pending events in emission order.
    pub fn drain(&mut self) -> Drain<'_, PaintEvent> {
        self.events.drain(..)
    }

    /// Pending events in emission order.
    pub fn events(&self) -> &[PaintEvent] {
        &self.events
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
