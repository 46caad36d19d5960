//! Core types for the Turmite simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, the engine and hosts: tick IDs,
//! headings and turns, rule sets, and the paint events a presentation
//! layer consumes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heading;
pub mod id;
pub mod paint;
pub mod rule;

pub use heading::{Heading, Turn};
pub use id::TickId;
pub use paint::{CellChange, PaintEvent, Rgba};
pub use rule::{RuleError, RuleSet};
