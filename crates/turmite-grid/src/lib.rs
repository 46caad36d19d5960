//! Cell-state storage for Turmite simulations.
//!
//! [`GridState`] is a fixed-size, row-major `W × H` array of cell states
//! with toroidal (wrap-around) topology. It knows nothing about ants or
//! rules; the engine drives it through [`GridState::get`],
//! [`GridState::set`] and [`GridState::offset`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod wrap;

pub use error::GridError;
pub use grid::GridState;
pub use wrap::wrap_axis;
