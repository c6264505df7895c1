//! # Deck Export
//!
//! Pure transformation from a [`deck_core::Document`] to an ordered sequence
//! of flattened [`OutputSlide`]s: progressive-reveal steps expanded, editor
//! pixels converted to physical page units, backgrounds resolved to concrete
//! placements. The result is handed to an external file-serialization
//! collaborator; no file format is owned here.
//!
//! Exporting reads the document only - it never touches store or history
//! state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod output;

pub use export::export_document;
pub use output::{Frame, ImagePlacement, LineSpec, OutputSlide, Primitive};

/// Deck export version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
