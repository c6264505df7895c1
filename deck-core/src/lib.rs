//! # Deck Core
//!
//! Document state engine for a slide deck editor: the slide/element data
//! model, the snapshot-based undo/redo history, and the mutation surface
//! that UI collaborators drive.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 deck-core                   │
//! ├─────────────────────────────────────────────┤
//! │  Model           │  History Engine          │
//! │  - Elements      │  - Bounded past/future   │
//! │  - Slides        │  - Deep-copy snapshots   │
//! │  - Templates     │  - FIFO eviction         │
//! ├─────────────────────────────────────────────┤
//! │  Document Store  │  Image Decode            │
//! │  - commit()      │  - async two-phase       │
//! │  - mutation API  │  - data-URI embedding    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every mutation routes through [`DeckStore`] and is undoable; the export
//! pipeline (the `deck-export` crate) reads the [`Document`] without touching
//! any of this state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod element;
pub mod error;
pub mod history;
pub mod image;
pub mod slide;
pub mod store;
pub mod template;

pub use element::{
    Element, ElementId, ElementKind, ElementPatch, ImageConfig, PillConfig, RectConfig, RectStyle,
    StylePatch, TextConfig, TextStyle,
};
pub use error::{DeckError, DeckResult};
pub use history::{History, Snapshot, HISTORY_LIMIT};
pub use self::image::{decode_image, DecodedImage};
pub use slide::{
    Background, BackgroundFit, BackgroundImage, Document, Metadata, Slide, SlideId, Theme,
    EDITOR_HEIGHT, EDITOR_WIDTH, PAGE_HEIGHT, PAGE_WIDTH, PX_PER_UNIT,
};
pub use store::DeckStore;
pub use template::{build_template, TemplateId};

/// Deck core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
