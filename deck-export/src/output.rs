//! Flattened output model consumed by the file-serialization collaborator.
//!
//! All geometry is in physical page units (see [`deck_core::PAGE_WIDTH`]);
//! rotation stays in degrees and font sizes in points.

use serde::{Deserialize, Serialize};

/// Position and size of a primitive on the page, in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// X position from the left edge.
    pub x: f32,
    /// Y position from the top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// Outline specification for shape primitives.
///
/// Always present so consumers that require a line spec never see a hole;
/// a borderless shape carries a zero-width line in its fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    /// Line color as hex.
    pub color: String,
    /// Line width; zero for borderless shapes.
    pub width: f32,
}

/// Resolved placement of a background image on the page.
///
/// With cover fit the placement may overflow the page (negative x or y);
/// clipping is the consuming renderer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    /// Image source as a base64 data URI.
    pub data: String,
    /// X position in page units, centered (possibly negative).
    pub x: f32,
    /// Y position in page units, centered (possibly negative).
    pub y: f32,
    /// Placed width in page units.
    pub w: f32,
    /// Placed height in page units.
    pub h: f32,
}

/// One drawable primitive on an output slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Primitive {
    /// A plain rectangle (corner radius was zero).
    Rect {
        /// Page-unit frame.
        frame: Frame,
        /// Rotation in degrees.
        rotation: f32,
        /// Fill color as hex.
        fill: String,
        /// Outline.
        line: LineSpec,
    },

    /// A rounded rectangle (corner radius was positive).
    RoundedRect {
        /// Page-unit frame.
        frame: Frame,
        /// Rotation in degrees.
        rotation: f32,
        /// Fill color as hex.
        fill: String,
        /// Outline.
        line: LineSpec,
        /// Corner radius in page units.
        radius: f32,
    },

    /// A text run.
    Text {
        /// Page-unit frame.
        frame: Frame,
        /// Rotation in degrees.
        rotation: f32,
        /// Text content.
        text: String,
        /// Font family name.
        font_family: String,
        /// Font size in points.
        font_size: f32,
        /// Text color as hex.
        color: String,
        /// Whether the text is bold.
        bold: bool,
    },

    /// An embedded image.
    Image {
        /// Page-unit frame.
        frame: Frame,
        /// Rotation in degrees.
        rotation: f32,
        /// Image source as a base64 data URI.
        data: String,
    },
}

/// One flattened, step-expanded, unit-converted slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSlide {
    /// Flat background color as hex.
    pub background_color: String,
    /// Resolved background image placement, if the source slide had one.
    pub background_image: Option<ImagePlacement>,
    /// Primitives in z-order.
    pub primitives: Vec<Primitive>,
}
