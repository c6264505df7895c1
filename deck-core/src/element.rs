//! Slide elements - the positioned visual objects that make up a slide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Styling for a rectangle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    /// Fill color as hex.
    pub fill: String,
    /// Corner radius in editor pixels. Zero means square corners.
    pub radius: f32,
    /// Stroke color as hex, or `None` for a borderless shape.
    pub stroke: Option<String>,
    /// Stroke width in editor pixels. Ignored when `stroke` is `None`.
    pub stroke_width: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: "#DDDDDD".to_string(),
            radius: 0.0,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

/// Styling for a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in points.
    pub font_size: f32,
    /// Text color as hex.
    pub color: String,
    /// Whether the text is bold.
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: 18.0,
            color: "#111111".to_string(),
            bold: false,
        }
    }
}

/// The content variant of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ElementKind {
    /// A filled rectangle, optionally rounded and stroked.
    Rect {
        /// Rectangle styling.
        style: RectStyle,
    },

    /// A run of text.
    Text {
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },

    /// An embedded image, placed at its element frame.
    Image {
        /// Image source as a base64 data URI.
        data: String,
    },
}

/// One positioned visual object on a slide.
///
/// Geometry lives in the fixed 1333x750 editor pixel space (see
/// [`crate::EDITOR_WIDTH`]). Minimum sizes are enforced upstream by the
/// geometry-adjustment collaborators, not by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, immutable after creation.
    pub id: ElementId,
    /// X position in editor pixels.
    pub x: f32,
    /// Y position in editor pixels.
    pub y: f32,
    /// Width in editor pixels.
    pub w: f32,
    /// Height in editor pixels.
    pub h: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Progressive-reveal step at which the element becomes visible.
    pub appear_step: u32,
    /// Content variant.
    pub kind: ElementKind,
}

/// Configuration for [`Element::rect`].
#[derive(Debug, Clone)]
pub struct RectConfig {
    /// X position in editor pixels.
    pub x: f32,
    /// Y position in editor pixels.
    pub y: f32,
    /// Width in editor pixels.
    pub w: f32,
    /// Height in editor pixels.
    pub h: f32,
    /// Fill color as hex.
    pub fill: String,
    /// Corner radius in editor pixels.
    pub radius: f32,
    /// Stroke color as hex, if any.
    pub stroke: Option<String>,
    /// Stroke width in editor pixels.
    pub stroke_width: f32,
    /// Progressive-reveal step.
    pub appear_step: u32,
}

impl Default for RectConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0,
            fill: "#DDDDDD".to_string(),
            radius: 0.0,
            stroke: None,
            stroke_width: 1.0,
            appear_step: 0,
        }
    }
}

/// Configuration for [`Element::text`].
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// X position in editor pixels.
    pub x: f32,
    /// Y position in editor pixels.
    pub y: f32,
    /// Width in editor pixels.
    pub w: f32,
    /// Height in editor pixels.
    pub h: f32,
    /// Text content.
    pub text: String,
    /// Font size in points.
    pub size: f32,
    /// Text color as hex.
    pub color: String,
    /// Whether the text is bold.
    pub bold: bool,
    /// Font family name.
    pub font_family: String,
    /// Progressive-reveal step.
    pub appear_step: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 40.0,
            text: String::new(),
            size: 18.0,
            color: "#111111".to_string(),
            bold: false,
            font_family: "Calibri".to_string(),
            appear_step: 0,
        }
    }
}

/// Configuration for [`Element::image`].
#[derive(Debug, Clone, Default)]
pub struct ImageConfig {
    /// X position in editor pixels.
    pub x: f32,
    /// Y position in editor pixels.
    pub y: f32,
    /// Width in editor pixels.
    pub w: f32,
    /// Height in editor pixels.
    pub h: f32,
    /// Image source as a base64 data URI.
    pub data: String,
    /// Progressive-reveal step.
    pub appear_step: u32,
}

/// Configuration for [`Element::pill`].
#[derive(Debug, Clone)]
pub struct PillConfig {
    /// X position in editor pixels.
    pub x: f32,
    /// Y position in editor pixels.
    pub y: f32,
    /// Diameter in editor pixels.
    pub d: f32,
    /// Fill color as hex.
    pub fill: String,
    /// Progressive-reveal step.
    pub appear_step: u32,
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            d: 12.0,
            fill: "#DDDDDD".to_string(),
            appear_step: 0,
        }
    }
}

impl Element {
    /// Construct a rectangle element with a fresh id.
    #[must_use]
    pub fn rect(config: RectConfig) -> Self {
        Self {
            id: ElementId::new(),
            x: config.x,
            y: config.y,
            w: config.w,
            h: config.h,
            rotation: 0.0,
            appear_step: config.appear_step,
            kind: ElementKind::Rect {
                style: RectStyle {
                    fill: config.fill,
                    radius: config.radius,
                    stroke: config.stroke,
                    stroke_width: config.stroke_width,
                },
            },
        }
    }

    /// Construct a text element with a fresh id.
    #[must_use]
    pub fn text(config: TextConfig) -> Self {
        Self {
            id: ElementId::new(),
            x: config.x,
            y: config.y,
            w: config.w,
            h: config.h,
            rotation: 0.0,
            appear_step: config.appear_step,
            kind: ElementKind::Text {
                text: config.text,
                style: TextStyle {
                    font_family: config.font_family,
                    font_size: config.size,
                    color: config.color,
                    bold: config.bold,
                },
            },
        }
    }

    /// Construct an image element with a fresh id.
    #[must_use]
    pub fn image(config: ImageConfig) -> Self {
        Self {
            id: ElementId::new(),
            x: config.x,
            y: config.y,
            w: config.w,
            h: config.h,
            rotation: 0.0,
            appear_step: config.appear_step,
            kind: ElementKind::Image { data: config.data },
        }
    }

    /// Construct a circle/capsule: a square rect with an oversized corner
    /// radius (effectively `min(w, h) / 2`). Sugar over [`Element::rect`],
    /// not a distinct variant.
    #[must_use]
    pub fn pill(config: PillConfig) -> Self {
        Self::rect(RectConfig {
            x: config.x,
            y: config.y,
            w: config.d,
            h: config.d,
            fill: config.fill,
            radius: 999.0,
            appear_step: config.appear_step,
            ..RectConfig::default()
        })
    }

    /// Merge a partial update into this element.
    ///
    /// Base fields are replaced when present in the patch; the style
    /// sub-record is merged field-by-field so untouched sibling fields
    /// survive. Patch fields that do not apply to this element's variant are
    /// ignored.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(w) = patch.w {
            self.w = w;
        }
        if let Some(h) = patch.h {
            self.h = h;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(appear_step) = patch.appear_step {
            self.appear_step = appear_step;
        }

        match &mut self.kind {
            ElementKind::Rect { style } => {
                if let Some(sp) = &patch.style {
                    if let Some(fill) = &sp.fill {
                        style.fill.clone_from(fill);
                    }
                    if let Some(radius) = sp.radius {
                        style.radius = radius;
                    }
                    if let Some(stroke) = &sp.stroke {
                        style.stroke.clone_from(stroke);
                    }
                    if let Some(stroke_width) = sp.stroke_width {
                        style.stroke_width = stroke_width;
                    }
                }
            }
            ElementKind::Text { text, style } => {
                if let Some(new_text) = &patch.text {
                    text.clone_from(new_text);
                }
                if let Some(sp) = &patch.style {
                    if let Some(font_family) = &sp.font_family {
                        style.font_family.clone_from(font_family);
                    }
                    if let Some(font_size) = sp.font_size {
                        style.font_size = font_size;
                    }
                    if let Some(color) = &sp.color {
                        style.color.clone_from(color);
                    }
                    if let Some(bold) = sp.bold {
                        style.bold = bold;
                    }
                }
            }
            ElementKind::Image { .. } => {}
        }
    }
}

/// Partial update for an element. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    /// New X position.
    pub x: Option<f32>,
    /// New Y position.
    pub y: Option<f32>,
    /// New width.
    pub w: Option<f32>,
    /// New height.
    pub h: Option<f32>,
    /// New rotation in degrees.
    pub rotation: Option<f32>,
    /// New progressive-reveal step.
    pub appear_step: Option<u32>,
    /// New text content (text elements only).
    pub text: Option<String>,
    /// Style fields to merge.
    pub style: Option<StylePatch>,
}

/// Partial update for an element's style record. Covers both rect and text
/// styles; fields that don't match the element's variant are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    /// New fill color.
    pub fill: Option<String>,
    /// New corner radius.
    pub radius: Option<f32>,
    /// New stroke: `Some(Some(color))` sets it, `Some(None)` clears it.
    #[allow(clippy::option_option)]
    pub stroke: Option<Option<String>>,
    /// New stroke width.
    pub stroke_width: Option<f32>,
    /// New font family.
    pub font_family: Option<String>,
    /// New font size in points.
    pub font_size: Option<f32>,
    /// New text color.
    pub color: Option<String>,
    /// New bold flag.
    pub bold: Option<bool>,
}
