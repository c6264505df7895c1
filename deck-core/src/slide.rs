//! Slides, backgrounds, and the document that owns them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DeckResult;
use crate::{Element, ElementId};

/// Editor coordinate space width in pixels.
pub const EDITOR_WIDTH: f32 = 1333.0;

/// Editor coordinate space height in pixels.
pub const EDITOR_HEIGHT: f32 = 750.0;

/// Physical page width in length units (widescreen).
pub const PAGE_WIDTH: f32 = 13.333;

/// Physical page height in length units.
pub const PAGE_HEIGHT: f32 = 7.5;

/// Editor pixels per physical page unit (~100). Both axes use this scale, so
/// aspect ratio is preserved between the editor space and the page.
pub const PX_PER_UNIT: f32 = EDITOR_WIDTH / PAGE_WIDTH;

/// Unique identifier for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(Uuid);

impl SlideId {
    /// Create a new unique slide ID.
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

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a background image is fitted to the page on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundFit {
    /// Image fully covers the page, centered, overflow cropped by the
    /// consuming renderer.
    Cover,
    /// Image fits entirely inside the page, centered, possibly letterboxed.
    Contain,
}

/// An embedded background image with its natural pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Image source as a base64 data URI.
    pub data: String,
    /// Natural width in pixels.
    pub natural_width: u32,
    /// Natural height in pixels.
    pub natural_height: u32,
    /// Fit mode.
    pub fit: BackgroundFit,
}

/// A slide's background: a flat color plus an optional image on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Background color as hex.
    pub color: String,
    /// Optional background image.
    pub image: Option<BackgroundImage>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: "#FFFFFF".to_string(),
            image: None,
        }
    }
}

/// An ordered collection of elements plus a background.
///
/// Element order is z-order: later elements draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Unique identifier, immutable after creation.
    pub id: SlideId,
    /// Slide background.
    pub background: Background,
    /// Elements in z-order.
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create a new blank slide with a white background and no elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SlideId::new(),
            background: Background::default(),
            elements: Vec::new(),
        }
    }

    /// Get an element by ID.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Presentation title.
    pub title: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
        }
    }
}

/// Document theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color as hex, used by template generation.
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_color: "#FF009C".to_string(),
        }
    }
}

/// The full in-memory presentation being edited.
///
/// Owns its slides exclusively; each slide owns its elements exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata.
    pub metadata: Metadata,
    /// Document theme.
    pub theme: Theme,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Document {
    /// Create a new document with exactly one blank slide, so an active
    /// slide always exists at startup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            theme: Theme::default(),
            slides: vec![Slide::new()],
        }
    }

    /// Get a slide by ID.
    #[must_use]
    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Get a mutable reference to a slide by ID.
    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    /// Whether a slide with the given ID exists.
    #[must_use]
    pub fn contains_slide(&self, id: SlideId) -> bool {
        self.slides.iter().any(|s| s.id == id)
    }

    /// Serialize the document to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DeckResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not match the
    /// document shape.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, TextConfig};

    #[test]
    fn test_new_document_has_one_blank_slide() {
        let doc = Document::new();
        assert_eq!(doc.slides.len(), 1);
        assert!(doc.slides[0].elements.is_empty());
        assert_eq!(doc.slides[0].background.color, "#FFFFFF");
        assert_eq!(doc.metadata.title, "Untitled");
        assert_eq!(doc.theme.accent_color, "#FF009C");
    }

    #[test]
    fn test_slide_lookup_by_id() {
        let mut doc = Document::new();
        let id = doc.slides[0].id;
        assert!(doc.contains_slide(id));
        assert!(doc.slide(id).is_some());
        assert!(doc.slide_mut(id).is_some());
        assert!(!doc.contains_slide(SlideId::new()));
    }

    #[test]
    fn test_element_lookup_preserves_order() {
        let mut slide = Slide::new();
        let first = Element::text(TextConfig {
            text: "first".to_string(),
            ..TextConfig::default()
        });
        let second = Element::text(TextConfig {
            text: "second".to_string(),
            ..TextConfig::default()
        });
        let first_id = first.id;
        slide.elements.push(first);
        slide.elements.push(second);

        assert!(slide.element(first_id).is_some());
        assert_eq!(slide.elements.len(), 2);
        match &slide.elements[1].kind {
            crate::ElementKind::Text { text, .. } => assert_eq!(text, "second"),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn test_document_json_round_trip() {
        let mut doc = Document::new();
        doc.metadata.title = "Quarterly review".to_string();
        doc.slides[0].elements.push(Element::text(TextConfig {
            text: "Agenda".to_string(),
            ..TextConfig::default()
        }));

        let json = doc.to_json().unwrap();
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_scale_round_trip() {
        let px = 421.5_f32;
        let units = px / PX_PER_UNIT;
        let back = units * PX_PER_UNIT;
        assert!((px - back).abs() < 1e-3);
    }
}
