//! The document store - the mutation surface UI collaborators drive.
//!
//! Every mutating entry point resolves its target first (silently doing
//! nothing when there is none), then routes through [`DeckStore::commit`],
//! which records a pre-mutation [`Snapshot`] before applying the edit. The
//! store is constructor-injected state owned by its host; there is no
//! process-wide singleton. Methods take `&mut self`: a single mutator at a
//! time, no locking. A multi-threaded host wraps the whole store in one
//! mutual-exclusion boundary.

use crate::image::decode_image;
use crate::{
    BackgroundFit, BackgroundImage, DeckResult, DecodedImage, Document, Element, ElementId,
    ElementPatch, History, ImageConfig, RectConfig, Slide, SlideId, Snapshot, TemplateId,
    TextConfig, build_template,
};

/// Maximum placed width for a freshly inserted image element, in editor px.
const IMAGE_MAX_WIDTH: f32 = 520.0;

/// Minimum placed size per axis for a freshly inserted image element.
const IMAGE_MIN_SIZE: f32 = 20.0;

/// Editable deck state: the document, the view-state selection, and the
/// undo/redo history wrapping every mutation.
#[derive(Debug, Clone)]
pub struct DeckStore {
    document: Document,
    active_slide: Option<SlideId>,
    selected_element: Option<ElementId>,
    history: History,
}

impl DeckStore {
    /// Create a store with a fresh one-slide document. The initial slide is
    /// active, so element insertion works immediately.
    #[must_use]
    pub fn new() -> Self {
        let document = Document::new();
        let active_slide = document.slides.first().map(|s| s.id);
        Self {
            document,
            active_slide,
            selected_element: None,
            history: History::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Read API
    // -----------------------------------------------------------------------

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Id of the active slide, if any.
    #[must_use]
    pub fn active_slide_id(&self) -> Option<SlideId> {
        self.active_slide
    }

    /// Id of the selected element, if any.
    #[must_use]
    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected_element
    }

    /// The active slide, if any.
    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.document.slide(self.active_slide?)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            document: self.document.clone(),
            active_slide: self.active_slide,
            selected_element: self.selected_element,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.document = snapshot.document;
        self.active_slide = snapshot.active_slide;
        self.selected_element = snapshot.selected_element;
    }

    /// The only sanctioned way to mutate the document: record the
    /// pre-mutation snapshot (invalidating redo), then apply the edit.
    fn commit<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut Self),
    {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
        mutate(self);
    }

    /// Restore the most recent past snapshot. No-op when nothing to undo.
    pub fn undo(&mut self) {
        let current = self.snapshot();
        if let Some(snapshot) = self.history.undo(current) {
            self.restore(snapshot);
        }
    }

    /// Re-apply the most recently undone edit. No-op when nothing to redo.
    pub fn redo(&mut self) {
        let current = self.snapshot();
        if let Some(snapshot) = self.history.redo(current) {
            self.restore(snapshot);
        }
    }

    // -----------------------------------------------------------------------
    // View state (not history-tracked)
    // -----------------------------------------------------------------------

    /// Make a slide active and clear the element selection. View-state only:
    /// never undoable, never clears the redo stack.
    pub fn set_active_slide(&mut self, id: SlideId) {
        self.active_slide = Some(id);
        self.selected_element = None;
    }

    /// Change the element selection. View-state only, like
    /// [`DeckStore::set_active_slide`].
    pub fn set_selected_element(&mut self, id: Option<ElementId>) {
        self.selected_element = id;
    }

    // -----------------------------------------------------------------------
    // Slide operations
    // -----------------------------------------------------------------------

    /// Append a blank slide, make it active, and clear the selection.
    pub fn add_slide(&mut self) {
        let slide = Slide::new();
        let id = slide.id;
        self.commit(move |st| {
            st.document.slides.push(slide);
            st.active_slide = Some(id);
            st.selected_element = None;
        });
    }

    /// Remove a slide and, with it, all of its elements. If it was active,
    /// the first remaining slide becomes active (or none when the deck is
    /// empty). Unknown ids are ignored.
    pub fn delete_slide(&mut self, id: SlideId) {
        if !self.document.contains_slide(id) {
            tracing::debug!(%id, "delete_slide: unknown slide, ignoring");
            return;
        }
        self.commit(move |st| {
            st.document.slides.retain(|s| s.id != id);
            if st.active_slide == Some(id) {
                st.active_slide = st.document.slides.first().map(|s| s.id);
            }
            st.selected_element = None;
        });
    }

    /// Append a slide built from a template, make it active, and clear the
    /// selection. Unknown template ids produce a blank slide.
    pub fn insert_template(&mut self, template_id: &str) {
        let template = TemplateId::parse(template_id);
        let slide = build_template(template, &self.document.theme.accent_color);
        let id = slide.id;
        self.commit(move |st| {
            st.document.slides.push(slide);
            st.active_slide = Some(id);
            st.selected_element = None;
        });
    }

    // -----------------------------------------------------------------------
    // Element operations
    // -----------------------------------------------------------------------

    /// Append a default-configured rectangle to the active slide.
    pub fn add_rect(&mut self) {
        let Some(target) = self.active_slide else {
            tracing::debug!("add_rect: no active slide, ignoring");
            return;
        };
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.elements.push(Element::rect(RectConfig {
                    x: 120.0,
                    y: 120.0,
                    w: 240.0,
                    h: 140.0,
                    fill: "#EFEFEF".to_string(),
                    radius: 18.0,
                    ..RectConfig::default()
                }));
            }
        });
    }

    /// Append a default-configured text element to the active slide.
    pub fn add_text(&mut self) {
        let Some(target) = self.active_slide else {
            tracing::debug!("add_text: no active slide, ignoring");
            return;
        };
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.elements.push(Element::text(TextConfig {
                    x: 140.0,
                    y: 140.0,
                    w: 520.0,
                    h: 80.0,
                    text: "Text".to_string(),
                    ..TextConfig::default()
                }));
            }
        });
    }

    /// Decode image bytes and append an image element to the slide that was
    /// active when the call was made.
    ///
    /// The decode runs outside the history commit; only the final insertion
    /// is undoable. If the captured slide is deleted while the decode is in
    /// flight, the result is dropped.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the bytes are not a recognizable image;
    /// nothing is committed in that case.
    pub async fn add_image_from_file(&mut self, bytes: Vec<u8>) -> DeckResult<()> {
        let Some(target) = self.active_slide else {
            tracing::debug!("add_image_from_file: no active slide, ignoring");
            return Ok(());
        };
        let decoded = decode_image(bytes).await?;
        self.insert_decoded_image(target, decoded);
        Ok(())
    }

    /// Commit phase of image insertion: place a decoded image on `target`,
    /// scaled down to a 520px max width with aspect preserved (min 20px per
    /// axis). Silently a no-op when `target` no longer exists - a deleted
    /// slide is never resurrected.
    #[allow(clippy::cast_precision_loss)]
    pub fn insert_decoded_image(&mut self, target: SlideId, decoded: DecodedImage) {
        if !self.document.contains_slide(target) {
            tracing::debug!(%target, "insert_decoded_image: slide gone, dropping result");
            return;
        }
        let natural_w = decoded.width.max(1) as f32;
        let natural_h = decoded.height.max(1) as f32;
        let scale = (IMAGE_MAX_WIDTH / natural_w).min(1.0);
        let w = (natural_w * scale).round().max(IMAGE_MIN_SIZE);
        let h = (natural_h * scale).round().max(IMAGE_MIN_SIZE);

        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.elements.push(Element::image(ImageConfig {
                    x: 140.0,
                    y: 160.0,
                    w,
                    h,
                    data: decoded.data,
                    appear_step: 0,
                }));
            }
        });
    }

    /// Merge a partial update into the element with the given id on the
    /// active slide. Unknown ids and missing active slide are no-ops.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) {
        let Some(target) = self.active_slide else {
            tracing::debug!("update_element: no active slide, ignoring");
            return;
        };
        let found = self
            .document
            .slide(target)
            .is_some_and(|s| s.element(id).is_some());
        if !found {
            tracing::debug!(%id, "update_element: element not on active slide, ignoring");
            return;
        }
        self.commit(|st| {
            if let Some(element) = st
                .document
                .slide_mut(target)
                .and_then(|s| s.element_mut(id))
            {
                element.apply_patch(patch);
            }
        });
    }

    /// Remove the selected element from the active slide and clear the
    /// selection. No-op without an active slide or a selection.
    pub fn delete_selected(&mut self) {
        let (Some(target), Some(selected)) = (self.active_slide, self.selected_element) else {
            tracing::debug!("delete_selected: nothing selected, ignoring");
            return;
        };
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.elements.retain(|e| e.id != selected);
            }
            st.selected_element = None;
        });
    }

    // -----------------------------------------------------------------------
    // Background operations
    // -----------------------------------------------------------------------

    /// Set the active slide's background color.
    pub fn set_slide_bg_color(&mut self, color: &str) {
        let Some(target) = self.active_slide else {
            tracing::debug!("set_slide_bg_color: no active slide, ignoring");
            return;
        };
        let color = color.to_string();
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.background.color = color;
            }
        });
    }

    /// Decode image bytes and set them as the background image of the slide
    /// that was active when the call was made. New images default to
    /// [`BackgroundFit::Cover`]. Same in-flight semantics as
    /// [`DeckStore::add_image_from_file`].
    ///
    /// # Errors
    ///
    /// Returns a decode error when the bytes are not a recognizable image;
    /// nothing is committed in that case.
    pub async fn set_slide_bg_image_from_file(&mut self, bytes: Vec<u8>) -> DeckResult<()> {
        let Some(target) = self.active_slide else {
            tracing::debug!("set_slide_bg_image_from_file: no active slide, ignoring");
            return Ok(());
        };
        let decoded = decode_image(bytes).await?;
        self.apply_decoded_background(target, decoded);
        Ok(())
    }

    /// Commit phase of background image assignment. Silently a no-op when
    /// `target` no longer exists.
    pub fn apply_decoded_background(&mut self, target: SlideId, decoded: DecodedImage) {
        if !self.document.contains_slide(target) {
            tracing::debug!(%target, "apply_decoded_background: slide gone, dropping result");
            return;
        }
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.background.image = Some(BackgroundImage {
                    data: decoded.data,
                    natural_width: decoded.width,
                    natural_height: decoded.height,
                    fit: BackgroundFit::Cover,
                });
            }
        });
    }

    /// Change the fit mode of the active slide's background image. No-op
    /// when there is no active slide or no background image.
    pub fn set_slide_bg_image_fit(&mut self, fit: BackgroundFit) {
        let Some(target) = self.active_slide else {
            tracing::debug!("set_slide_bg_image_fit: no active slide, ignoring");
            return;
        };
        let has_image = self
            .document
            .slide(target)
            .is_some_and(|s| s.background.image.is_some());
        if !has_image {
            tracing::debug!("set_slide_bg_image_fit: no background image, ignoring");
            return;
        }
        self.commit(move |st| {
            if let Some(image) = st
                .document
                .slide_mut(target)
                .and_then(|s| s.background.image.as_mut())
            {
                image.fit = fit;
            }
        });
    }

    /// Remove the active slide's background image, keeping the color.
    pub fn clear_slide_bg_image(&mut self) {
        let Some(target) = self.active_slide else {
            tracing::debug!("clear_slide_bg_image: no active slide, ignoring");
            return;
        };
        self.commit(move |st| {
            if let Some(slide) = st.document.slide_mut(target) {
                slide.background.image = None;
            }
        });
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}
