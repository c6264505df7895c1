//! The export pipeline: document in, flattened output slides out.

use deck_core::{
    BackgroundFit, BackgroundImage, Document, Element, ElementKind, Slide, PAGE_HEIGHT, PAGE_WIDTH,
    PX_PER_UNIT,
};

use crate::output::{Frame, ImagePlacement, LineSpec, OutputSlide, Primitive};

/// Assumed aspect ratio when a background image's natural size is unknown.
const FALLBACK_ASPECT: f32 = 16.0 / 9.0;

/// Flatten a document into its ordered output-slide sequence.
///
/// Each source slide expands into `max(appear_step) + 1` output slides;
/// step `s` contains the elements with `appear_step <= s` in their original
/// z-order. Steps are computed per source slide and never carry across
/// slide boundaries. Geometry is converted from editor pixels to page units
/// with the fixed uniform scale.
#[must_use]
pub fn export_document(document: &Document) -> Vec<OutputSlide> {
    document.slides.iter().flat_map(expand_slide).collect()
}

fn expand_slide(slide: &Slide) -> Vec<OutputSlide> {
    let max_step = slide
        .elements
        .iter()
        .map(|e| e.appear_step)
        .max()
        .unwrap_or(0);

    (0..=max_step)
        .map(|step| OutputSlide {
            background_color: slide.background.color.clone(),
            background_image: slide.background.image.as_ref().map(place_background),
            primitives: slide
                .elements
                .iter()
                .filter(|e| e.appear_step <= step)
                .map(to_primitive)
                .collect(),
        })
        .collect()
}

fn px_to_units(v: f32) -> f32 {
    v / PX_PER_UNIT
}

/// Resolve a background image to a centered page placement.
///
/// `contain` scales the image to fit entirely inside the page (possible
/// letterboxing); `cover` picks the inverse branch so the image fully covers
/// the page (possible overflow, cropped by the consumer).
#[allow(clippy::cast_precision_loss)]
fn place_background(image: &BackgroundImage) -> ImagePlacement {
    let aspect = if image.natural_width > 0 && image.natural_height > 0 {
        image.natural_width as f32 / image.natural_height as f32
    } else {
        FALLBACK_ASPECT
    };
    let page_aspect = PAGE_WIDTH / PAGE_HEIGHT;

    let (w, h) = match image.fit {
        BackgroundFit::Contain => {
            if aspect >= page_aspect {
                (PAGE_WIDTH, PAGE_WIDTH / aspect)
            } else {
                (PAGE_HEIGHT * aspect, PAGE_HEIGHT)
            }
        }
        BackgroundFit::Cover => {
            if aspect >= page_aspect {
                (PAGE_HEIGHT * aspect, PAGE_HEIGHT)
            } else {
                (PAGE_WIDTH, PAGE_WIDTH / aspect)
            }
        }
    };

    ImagePlacement {
        data: image.data.clone(),
        x: (PAGE_WIDTH - w) / 2.0,
        y: (PAGE_HEIGHT - h) / 2.0,
        w,
        h,
    }
}

fn to_primitive(element: &Element) -> Primitive {
    let frame = Frame {
        x: px_to_units(element.x),
        y: px_to_units(element.y),
        w: px_to_units(element.w),
        h: px_to_units(element.h),
    };
    let rotation = element.rotation;

    match &element.kind {
        ElementKind::Rect { style } => {
            // Stroke only when a color is set; otherwise a zero-width line
            // in the fill color, so consumers that require a line spec never
            // draw a visible border.
            let line = style.stroke.as_ref().map_or_else(
                || LineSpec {
                    color: style.fill.clone(),
                    width: 0.0,
                },
                |stroke| LineSpec {
                    color: stroke.clone(),
                    width: style.stroke_width,
                },
            );
            if style.radius > 0.0 {
                Primitive::RoundedRect {
                    frame,
                    rotation,
                    fill: style.fill.clone(),
                    line,
                    radius: px_to_units(style.radius),
                }
            } else {
                Primitive::Rect {
                    frame,
                    rotation,
                    fill: style.fill.clone(),
                    line,
                }
            }
        }

        ElementKind::Text { text, style } => Primitive::Text {
            frame,
            rotation,
            text: text.clone(),
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            color: style.color.clone(),
            bold: style.bold,
        },

        ElementKind::Image { data } => Primitive::Image {
            frame,
            rotation,
            data: data.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Background, RectConfig, TextConfig};

    fn slide_with(elements: Vec<Element>) -> Slide {
        let mut slide = Slide::new();
        slide.elements = elements;
        slide
    }

    fn document_with(slides: Vec<Slide>) -> Document {
        let mut document = Document::new();
        document.slides = slides;
        document
    }

    fn rect_at_step(step: u32) -> Element {
        Element::rect(RectConfig {
            x: 100.0,
            y: 100.0,
            w: 200.0,
            h: 100.0,
            appear_step: step,
            ..RectConfig::default()
        })
    }

    #[test]
    fn test_empty_slide_yields_one_output_slide() {
        let doc = document_with(vec![Slide::new()]);
        let out = export_document(&doc);
        assert_eq!(out.len(), 1);
        assert!(out[0].primitives.is_empty());
        assert_eq!(out[0].background_color, "#FFFFFF");
        assert!(out[0].background_image.is_none());
    }

    #[test]
    fn test_appear_steps_expand_per_slide() {
        let doc = document_with(vec![slide_with(vec![
            rect_at_step(0),
            rect_at_step(0),
            rect_at_step(2),
        ])]);
        let out = export_document(&doc);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].primitives.len(), 2);
        assert_eq!(out[1].primitives.len(), 2);
        assert_eq!(out[2].primitives.len(), 3);
    }

    #[test]
    fn test_steps_do_not_carry_across_slides() {
        let doc = document_with(vec![
            slide_with(vec![rect_at_step(3)]),
            slide_with(vec![rect_at_step(0)]),
        ]);
        let out = export_document(&doc);
        // 4 step slides for the first source slide, 1 for the second.
        assert_eq!(out.len(), 5);
        assert_eq!(out[4].primitives.len(), 1);
    }

    #[test]
    fn test_z_order_is_preserved() {
        let mut text = Element::text(TextConfig {
            text: "on top".to_string(),
            ..TextConfig::default()
        });
        text.appear_step = 0;
        let doc = document_with(vec![slide_with(vec![rect_at_step(0), text])]);
        let out = export_document(&doc);
        assert!(matches!(out[0].primitives[0], Primitive::RoundedRect { .. } | Primitive::Rect { .. }));
        assert!(matches!(out[0].primitives[1], Primitive::Text { .. }));
    }

    #[test]
    fn test_unit_conversion_round_trip() {
        let doc = document_with(vec![slide_with(vec![Element::rect(RectConfig {
            x: 120.0,
            y: 230.0,
            w: 1100.0,
            h: 120.0,
            ..RectConfig::default()
        })])]);
        let out = export_document(&doc);
        let Primitive::Rect { frame, .. } = &out[0].primitives[0] else {
            panic!("expected rect");
        };
        assert!((frame.x * PX_PER_UNIT - 120.0).abs() < 1e-2);
        assert!((frame.y * PX_PER_UNIT - 230.0).abs() < 1e-2);
        assert!((frame.w * PX_PER_UNIT - 1100.0).abs() < 1e-2);
        assert!((frame.h * PX_PER_UNIT - 120.0).abs() < 1e-2);
    }

    #[test]
    fn test_radius_selects_rounded_rect() {
        let rounded = Element::rect(RectConfig {
            radius: 18.0,
            ..RectConfig::default()
        });
        let plain = Element::rect(RectConfig::default());
        let doc = document_with(vec![slide_with(vec![rounded, plain])]);
        let out = export_document(&doc);
        assert!(matches!(out[0].primitives[0], Primitive::RoundedRect { .. }));
        assert!(matches!(out[0].primitives[1], Primitive::Rect { .. }));
    }

    #[test]
    fn test_borderless_rect_gets_zero_width_fill_colored_line() {
        let doc = document_with(vec![slide_with(vec![Element::rect(RectConfig {
            fill: "#ABCDEF".to_string(),
            ..RectConfig::default()
        })])]);
        let out = export_document(&doc);
        let Primitive::Rect { line, .. } = &out[0].primitives[0] else {
            panic!("expected rect");
        };
        assert_eq!(line.color, "#ABCDEF");
        assert!(line.width.abs() < f32::EPSILON);
    }

    #[test]
    fn test_stroked_rect_keeps_stroke_spec() {
        let doc = document_with(vec![slide_with(vec![Element::rect(RectConfig {
            stroke: Some("#333333".to_string()),
            stroke_width: 2.0,
            ..RectConfig::default()
        })])]);
        let out = export_document(&doc);
        let Primitive::Rect { line, .. } = &out[0].primitives[0] else {
            panic!("expected rect");
        };
        assert_eq!(line.color, "#333333");
        assert!((line.width - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_styling_passes_through() {
        let mut element = Element::text(TextConfig {
            text: "Hello".to_string(),
            size: 32.0,
            bold: true,
            color: "#222222".to_string(),
            ..TextConfig::default()
        });
        element.rotation = 15.0;
        let doc = document_with(vec![slide_with(vec![element])]);
        let out = export_document(&doc);
        let Primitive::Text {
            rotation,
            text,
            font_family,
            font_size,
            color,
            bold,
            ..
        } = &out[0].primitives[0]
        else {
            panic!("expected text");
        };
        assert_eq!(text, "Hello");
        assert_eq!(font_family, "Calibri");
        // Font size stays in points, rotation in degrees.
        assert!((font_size - 32.0).abs() < f32::EPSILON);
        assert!((rotation - 15.0).abs() < f32::EPSILON);
        assert_eq!(color, "#222222");
        assert!(*bold);
    }

    fn bg_image(natural_width: u32, natural_height: u32, fit: BackgroundFit) -> BackgroundImage {
        BackgroundImage {
            data: "data:image/png;base64,AAAA".to_string(),
            natural_width,
            natural_height,
            fit,
        }
    }

    #[test]
    fn test_cover_wide_image_overflows_horizontally() {
        let mut slide = Slide::new();
        // Natural 200x100: aspect 2.0, wider than the page's ~1.778.
        slide.background.image = Some(bg_image(200, 100, BackgroundFit::Cover));
        let doc = document_with(vec![slide]);
        let out = export_document(&doc);

        let placement = out[0].background_image.as_ref().expect("placement");
        assert!((placement.h - PAGE_HEIGHT).abs() < 1e-4);
        assert!((placement.w - PAGE_HEIGHT * 2.0).abs() < 1e-4);
        // Centered: the overflow pushes x negative.
        assert!(placement.x < 0.0);
        assert!((placement.x - (PAGE_WIDTH - placement.w) / 2.0).abs() < 1e-4);
        assert!(placement.y.abs() < 1e-4);
    }

    #[test]
    fn test_contain_wide_image_letterboxes_vertically() {
        let mut slide = Slide::new();
        slide.background.image = Some(bg_image(200, 100, BackgroundFit::Contain));
        let doc = document_with(vec![slide]);
        let out = export_document(&doc);

        let placement = out[0].background_image.as_ref().expect("placement");
        assert!((placement.w - PAGE_WIDTH).abs() < 1e-4);
        assert!((placement.h - PAGE_WIDTH / 2.0).abs() < 1e-4);
        assert!(placement.x.abs() < 1e-4);
        assert!(placement.y > 0.0);
    }

    #[test]
    fn test_tall_image_branches_invert() {
        // Natural 100x200: aspect 0.5, narrower than the page.
        let mut cover = Slide::new();
        cover.background.image = Some(bg_image(100, 200, BackgroundFit::Cover));
        let mut contain = Slide::new();
        contain.background.image = Some(bg_image(100, 200, BackgroundFit::Contain));
        let out = export_document(&document_with(vec![cover, contain]));

        let cover = out[0].background_image.as_ref().expect("cover");
        assert!((cover.w - PAGE_WIDTH).abs() < 1e-4);
        assert!(cover.y < 0.0);

        let contain = out[1].background_image.as_ref().expect("contain");
        assert!((contain.h - PAGE_HEIGHT).abs() < 1e-4);
        assert!(contain.x > 0.0);
    }

    #[test]
    fn test_unknown_natural_size_assumes_sixteen_nine() {
        let mut slide = Slide::new();
        slide.background.image = Some(bg_image(0, 0, BackgroundFit::Contain));
        let doc = document_with(vec![slide]);
        let out = export_document(&doc);

        let placement = out[0].background_image.as_ref().expect("placement");
        assert!((placement.w - PAGE_WIDTH).abs() < 1e-4);
        assert!((placement.h - PAGE_WIDTH / (16.0 / 9.0)).abs() < 1e-4);
    }

    #[test]
    fn test_background_repeats_on_every_step_slide() {
        let mut slide = Slide::new();
        slide.background = Background {
            color: "#101018".to_string(),
            image: Some(bg_image(200, 100, BackgroundFit::Cover)),
        };
        slide.elements = vec![rect_at_step(0), rect_at_step(1)];
        let out = export_document(&document_with(vec![slide]));
        assert_eq!(out.len(), 2);
        for step in &out {
            assert_eq!(step.background_color, "#101018");
            assert!(step.background_image.is_some());
        }
    }

    #[test]
    fn test_export_is_a_pure_read() {
        let mut document = Document::new();
        document.slides[0].elements.push(rect_at_step(1));
        let before = document.clone();

        let first = export_document(&document);
        let second = export_document(&document);
        assert_eq!(first, second);
        assert_eq!(document, before);
    }

    #[test]
    fn test_output_slides_serialize_for_the_file_writer() {
        let mut slide = Slide::new();
        slide.background.image = Some(bg_image(200, 100, BackgroundFit::Cover));
        slide.elements = vec![rect_at_step(0)];
        let out = export_document(&document_with(vec![slide]));

        let json = serde_json::to_string(&out).expect("serialize");
        let parsed: Vec<OutputSlide> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, out);
    }
}
