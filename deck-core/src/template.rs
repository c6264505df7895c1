//! Deterministic slide templates.
//!
//! Each template is a pure function from `(template, accent color)` to a
//! fully composed [`Slide`] built out of rect/text primitives at fixed
//! coordinates in the 1333x750 editor space. Two invocations with the same
//! inputs produce geometrically identical slides; only the generated ids
//! differ.

use crate::{
    Element, PillConfig, RectConfig, Slide, TextConfig, EDITOR_HEIGHT, EDITOR_WIDTH,
};

/// Identifier for a built-in slide template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Empty white slide.
    Blank,
    /// Title and subtitle.
    Title,
    /// Section title over two content columns.
    TwoColumn,
    /// Desktop app frame with browser chrome, sidebar, and content cards.
    DesktopApp,
    /// Phone mock centered on a dark background.
    MobileFrame,
    /// Analytics dashboard with KPIs, chart, and activity feed.
    Dashboard,
    /// Modal dialog over a dimmed backdrop.
    Modal,
    /// Three-column kanban board.
    Kanban,
    /// Boxes-and-arrows flow diagram.
    Flow,
}

impl TemplateId {
    /// Map a template identifier string to a template.
    ///
    /// Unknown identifiers fall back to [`TemplateId::Blank`] rather than
    /// failing.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id {
            "title" => Self::Title,
            "twoCol" => Self::TwoColumn,
            "desktop-app" => Self::DesktopApp,
            "mobile-frame" => Self::MobileFrame,
            "dashboard" => Self::Dashboard,
            "modal" => Self::Modal,
            "kanban" => Self::Kanban,
            "flow" => Self::Flow,
            _ => Self::Blank,
        }
    }
}

/// Build a slide from a template.
///
/// `accent` is the document theme's accent color; templates use it for
/// highlighted nav items, buttons, and detail strips.
#[must_use]
pub fn build_template(template: TemplateId, accent: &str) -> Slide {
    match template {
        TemplateId::Blank => Slide::new(),
        TemplateId::Title => title_slide(),
        TemplateId::TwoColumn => two_column(),
        TemplateId::DesktopApp => desktop_app(accent),
        TemplateId::MobileFrame => mobile_frame(accent),
        TemplateId::Dashboard => dashboard(accent),
        TemplateId::Modal => modal(accent),
        TemplateId::Kanban => kanban(accent),
        TemplateId::Flow => flow_diagram(accent),
    }
}

fn rect(x: f32, y: f32, w: f32, h: f32, fill: &str, radius: f32) -> Element {
    Element::rect(RectConfig {
        x,
        y,
        w,
        h,
        fill: fill.to_string(),
        radius,
        ..RectConfig::default()
    })
}

#[allow(clippy::too_many_arguments)]
fn stroked_rect(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    fill: &str,
    radius: f32,
    stroke: &str,
    stroke_width: f32,
) -> Element {
    Element::rect(RectConfig {
        x,
        y,
        w,
        h,
        fill: fill.to_string(),
        radius,
        stroke: Some(stroke.to_string()),
        stroke_width,
        ..RectConfig::default()
    })
}

#[allow(clippy::too_many_arguments)]
fn label(x: f32, y: f32, w: f32, h: f32, text: &str, size: f32, color: &str, bold: bool) -> Element {
    Element::text(TextConfig {
        x,
        y,
        w,
        h,
        text: text.to_string(),
        size,
        color: color.to_string(),
        bold,
        ..TextConfig::default()
    })
}

fn pill(x: f32, y: f32, d: f32, fill: &str) -> Element {
    Element::pill(PillConfig {
        x,
        y,
        d,
        fill: fill.to_string(),
        ..PillConfig::default()
    })
}

fn title_slide() -> Slide {
    let mut s = Slide::new();
    s.elements.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#FFFFFF", 0.0));
    s.elements.push(label(120.0, 230.0, 1100.0, 120.0, "Title", 64.0, "#111111", true));
    s.elements.push(label(120.0, 340.0, 1100.0, 60.0, "Subtitle", 28.0, "#444", false));
    s
}

fn two_column() -> Slide {
    let mut s = Slide::new();
    s.elements.push(label(80.0, 60.0, 1170.0, 60.0, "Section Title", 36.0, "#111111", true));
    s.elements.push(rect(80.0, 140.0, 560.0, 520.0, "#EFEFEF", 18.0));
    s.elements.push(rect(690.0, 140.0, 560.0, 520.0, "#EFEFEF", 18.0));
    s.elements.push(label(110.0, 170.0, 500.0, 40.0, "Left", 22.0, "#333", true));
    s.elements.push(label(720.0, 170.0, 500.0, 40.0, "Right", 22.0, "#333", true));
    s
}

#[allow(clippy::cast_precision_loss)]
fn desktop_app(accent: &str) -> Slide {
    let mut els = Vec::new();

    els.push(stroked_rect(
        40.0,
        40.0,
        EDITOR_WIDTH - 80.0,
        EDITOR_HEIGHT - 80.0,
        "#FFFFFF",
        18.0,
        "#D9D9E3",
        1.0,
    ));

    // Browser chrome
    els.push(stroked_rect(60.0, 60.0, EDITOR_WIDTH - 120.0, 54.0, "#F2F2F7", 14.0, "#D9D9E3", 1.0));
    els.push(pill(80.0, 78.0, 12.0, "#FF5F57"));
    els.push(pill(98.0, 78.0, 12.0, "#FEBC2E"));
    els.push(pill(116.0, 78.0, 12.0, "#28C840"));
    els.push(stroked_rect(160.0, 72.0, 520.0, 30.0, "#FFFFFF", 10.0, "#D9D9E3", 1.0));
    els.push(label(175.0, 78.0, 490.0, 20.0, "https://app.example.com", 14.0, "#666", false));

    // Left sidebar
    els.push(stroked_rect(60.0, 120.0, 240.0, EDITOR_HEIGHT - 180.0, "#FAFAFC", 14.0, "#E3E3EE", 1.0));
    els.push(label(80.0, 145.0, 200.0, 28.0, "App Name", 18.0, "#111", true));

    let nav_y = 190.0;
    for (i, item) in ["Dashboard", "Projects", "Inbox", "Settings"].iter().enumerate() {
        let y = nav_y + i as f32 * 44.0;
        if i == 0 {
            els.push(rect(75.0, y, 210.0, 34.0, accent, 10.0));
            els.push(label(92.0, y + 7.0, 180.0, 20.0, item, 14.0, "#FFFFFF", true));
        } else {
            els.push(label(92.0, y + 7.0, 180.0, 20.0, item, 14.0, "#444", false));
        }
    }

    // Main header toolbar
    els.push(stroked_rect(320.0, 120.0, EDITOR_WIDTH - 380.0, 64.0, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
    els.push(label(340.0, 140.0, 500.0, 28.0, "Page Title", 22.0, "#111", true));
    els.push(rect(EDITOR_WIDTH - 260.0, 136.0, 160.0, 34.0, accent, 10.0));
    els.push(label(EDITOR_WIDTH - 245.0, 144.0, 130.0, 20.0, "Primary action", 14.0, "#FFF", true));

    // Content cards
    let card_y = 200.0;
    let card_w = (EDITOR_WIDTH - 380.0 - 40.0) / 2.0;
    let card_h = 170.0;
    let left_x = 320.0;
    let right_x = 320.0 + card_w + 20.0;

    for row in 0..2 {
        let y = card_y + row as f32 * (card_h + 20.0);
        for x in [left_x, right_x] {
            els.push(stroked_rect(x, y, card_w, card_h, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
            els.push(label(x + 16.0, y + 16.0, card_w - 32.0, 24.0, "Card title", 16.0, "#111", true));
            els.push(rect(x + 16.0, y + 52.0, card_w - 32.0, 10.0, "#EFEFF6", 6.0));
            els.push(rect(x + 16.0, y + 70.0, card_w - 90.0, 10.0, "#EFEFF6", 6.0));
        }
    }

    let mut s = Slide::new();
    s.background.color = "#FFFFFF".to_string();
    s.elements = els;
    s
}

#[allow(clippy::cast_precision_loss)]
fn mobile_frame(accent: &str) -> Slide {
    let mut els = Vec::new();

    els.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#0B0B0F", 0.0));

    let dev_w = 420.0;
    let dev_h = 700.0;
    let dev_x = ((EDITOR_WIDTH - dev_w) / 2.0).round();
    let dev_y = ((EDITOR_HEIGHT - dev_h) / 2.0).round();
    els.push(stroked_rect(dev_x, dev_y, dev_w, dev_h, "#111217", 48.0, "#2A2B35", 2.0));

    let pad = 18.0;
    let screen_x = dev_x + pad;
    let screen_y = dev_y + pad;
    let screen_w = dev_w - pad * 2.0;
    let screen_h = dev_h - pad * 2.0;
    els.push(rect(screen_x, screen_y, screen_w, screen_h, "#FFFFFF", 34.0));

    // Status bar
    els.push(rect(screen_x + 18.0, screen_y + 14.0, screen_w - 36.0, 20.0, "#FFFFFF", 0.0));
    els.push(label(screen_x + 18.0, screen_y + 14.0, 100.0, 20.0, "9:41", 14.0, "#111", true));
    els.push(rect(screen_x + screen_w - 84.0, screen_y + 18.0, 60.0, 12.0, "#EDEDF5", 6.0));

    // App header
    els.push(rect(screen_x, screen_y + 40.0, screen_w, 64.0, "#FAFAFC", 0.0));
    els.push(label(screen_x + 18.0, screen_y + 58.0, screen_w - 36.0, 24.0, "Mobile Screen", 18.0, "#111", true));

    // List cards
    let c_top = screen_y + 120.0;
    for i in 0..3 {
        let y = c_top + i as f32 * 118.0;
        els.push(stroked_rect(screen_x + 18.0, y, screen_w - 36.0, 96.0, "#FFFFFF", 16.0, "#E3E3EE", 1.0));
        els.push(rect(screen_x + 34.0, y + 18.0, 54.0, 54.0, "#EFEFF6", 14.0));
        els.push(label(screen_x + 100.0, y + 18.0, screen_w - 150.0, 20.0, "List item title", 14.0, "#111", true));
        els.push(rect(screen_x + 100.0, y + 44.0, screen_w - 180.0, 10.0, "#EFEFF6", 6.0));
        els.push(rect(screen_x + 100.0, y + 62.0, screen_w - 220.0, 10.0, "#EFEFF6", 6.0));
    }

    // Tab bar
    let tab_h = 74.0;
    els.push(rect(screen_x, screen_y + screen_h - tab_h, screen_w, tab_h, "#FAFAFC", 0.0));

    for (i, tab) in ["Home", "Search", "Profile"].iter().enumerate() {
        let x = screen_x + 18.0 + i as f32 * ((screen_w - 36.0) / 3.0);
        let active = i == 0;
        let dot_color = if active { accent } else { "#C9CAD6" };
        let text_color = if active { accent } else { "#666" };
        els.push(pill(x + 18.0, screen_y + screen_h - tab_h + 16.0, 10.0, dot_color));
        els.push(label(
            x,
            screen_y + screen_h - tab_h + 30.0,
            (screen_w - 36.0) / 3.0,
            20.0,
            tab,
            12.0,
            text_color,
            active,
        ));
    }

    let mut s = Slide::new();
    s.background.color = "#0B0B0F".to_string();
    s.elements = els;
    s
}

#[allow(clippy::cast_precision_loss)]
fn dashboard(accent: &str) -> Slide {
    let mut els = Vec::new();
    els.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#FFFFFF", 0.0));

    // Sidebar
    els.push(rect(40.0, 40.0, 240.0, EDITOR_HEIGHT - 80.0, "#0F0F15", 18.0));
    els.push(label(60.0, 70.0, 200.0, 28.0, "Dashboard", 18.0, "#FFFFFF", true));

    for (i, item) in ["Overview", "Reports", "Users", "Billing"].iter().enumerate() {
        let y = 120.0 + i as f32 * 44.0;
        if i == 0 {
            els.push(rect(58.0, y, 204.0, 34.0, accent, 10.0));
            els.push(label(74.0, y + 7.0, 170.0, 20.0, item, 14.0, "#FFFFFF", true));
        } else {
            els.push(label(74.0, y + 7.0, 170.0, 20.0, item, 14.0, "#CFCFE2", false));
        }
    }

    // Header
    els.push(stroked_rect(300.0, 40.0, EDITOR_WIDTH - 340.0, 64.0, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
    els.push(label(320.0, 60.0, 400.0, 24.0, "Overview", 20.0, "#111", true));
    els.push(stroked_rect(EDITOR_WIDTH - 340.0, 58.0, 260.0, 30.0, "#FAFAFC", 10.0, "#E3E3EE", 1.0));
    els.push(label(EDITOR_WIDTH - 325.0, 64.0, 230.0, 20.0, "Search…", 14.0, "#888", false));

    // KPI cards
    let kpi_y = 120.0;
    let kpi_w = (EDITOR_WIDTH - 340.0 - 40.0) / 3.0;
    for i in 0..3 {
        let x = 300.0 + i as f32 * (kpi_w + 20.0);
        els.push(stroked_rect(x, kpi_y, kpi_w, 110.0, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
        els.push(label(x + 16.0, kpi_y + 16.0, kpi_w - 32.0, 18.0, "Metric", 12.0, "#666", true));
        els.push(label(x + 16.0, kpi_y + 40.0, kpi_w - 32.0, 40.0, "123", 34.0, "#111", true));
        els.push(rect(x + 16.0, kpi_y + 86.0, 70.0, 10.0, accent, 6.0));
    }

    // Chart card
    let chart_y = 250.0;
    let left_w = ((EDITOR_WIDTH - 340.0) * 0.62).round();
    let right_w = EDITOR_WIDTH - 340.0 - left_w - 20.0;

    els.push(stroked_rect(300.0, chart_y, left_w, 300.0, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
    els.push(label(316.0, chart_y + 16.0, left_w - 32.0, 20.0, "Chart", 14.0, "#111", true));
    for i in 0..8 {
        let stagger = (i % 3) as f32 * 24.0;
        els.push(rect(
            330.0 + i as f32 * 44.0,
            chart_y + 70.0 + stagger,
            22.0,
            170.0 - stagger,
            "#EFEFF6",
            6.0,
        ));
    }
    els.push(rect(330.0, chart_y + 260.0, left_w - 60.0, 10.0, accent, 6.0));

    // Activity card
    let rx = 300.0 + left_w + 20.0;
    els.push(stroked_rect(rx, chart_y, right_w, 300.0, "#FFFFFF", 14.0, "#E3E3EE", 1.0));
    els.push(label(rx + 16.0, chart_y + 16.0, right_w - 32.0, 20.0, "Activity", 14.0, "#111", true));
    for i in 0..6 {
        let y = chart_y + 56.0 + i as f32 * 38.0;
        let dot = if i == 0 { accent } else { "#C9CAD6" };
        els.push(rect(rx + 16.0, y, 10.0, 10.0, dot, 6.0));
        els.push(rect(rx + 34.0, y, right_w - 60.0, 10.0, "#EFEFF6", 6.0));
    }

    let mut s = Slide::new();
    s.background.color = "#FFFFFF".to_string();
    s.elements = els;
    s
}

fn modal(accent: &str) -> Slide {
    let mut s = Slide::new();
    s.background.color = "#0b0b12".to_string();

    s.elements.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#0b0b12", 0.0));
    s.elements.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "rgba(0,0,0,0.55)", 0.0));
    s.elements.push(stroked_rect(320.0, 170.0, 700.0, 420.0, "#ffffff", 18.0, "#E6E6E6", 2.0));
    s.elements.push(label(360.0, 210.0, 620.0, 50.0, "Modal Title", 32.0, "#111111", true));
    s.elements.push(label(
        360.0,
        270.0,
        620.0,
        140.0,
        "Modal body text goes here.\nYou can add more content and buttons.",
        20.0,
        "#333",
        false,
    ));
    s.elements.push(rect(360.0, 460.0, 160.0, 56.0, accent, 14.0));
    s.elements.push(label(360.0, 470.0, 160.0, 40.0, "Confirm", 20.0, "#fff", true));
    s.elements.push(rect(540.0, 460.0, 140.0, 56.0, "#EFEFF5", 14.0));
    s.elements.push(label(540.0, 470.0, 140.0, 40.0, "Cancel", 20.0, "#222", true));
    s
}

#[allow(clippy::cast_precision_loss)]
fn kanban(accent: &str) -> Slide {
    let mut s = Slide::new();
    s.background.color = "#0b0b12".to_string();

    s.elements.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#0b0b12", 0.0));
    s.elements.push(label(70.0, 40.0, 1200.0, 50.0, "Kanban Board", 40.0, "#fff", true));

    let col_w = 380.0;
    let gap = 36.0;
    let x0 = 70.0;
    let y0 = 120.0;

    for (i, title) in ["To Do", "Doing", "Done"].iter().enumerate() {
        let x = x0 + i as f32 * (col_w + gap);
        s.elements.push(stroked_rect(x, y0, col_w, 560.0, "#151524", 18.0, "#2b2b44", 2.0));
        s.elements.push(label(x + 18.0, y0 + 16.0, col_w - 36.0, 36.0, title, 22.0, "#fff", true));
        s.elements.push(rect(x + 18.0, y0 + 70.0, col_w - 36.0, 110.0, "#ffffff", 14.0));
        s.elements.push(label(x + 32.0, y0 + 88.0, col_w - 64.0, 80.0, "Card 1", 20.0, "#111", true));
        s.elements.push(rect(x + 18.0, y0 + 200.0, col_w - 36.0, 110.0, "#ffffff", 14.0));
        s.elements.push(label(x + 32.0, y0 + 218.0, col_w - 64.0, 80.0, "Card 2", 20.0, "#111", true));
    }

    // accent detail under the heading
    s.elements.push(rect(70.0, 92.0, 180.0, 6.0, accent, 6.0));
    s
}

fn flow_diagram(accent: &str) -> Slide {
    let mut s = Slide::new();
    s.background.color = "#FFFFFF".to_string();

    s.elements.push(rect(0.0, 0.0, EDITOR_WIDTH, EDITOR_HEIGHT, "#FFFFFF", 0.0));

    let boxed = |x: f32, y: f32, text: &str, s: &mut Slide| {
        s.elements.push(stroked_rect(x, y, 280.0, 90.0, "#EFEFF5", 18.0, "#D6D6E6", 2.0));
        s.elements.push(label(x + 20.0, y + 22.0, 240.0, 50.0, text, 24.0, "#111", true));
    };
    let arrow = |x: f32, y: f32, w: f32, h: f32, s: &mut Slide| {
        s.elements.push(rect(x, y, w, h, "#111", 6.0));
    };

    boxed(120.0, 140.0, "Start", &mut s);
    boxed(520.0, 140.0, "Process", &mut s);
    boxed(920.0, 140.0, "Decision", &mut s);

    arrow(410.0, 182.0, 90.0, 10.0, &mut s);
    arrow(810.0, 182.0, 90.0, 10.0, &mut s);

    boxed(520.0, 340.0, "Outcome A", &mut s);
    boxed(920.0, 340.0, "Outcome B", &mut s);

    arrow(1060.0, 230.0, 10.0, 90.0, &mut s);
    arrow(760.0, 230.0, 10.0, 90.0, &mut s);

    // accent underline for the start box
    s.elements.push(rect(120.0, 110.0, 220.0, 6.0, accent, 6.0));
    s
}
