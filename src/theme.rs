//! Centralized theme constants for Spotter
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x05, 0x08, 0x0d); // near-black app background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x12, 0x12, 0x12); // cards, tiles
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x22); // popups, search field
pub const BG_MEDIA: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x0e); // behind carousel pages
pub const BG_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 0x33); // info panel over media
pub const BG_NAVBAR: Color32 = Color32::BLACK;

// =============================================================================
// COLORS - Accent (Orange)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0x98, 0x00); // orange-500
pub const ACCENT_MUTED: Color32 = Color32::from_rgba_premultiplied(0x80, 0x4c, 0x00, 0x80); // orange @ 50%

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9e, 0x9e, 0x9e); // gray
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a);
pub const TEXT_COST: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50); // green price tag

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x44, 0x44, 0x44); // dark gray divider

// =============================================================================
// COLORS - Sliders
// =============================================================================
pub const SLIDER_HEAD: Color32 = ACCENT;
pub const SLIDER_ACTIVE: Color32 = ACCENT;
pub const SLIDER_INACTIVE: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3); // light gray

// =============================================================================
// COLORS - Toggles & buttons
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = ACCENT;
pub const TOGGLE_UNSELECTED: Color32 = BG_SURFACE;
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xe5, 0x39, 0x35); // red-600
pub const CHIP_BG: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3);
pub const CHIP_TEXT: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 16.0;
pub const FONT_SMALL: f32 = 12.0;
pub const FONT_CAPTION: f32 = 10.0;
pub const FONT_ICON: f32 = 24.0;
pub const FONT_ICON_LARGE: f32 = 36.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const NAVBAR_HEIGHT: f32 = 56.0;
pub const SCREEN_PADDING: f32 = 32.0;
pub const DETAILS_MEDIA_HEIGHT: f32 = 300.0;
pub const ACTIVITY_TILE: f32 = 64.0;
pub const AVATAR_SIZE: f32 = 100.0;
pub const RATING_BADGE: f32 = 48.0;

// =============================================================================
// DIMENSIONS - Sliders
// =============================================================================
pub const SLIDER_HEIGHT: f32 = 28.0;
pub const SLIDER_HANDLE_RADIUS: f32 = 10.0;
pub const SLIDER_RAIL_HEIGHT: f32 = 4.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 12.0;
pub const RADIUS_CARD: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_ELEVATED,
        faint_bg_color: BG_SURFACE,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_MUTED,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2a, 0x2a, 0x30),
                weak_bg_fill: Color32::from_rgb(0x2a, 0x2a, 0x30),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x33, 0x33, 0x3a),
                weak_bg_fill: Color32::from_rgb(0x33, 0x33, 0x3a),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(12),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 4.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn screen_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::symmetric(SCREEN_PADDING as i8, SPACING_XL as i8))
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SURFACE)
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn navbar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_NAVBAR)
        .inner_margin(egui::Margin::symmetric(0, 4))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Filled orange button for primary actions (Apply, Leave a Review)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.into())
            .color(TEXT_PRIMARY)
            .strong(),
    )
    .fill(ACCENT)
    .corner_radius(RADIUS_LARGE)
}

// =============================================================================
// HELPER - Pressed/hovered feedback for custom-painted buttons
// =============================================================================

/// Returns the fill and rect to paint for a custom button in its current
/// interaction state
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
