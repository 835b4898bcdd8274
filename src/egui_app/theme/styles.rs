//! Theme Styling Functions
//!
//! Helper functions for applying the ChemCycle light theme consistently
//! across the UI.

use super::colors;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    // Window and panel styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_LIGHT;

    // Widget styling; the noninteractive bg stroke also draws separators
    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::SEPARATOR);
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::INPUT_BORDER);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::BG_LIGHT;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors::PRIMARY_HOVER);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Links and selection
    style.visuals.hyperlink_color = colors::LINK;
    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the signup card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(25),
        })
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the footer strip
pub fn footer_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::FOOTER_BG)
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Create a frame style for the inline error banner
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 8))
}
