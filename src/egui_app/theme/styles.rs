//! Theme Styling Functions
//!
//! Helpers that apply the palette consistently across panels.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::notifications::NotificationLevel;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CONTENT_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::SIDEBAR_BG;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::SIDEBAR_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::SIDEBAR_SELECTED;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the sidebar
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::symmetric(8, 12))
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for page content
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CONTENT_BG)
        .inner_margin(egui::Margin::same(24))
}

/// Create a frame for a content card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(20))
}

/// Create a frame for a toast notification
pub fn toast_frame(level: NotificationLevel) -> egui::Frame {
    let accent = match level {
        NotificationLevel::Success => colors::SUCCESS,
        NotificationLevel::Error => colors::ERROR,
    };

    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(2.0, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
