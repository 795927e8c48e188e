//! Theme Module
//!
//! Colour palette and the global egui style for the desktop app.

use eframe::egui::{self, Stroke};

pub mod colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::DIALOG_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.inactive.bg_fill = colors::TOP_BAR_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}
