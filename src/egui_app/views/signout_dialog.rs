use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Modal sign-out confirmation
///
/// Shown while the store waits for an answer. The buttons appear once the
/// prompt has registered its question.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.snapshot().sign_out.awaiting_confirmation {
        return;
    }

    egui::Window::new("Sign out")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| match state.prompt.pending_message() {
            Some(message) => {
                ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.add(egui::Button::new("Sign out").fill(colors::ACCENT)).clicked() {
                        state.prompt.respond(true);
                    }
                    if ui.button("Cancel").clicked() {
                        state.prompt.respond(false);
                    }
                });
            }
            None => {
                ui.spinner();
                ctx.request_repaint_after(std::time::Duration::from_millis(50));
            }
        });
}
