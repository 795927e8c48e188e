use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default().fill(colors::BG_DARK);

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("👛 Walletbox").size(48.0).strong());
            ui.add_space(10.0);

            ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Welcome!").size(28.0));
            match state.snapshot().user() {
                Some(user) => {
                    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(&user.fullname).size(20.0));
                    ui.colored_label(colors::ICONS, egui::RichText::new(format!("@{}", user.username)).size(18.0));
                }
                None => {
                    ui.spinner();
                }
            }

            if let Some(error) = &state.snapshot().sign_out.errors {
                ui.add_space(20.0);
                ui.label(egui::RichText::new(format!("Sign out failed: {error}")).color(colors::ERROR));
            }
        });
    });
}
