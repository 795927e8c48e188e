use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub mod auth_view;
pub mod landing_view;
pub mod signout_dialog;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("👛 Walletbox").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    let snapshot = state.snapshot();
                    if snapshot.auth_status.signed_in {
                        let sign_out = ui.add_enabled(
                            !snapshot.sign_out.pending,
                            egui::Button::new("Sign out"),
                        );
                        if let Some(user) = snapshot.user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                        }
                        if sign_out.clicked() {
                            state.sign_out();
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        if state.snapshot().auth_status.signed_in {
            landing_view::render(ui, state);
        } else {
            auth_view::render(ui, state);
        }
    });

    signout_dialog::render(ctx, state);
}
