use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 90.0;

fn field(ui: &mut egui::Ui, available_width: f32, label: &str, value: &mut String, password: bool) {
    ui.horizontal(|ui| {
        ui.add_space(((available_width - INPUT_WIDTH - LABEL_WIDTH - 20.0) / 2.0).max(0.0));
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [INPUT_WIDTH, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_LIGHT),
        );
    });
    ui.add_space(8.0);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);
    let width = available_rect.width();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_register_mode { 470.0 } else { 280.0 };
            ui.add_space(((available_rect.height() - total_height) / 2.0).max(0.0));

            ui.label(egui::RichText::new("👛 Walletbox").size(32.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_register_mode { "Create Account" } else { "Welcome Back" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            let page_error = state.snapshot().sign_in_page.error.as_ref().map(ToString::to_string);
            if let Some(error) = state.form_error.clone().or(page_error) {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            field(ui, width, "Username:", &mut state.username_input, false);
            if state.is_register_mode {
                field(ui, width, "Full name:", &mut state.fullname_input, false);
                field(ui, width, "Email:", &mut state.email_input, false);
                field(ui, width, "Birthdate:", &mut state.birthdate_input, false);
            }
            field(ui, width, "Password:", &mut state.password_input, true);
            if state.is_register_mode {
                field(ui, width, "Confirm:", &mut state.confirm_password_input, true);
            }

            ui.add_space(20.0);

            let pending = state.snapshot().sign_in_page.pending;
            ui.horizontal(|ui| {
                let button_width = 120.0;
                ui.add_space(((width - button_width * 2.0 - 10.0) / 2.0).max(0.0));

                let submit = egui::Button::new(
                    egui::RichText::new(if state.is_register_mode { "Register" } else { "Sign in" })
                        .color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled_ui(!pending, |ui| ui.add_sized([button_width, 32.0], submit)).inner.clicked() {
                    if state.is_register_mode {
                        state.handle_register();
                    } else {
                        state.handle_sign_in();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if state.is_register_mode { "Back to Sign in" } else { "Create Account" })
                        .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    state.toggle_auth_mode();
                }
            });

            if pending {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space(((width - 100.0) / 2.0).max(0.0));
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
