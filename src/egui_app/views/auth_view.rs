use eframe::egui;

use crate::egui_app::routes::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Login or signup form, depending on the current route
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let is_signup = state.current_route() == Route::Signup;
    let loading = state.gate.is_loading();

    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if is_signup { 380.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🎓 EduPlatform")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if is_signup { "Create Account" } else { "Welcome Back" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            let input_width = 280.0;
            let label_width = 80.0;
            let indent = (available_rect.width() - input_width - label_width - 20.0).max(0.0) / 2.0;

            if is_signup {
                text_row(ui, indent, label_width, input_width, "Username:", &mut state.user_name_input, false);
            }
            text_row(ui, indent, label_width, input_width, "Email:", &mut state.email_input, false);
            text_row(ui, indent, label_width, input_width, "Password:", &mut state.password_input, true);
            if is_signup {
                text_row(
                    ui,
                    indent,
                    label_width,
                    input_width,
                    "Confirm:",
                    &mut state.confirm_password_input,
                    true,
                );
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                ui.add_space((available_rect.width() - button_width * 2.0 - 10.0).max(0.0) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if is_signup { "Sign Up" } else { "Log In" }).color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);

                if ui.add_enabled(!loading, submit).clicked() {
                    if is_signup {
                        state.handle_signup();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if is_signup { "Back to Login" } else { "Create Account" })
                        .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    state.toggle_auth_mode();
                }
            });

            if !is_signup {
                ui.add_space(10.0);
                if ui
                    .link(egui::RichText::new("Forgot password?").color(colors::TEXT_SECONDARY))
                    .clicked()
                {
                    state.navigate(Route::ForgotPassword);
                }
            }

            if loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}

fn text_row(
    ui: &mut egui::Ui,
    indent: f32,
    label_width: f32,
    input_width: f32,
    label: &str,
    value: &mut String,
    password: bool,
) {
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_LIGHT),
        );
    });
    ui.add_space(8.0);
}
