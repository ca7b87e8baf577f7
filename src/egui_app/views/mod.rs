use eframe::egui;

use crate::egui_app::routes::{Access, Route, PROTECTED_ROUTES};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod page_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🎓 EduPlatform").size(18.0).strong(),
                );

                ui.add_space(16.0);
                let path_edit = ui.add(
                    egui::TextEdit::singleline(&mut state.path_input)
                        .desired_width(220.0)
                        .text_color(colors::TEXT_LIGHT),
                );
                if path_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    let path = state.path_input.clone();
                    state.navigate_to_path(&path);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    let user_label = state
                        .gate
                        .user()
                        .map(|user| format!("{} ({})", user.user_name, user.role));

                    if let Some(label) = user_label {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        ui.colored_label(colors::TEXT_LIGHT, label);
                    }

                    if state.gate.is_loading() {
                        ui.spinner();
                    }
                });
            });
        });
}

/// Sidebar with every protected route; only shown when signed in
pub fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    if !state.gate.is_authenticated() {
        return;
    }

    egui::SidePanel::left("sidebar")
        .frame(styles::sidebar_frame())
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                for route in PROTECTED_ROUTES {
                    let selected = state.current_route() == route;
                    let fill = if selected {
                        colors::SIDEBAR_SELECTED
                    } else {
                        colors::SIDEBAR_BG
                    };

                    let button = egui::Button::new(
                        egui::RichText::new(route.title()).color(colors::TEXT_LIGHT),
                    )
                    .fill(fill);

                    if ui.add_sized([ui.available_width(), 30.0], button).clicked() {
                        state.navigate(route);
                    }
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let route = state.current_route();

    let frame = match route.access() {
        Access::Public => egui::Frame::default().fill(colors::BG_DARK),
        _ => styles::content_frame(),
    };

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| match route {
        Route::Login | Route::Signup => auth_view::render(ui, state),
        Route::ForgotPassword | Route::VerifyAccount => page_view::render_public(ui, state, route),
        Route::NotFound => page_view::render_not_found(ui, state),
        _ => page_view::render_protected(ui, state, route),
    });
}

/// Toasts stacked in the bottom-right corner
pub fn render_notifications(ctx: &egui::Context, state: &AppState) {
    if state.notifications.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            for notification in state.notifications.iter() {
                styles::toast_frame(notification.level).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.colored_label(colors::TEXT_DARK, egui::RichText::new(&notification.title).strong());
                    if !notification.message.is_empty() {
                        ui.colored_label(colors::TEXT_SECONDARY, &notification.message);
                    }
                });
                ui.add_space(6.0);
            }
        });
}
