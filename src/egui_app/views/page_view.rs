use eframe::egui;

use crate::egui_app::routes::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Placeholder page for a protected route
pub fn render_protected(ui: &mut egui::Ui, state: &mut AppState, route: Route) {
    ui.heading(egui::RichText::new(route.title()).color(colors::TEXT_DARK).size(26.0));
    ui.add_space(12.0);

    if route == Route::Dashboard {
        if let Some(user) = state.gate.user() {
            ui.colored_label(
                colors::TEXT_DARK,
                format!("Welcome back, {}!", user.user_name),
            );
            ui.add_space(12.0);
        }
    }

    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.colored_label(colors::TEXT_SECONDARY, route.description());
        if route != Route::Dashboard {
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_SECONDARY, "This page is coming soon.");
        }
    });
}

/// Forgot-password and verify-account pages
pub fn render_public(ui: &mut egui::Ui, state: &mut AppState, route: Route) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(
            egui::RichText::new(route.title())
                .size(26.0)
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(16.0);

        let text = match route {
            Route::VerifyAccount => "Check your inbox for a verification link.",
            _ => "Password recovery is not available yet. Contact your administrator.",
        };
        ui.colored_label(colors::TEXT_SECONDARY, text);
        ui.add_space(20.0);

        if ui.button("Back to Login").clicked() {
            state.navigate(Route::Login);
        }
    });
}

pub fn render_not_found(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading(egui::RichText::new("404").size(48.0).color(colors::TEXT_DARK));
        ui.colored_label(colors::TEXT_SECONDARY, Route::NotFound.description());
        ui.add_space(20.0);

        if ui.button("Go Home").clicked() {
            state.navigate(Route::Root);
        }
    });
}
