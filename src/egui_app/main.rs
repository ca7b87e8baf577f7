/**
 * EduPlatform Desktop Client - Main Entry Point
 *
 * Implements eframe::App on top of `AppState`. Each frame settles any
 * finished login/signup call before drawing.
 */
use eframe::egui;
use eduplatform::egui_app::{theme::styles, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "EduPlatform",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(EduApp::default()))
        }),
    )
}

/// Main application state
struct EduApp {
    state: AppState,
}

impl Default for EduApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for EduApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx, &mut self.state);
        views::render_sidebar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_notifications(ctx, &self.state);

        if self.state.gate.is_loading() || !self.state.notifications.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
