//! Theme Module
//!
//! Color scheme and styling for the EduPlatform client.
//!
//! - Color constants for the navy/slate palette
//! - Frame builders for panels, cards and toasts
//!
//! # Usage
//!
//! ```rust,no_run
//! use eduplatform::egui_app::theme::{colors, styles};
//!
//! fn paint(ctx: &eframe::egui::Context) {
//!     styles::apply_global_theme(ctx);
//!     eframe::egui::CentralPanel::default()
//!         .frame(styles::content_frame())
//!         .show(ctx, |ui| {
//!             ui.colored_label(colors::TEXT_DARK, "Dashboard");
//!         });
//! }
//! ```

pub mod colors;
pub mod styles;
