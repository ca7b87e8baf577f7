//! Color Constants
//!
//! Navy and slate palette for the EduPlatform client.

use eframe::egui::Color32;

/// Sidebar background - Deep navy
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x14, 0x21, 0x3D);

/// Sidebar selected item - Medium navy
pub const SIDEBAR_SELECTED: Color32 = Color32::from_rgb(0x24, 0x3B, 0x6B);

/// Sidebar hovered item
pub const SIDEBAR_HOVER: Color32 = Color32::from_rgb(0x1D, 0x2E, 0x52);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0F, 0x1A, 0x30);

/// Main content background - Off-white
pub const CONTENT_BG: Color32 = Color32::from_rgb(0xF5, 0xF7, 0xFA);

/// Card background on content areas
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD9, 0xDE, 0xE7);

/// Auth screen background
pub const BG_DARK: Color32 = Color32::from_rgb(0x14, 0x21, 0x3D);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x1D, 0x2E, 0x52);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEE, 0xF2, 0xF8);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x14, 0x21, 0x3D);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x97, 0xAD);

/// Accent color for buttons and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x2F, 0x6F, 0xEB);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
