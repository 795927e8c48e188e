//! Color Constants
//!
//! Warm brown/tan palette used across the desktop views.

use eframe::egui::Color32;

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Window background for dialogs
pub const DIALOG_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Dialog and widget border - Muted brown
pub const BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Hovered widget - Lighter brown
pub const HOVER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Icons - Light brown
pub const ICONS: Color32 = Color32::from_rgb(0xC6, 0xB2, 0x9E);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);
