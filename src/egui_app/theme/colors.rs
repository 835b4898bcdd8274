//! Color Constants for the ChemCycle Theme
//!
//! Light green/blue palette lifted from the ChemCycle web application's
//! styling: green for primary actions, blue accents, soft mint background.

use eframe::egui::Color32;

/// Main window background - Soft mint
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xF7, 0xF4);

/// Card background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Light gray
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Top bar background - Deep green
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x65, 0x34);

/// Footer background - Deep green
pub const FOOTER_BG: Color32 = Color32::from_rgb(0x16, 0x65, 0x34);

/// Primary action - Green
pub const PRIMARY: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Primary action hover - Darker green
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Primary text on light backgrounds
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Disabled / placeholder text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Error text - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Error banner fill - Pale red
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFE, 0xF2, 0xF2);

/// Error banner border
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0xFE, 0xCA, 0xCA);

/// Met password requirement - Green
pub const REQUIREMENT_MET: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Unmet password requirement - Gray
pub const REQUIREMENT_UNMET: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Hyperlinks - Green
pub const LINK: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);
