//! Color theme constants for the signboard UI

use ratatui::style::Color;

// ============================================================================
// Scene
// ============================================================================

/// Ground plane fill
pub const COLOR_GROUND: Color = Color::Rgb(46, 84, 52);

/// Pole the signs hang from
pub const COLOR_POLE: Color = Color::Rgb(120, 90, 60);

/// Sign face fill
pub const COLOR_SIGN: Color = Color::Rgb(222, 196, 140);

/// Sign caption text
pub const COLOR_SIGN_TEXT: Color = Color::Rgb(40, 30, 20);

/// Sign border
pub const COLOR_SIGN_BORDER: Color = Color::Rgb(90, 64, 40);

// ============================================================================
// Overlay
// ============================================================================

pub const COLOR_BORDER: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_ACCENT: Color = Color::LightCyan;

/// Dim text for hints and placeholders
pub const COLOR_DIM: Color = Color::DarkGray;

/// Answers from the assistant
pub const COLOR_ANSWER: Color = Color::LightGreen;

pub const COLOR_ERROR: Color = Color::LightRed;

/// Overlay background
pub const COLOR_PANEL_BG: Color = Color::Black;
