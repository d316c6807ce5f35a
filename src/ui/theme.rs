//! Color theme constants for the Pixora UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Focused field and selected tile
pub const COLOR_FOCUS: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Spinner and "load more" affordance
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error banner
pub const COLOR_ERROR: Color = Color::Red;

/// Tiles rendered with a placeholder image
pub const COLOR_PLACEHOLDER: Color = Color::Rgb(68, 68, 68); // #444
