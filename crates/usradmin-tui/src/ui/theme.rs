// Centralized theme for the panel
// All colors and styles are defined here

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Search field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Modal background - slightly elevated from pure black
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

/// Dims the content behind a modal
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Interactive elements, focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn interactive_selected() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

pub fn status_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

// -----------------------------------------------------------------------------
// Modal Styles
// -----------------------------------------------------------------------------

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Hint text in the modal corner
pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn modal_item() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// Selected item - accent background with contrasting text
pub fn modal_item_selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT_WARNING)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_item_shortcut() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn modal_item_shortcut_selected() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT_WARNING)
}
