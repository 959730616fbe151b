// Layout constants and helpers shared by all views

use ratatui::layout::Rect;

/// Horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding for modal content (left + right)
pub const MODAL_PADDING_H: u16 = 2;

pub const HEADER_HEIGHT: u16 = 1;

/// Bordered search field
pub const SEARCH_HEIGHT: u16 = 3;

pub const FOOTER_HEIGHT: u16 = 1;

pub const STATUSBAR_HEIGHT: u16 = 1;

// Delete confirmation modal
pub const CONFIRM_MODAL_WIDTH: u16 = 56;
pub const CONFIRM_MODAL_HEIGHT: u16 = 11;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

#[inline]
pub fn with_modal_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, MODAL_PADDING_H)
}
