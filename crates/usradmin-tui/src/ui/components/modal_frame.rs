use crate::ui::layout;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};

/// Configuration for modal sizing
pub struct ModalSize {
    /// Maximum width in columns (capped by terminal width - 4)
    pub max_width: u16,
    /// Height in rows (capped by terminal height - 2)
    pub height: u16,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self {
            max_width: layout::CONFIRM_MODAL_WIDTH,
            height: layout::CONFIRM_MODAL_HEIGHT,
        }
    }
}

/// Calculate centered modal area
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let popup_width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let popup_height = size.height.min(terminal_area.height.saturating_sub(2));
    let popup_x = terminal_area.x + (terminal_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = terminal_area.y + (terminal_area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Dims existing content without erasing it
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

pub fn render_modal_overlay(f: &mut Frame, terminal_area: Rect) {
    f.render_widget(DimOverlay, terminal_area);
}

/// Clear the area and fill it with the modal background
pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    let bg_block = Block::default().style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(bg_block, area);
}

/// Render modal header with title on left and hint on right.
/// Returns the remaining area below the header.
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    // 1 line of content + 1 for spacing
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let header_area = layout::with_modal_padding(chunks[0]);

    let spacing = (header_area.width as usize).saturating_sub(title.len() + hint.len());
    let header_line = Line::from(vec![
        Span::styled(title, theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint, theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}

/// A modal item with text and optional shortcut
pub struct ModalItem {
    pub text: String,
    pub shortcut: Option<String>,
    pub is_selected: bool,
}

impl ModalItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shortcut: None,
            is_selected: false,
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }
}

fn render_modal_item(f: &mut Frame, area: Rect, item: &ModalItem) {
    let (text_style, shortcut_style) = if item.is_selected {
        (theme::modal_item_selected(), theme::modal_item_shortcut_selected())
    } else {
        (theme::modal_item(), theme::modal_item_shortcut())
    };

    if item.is_selected {
        let bg_block = Block::default().style(Style::default().bg(theme::ACCENT_WARNING));
        f.render_widget(bg_block, area);
    }

    let shortcut_text = item.shortcut.as_deref().unwrap_or("");
    let spacing = (area.width as usize).saturating_sub(item.text.len() + shortcut_text.len());

    let line = Line::from(vec![
        Span::styled(&item.text, text_style),
        Span::styled(" ".repeat(spacing), text_style),
        Span::styled(shortcut_text, shortcut_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render a list of simple items, one per row
pub fn render_modal_items(f: &mut Frame, area: Rect, items: &[ModalItem]) {
    let content_area = layout::with_modal_padding(area);

    for (idx, item) in items.iter().enumerate() {
        if idx as u16 >= content_area.height {
            break;
        }
        let item_area = Rect::new(
            content_area.x,
            content_area.y + idx as u16,
            content_area.width,
            1,
        );
        render_modal_item(f, item_area, item);
    }
}

/// Overlay, background and header in one call. Returns the content area.
pub fn render_modal_frame(
    f: &mut Frame,
    terminal_area: Rect,
    title: &str,
    hint: &str,
    size: &ModalSize,
) -> Rect {
    render_modal_overlay(f, terminal_area);
    let area = modal_area(terminal_area, size);
    render_modal_background(f, area);

    let inner_area = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(2));
    render_modal_header(f, inner_area, title, hint)
}
