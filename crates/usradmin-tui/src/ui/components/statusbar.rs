// Status bar at the very bottom of the app
// Shows the current notice on the left and the list counter on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use usradmin_core::Notice;

use crate::ui::notifications::{notice_color, notice_icon};
use crate::ui::theme;

/// Minimum width for the counter column
const COUNTER_COLUMN_MIN_WIDTH: u16 = 14;

/// Render the status bar.
/// `counter` is right-aligned in a fixed-width column so long notices cannot push it out.
pub fn render_statusbar(f: &mut Frame, area: Rect, notice: Option<&Notice>, counter: &str) {
    let counter_width = ((counter.width() + 1) as u16).max(COUNTER_COLUMN_MIN_WIDTH);
    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width)]).split(area);
    let notice_area = chunks[0];
    let counter_area = chunks[1];

    let notice_paragraph = match notice {
        Some(notice) => {
            let icon = notice_icon(notice.kind);
            let color = notice_color(notice.kind);
            let icon_width = icon.width() + 2;
            let available = (notice_area.width as usize).saturating_sub(icon_width);
            let message = truncate_with_ellipsis(&notice.message, available);

            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(message, Style::default().fg(color)),
            ]))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(notice_paragraph, notice_area);

    let padding = (counter_area.width as usize).saturating_sub(counter.width() + 1);
    let padded = format!("{}{} ", " ".repeat(padding), counter);
    f.render_widget(Paragraph::new(padded).style(theme::text_muted()), counter_area);
}

/// Truncate to `max_width` columns, adding "..." when something was cut.
/// Grapheme-aware so multi-codepoint characters are never split.
fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    let mut result = take_width(s, max_width - 3);
    result.push_str("...");
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut current_width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }
    result
}
