use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::{layout, theme, App, InputMode};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    if app.panel.is_ready() {
        ui::views::render_user_list(f, app, chunks[1]);
    } else {
        ui::views::render_status_page(f, app, chunks[1]);
    }

    render_footer(f, app, chunks[2]);

    let counter = if app.panel.is_ready() {
        format!(
            "{}/{} users",
            app.visible_count(),
            app.panel.profiles().len()
        )
    } else {
        String::new()
    };
    render_statusbar(f, chunks[3], app.panel.notice(), &counter);

    if let Some(profile) = app.panel.pending_deletion() {
        ui::views::render_delete_confirm(f, app, f.area(), profile);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let title = Span::styled("usradmin · Users", theme::text_bold());

    let mut right = String::new();
    if app.panel.is_deleting() {
        right.push_str(&format!("{} deleting  ", app.spinner()));
    } else if app.panel.is_loading() && app.panel.is_ready() {
        right.push_str(&format!("{} loading  ", app.spinner()));
    }
    right.push_str(if app.embedded { "embedded" } else { "standalone" });

    let spacing = (area.width as usize).saturating_sub(16 + right.chars().count());
    let line = Line::from(vec![
        title,
        Span::raw(" ".repeat(spacing)),
        Span::styled(right, theme::text_muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);

    if app.pending_quit {
        f.render_widget(
            Paragraph::new("Press Ctrl+C again to quit").style(theme::status_error()),
            area,
        );
        return;
    }

    let hints = if app.is_confirming_delete() {
        "y delete · n cancel"
    } else if app.input_mode == InputMode::Searching {
        "type to filter · Enter done · Esc clear"
    } else if app.panel.is_ready() {
        "↑↓ select · / search · d delete · r reload · x dismiss · q quit"
    } else {
        "q quit"
    };
    f.render_widget(Paragraph::new(hints).style(theme::text_dim()), area);
}
