use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use usradmin_core::panel::{EmptyState, ListStatus};

use crate::ui::{layout, theme, App, InputMode};

/// Search field, optional refresh banner, then the filtered list
pub fn render_user_list(f: &mut Frame, app: &App, area: Rect) {
    let banner_height = if app.panel.refresh_error().is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(layout::SEARCH_HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Min(0),
    ])
    .split(layout::with_content_padding(area));

    render_search(f, app, chunks[0]);

    if let Some(error) = app.panel.refresh_error() {
        f.render_widget(
            Paragraph::new(format!("⚠ {}", error)).style(theme::status_warning()),
            chunks[1],
        );
    }

    render_list_body(f, app, chunks[2]);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Searching;
    let term = app.panel.search_term();

    let line = if term.is_empty() && !searching {
        Line::from(Span::styled("Press / to search by username", theme::input_placeholder()))
    } else {
        let mut spans = vec![Span::styled(term.to_string(), theme::input_active())];
        if searching {
            spans.push(Span::styled("▏", theme::border_focused()));
        }
        Line::from(spans)
    };

    let border_style = if searching {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };

    let search = Paragraph::new(line).style(theme::input_active()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Search ", theme::text_muted())),
    );
    f.render_widget(search, area);
}

fn render_list_body(f: &mut Frame, app: &App, area: Rect) {
    match app.panel.list_status() {
        ListStatus::Failed(_) => {
            let message = app.panel.page_error().unwrap_or_default();
            render_centered(f, area, &message, theme::status_error());
            return;
        }
        ListStatus::NotLoaded => {
            render_centered(
                f,
                area,
                &format!("{} Loading users", app.spinner()),
                theme::text_muted(),
            );
            return;
        }
        ListStatus::Loaded => {}
    }

    match app.panel.empty_state() {
        Some(EmptyState::NoProfiles) => {
            render_centered(f, area, "No users found", theme::text_muted());
            return;
        }
        Some(EmptyState::NoMatches) => {
            let message = format!("No users match \"{}\"", app.panel.search_term().trim());
            render_centered(f, area, &message, theme::text_muted());
            return;
        }
        None => {}
    }

    let id_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .panel
        .visible_profiles()
        .into_iter()
        .map(|profile| {
            let username_width = profile.username.chars().count();
            let id_label = format!("#{}", profile.id);
            let gap = id_width.saturating_sub(username_width + id_label.chars().count()).max(1);
            ListItem::new(Line::from(vec![
                Span::styled(profile.username.clone(), theme::text_primary()),
                Span::raw(" ".repeat(gap)),
                Span::styled(id_label, theme::text_dim()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme::interactive_selected())
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_centered(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let chunks = Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).split(area);
    f.render_widget(
        Paragraph::new(message.to_string())
            .style(style)
            .alignment(Alignment::Center),
        chunks[1],
    );
}
