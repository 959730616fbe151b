use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};
use usradmin_core::handshake::HandshakeState;

use crate::ui::{theme, App};

/// Full-page view shown until the handshake settles, or forever if it failed
pub fn render_status_page(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let (headline, detail, style) = match app.panel.handshake() {
        HandshakeState::WaitingForToken => (
            format!("{} Waiting for credential", app.spinner()),
            if app.embedded {
                "Waiting for the host to send AUTH_TOKEN".to_string()
            } else {
                "Running standalone".to_string()
            },
            theme::text_primary(),
        ),
        HandshakeState::Initializing => (
            format!("{} Initializing session", app.spinner()),
            String::new(),
            theme::text_primary(),
        ),
        HandshakeState::InitFailed(e) => (
            "Initialization failed".to_string(),
            e.to_string(),
            theme::status_error(),
        ),
        // The list view takes over once ready
        HandshakeState::Ready => return,
    };

    f.render_widget(
        Paragraph::new(headline).style(style).alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(detail)
            .style(theme::text_muted())
            .alignment(Alignment::Center),
        chunks[3],
    );
}
