//! User delete confirmation dialog

use ratatui::{
    layout::Rect,
    widgets::{Paragraph, Wrap},
    Frame,
};
use usradmin_core::UserProfile;

use crate::ui::components::{render_modal_frame, render_modal_items, ModalItem, ModalSize};
use crate::ui::{layout, theme, App, ConfirmChoice};

pub fn render_delete_confirm(f: &mut Frame, app: &App, area: Rect, profile: &UserProfile) {
    let content_area = render_modal_frame(f, area, "Delete User", "esc", &ModalSize::default());
    let padded = layout::with_modal_padding(content_area);

    let warning = Paragraph::new(format!(
        "Are you sure you want to delete {}?\n\nThis action cannot be undone.",
        profile.username
    ))
    .style(theme::status_warning())
    .wrap(Wrap { trim: true });
    f.render_widget(warning, Rect::new(padded.x, padded.y, padded.width, 3.min(padded.height)));

    let actions_area = Rect::new(
        content_area.x,
        content_area.y + 4,
        content_area.width,
        content_area.height.saturating_sub(5),
    );
    let items = vec![
        ModalItem::new("Cancel")
            .with_shortcut("n")
            .selected(app.confirm_choice == ConfirmChoice::Cancel),
        ModalItem::new("Delete")
            .with_shortcut("y")
            .selected(app.confirm_choice == ConfirmChoice::Delete),
    ];
    render_modal_items(f, actions_area, &items);

    let hints_area = Rect::new(
        padded.x,
        content_area.y + content_area.height.saturating_sub(1),
        padded.width,
        1,
    );
    f.render_widget(
        Paragraph::new("↑↓ navigate · Enter confirm · Esc cancel").style(theme::text_dim()),
        hints_area,
    );
}
