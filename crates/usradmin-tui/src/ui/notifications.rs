// Presentation of core notices (toasts)

use ratatui::style::Color;
use usradmin_core::NoticeKind;

use crate::ui::theme;

pub fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "\u{2713}", // ✓
        NoticeKind::Error => "\u{2717}",   // ✗
    }
}

pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => theme::ACCENT_SUCCESS,
        NoticeKind::Error => theme::ACCENT_ERROR,
    }
}
