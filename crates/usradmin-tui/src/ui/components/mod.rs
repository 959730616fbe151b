pub mod modal_frame;
pub mod statusbar;

pub use modal_frame::{render_modal_frame, render_modal_items, ModalItem, ModalSize};
pub use statusbar::render_statusbar;
