pub mod app;
pub mod components;
pub mod layout;
pub mod notifications;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, ConfirmChoice, InputMode};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
