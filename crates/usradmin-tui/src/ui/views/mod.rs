pub mod delete_confirm;
pub mod status_page;
pub mod user_list;

pub use delete_confirm::render_delete_confirm;
pub use status_page::render_status_page;
pub use user_list::render_user_list;
