pub mod notice;
pub mod profile;

pub use notice::{Notice, NoticeKind};
pub use profile::UserProfile;
