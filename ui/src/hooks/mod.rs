pub mod use_fetch_signals;
pub mod use_post;
pub mod use_post_list;
pub mod use_post_nav;

pub use use_fetch_signals::{FetchSnapshot, use_fetch_signals};
pub use use_post::use_post;
pub use use_post_list::use_post_list;
pub use use_post_nav::{PostNav, use_post_nav};
