pub mod layout;
pub mod pagination_controls;
pub mod post_form;

pub use pagination_controls::PaginationControls;
pub use post_form::PostForm;
