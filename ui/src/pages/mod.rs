pub mod about;
pub mod home;
pub mod not_found;
pub mod post_create;
pub mod post_detail;
pub mod post_edit;
pub mod post_list;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use post_create::PostCreatePage;
pub use post_detail::PostDetailPage;
pub use post_edit::PostEditPage;
pub use post_list::PostListPage;
