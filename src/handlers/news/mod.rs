pub mod add;
pub mod delete;
pub mod list;

// Re-export handler functions for use in routing
pub use add::add_news;
pub use delete::delete_news;
pub use list::get_news;
