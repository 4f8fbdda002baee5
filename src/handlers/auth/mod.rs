pub mod fetch_user;
pub mod login;
pub mod logout;

// Re-export handler functions for use in routing
pub use fetch_user::fetch_user;
pub use login::login;
pub use logout::logout;
