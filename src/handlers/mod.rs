pub mod auth;
pub mod links;
pub mod news;
pub mod pages;
pub mod payments;
pub mod users;
