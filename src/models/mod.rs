pub mod admin;
pub mod links;
pub mod news;
pub mod payment;

pub use admin::AdminUser;
pub use links::{LinkDoc, LinkPlatform};
pub use news::{NewsDoc, NewsView};
pub use payment::{Payment, PaymentStatus, PaymentView};
