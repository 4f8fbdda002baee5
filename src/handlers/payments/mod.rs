pub mod by_status;
pub mod control;
pub mod show;

// Re-export handler functions for use in routing
pub use by_status::payments_by_status;
pub use control::investment_control;
pub use show::investment_show;

use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    /// Present and non-empty; the value itself is an open set the platform
    /// owns, so no vocabulary check happens here.
    pub fn required(&self) -> Result<&str, ApiError> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("Status is required"))
    }
}
