pub mod password;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Session key under which the authenticated operator is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Authenticated operator identity carried in the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Hex ObjectId of the `Admin` document.
    pub id: String,
    pub username: String,
}

/// Store the operator identity in the session after a successful login.
pub async fn establish(
    session: &Session,
    user: CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(SESSION_USER_KEY, user).await
}

/// Read the operator identity, if any, from the session.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    session.get(SESSION_USER_KEY).await.ok().flatten()
}

/// Destroy the session and drop the cookie.
pub async fn destroy(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
