use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub http: HttpConfig,
    pub store: StoreConfig,
    pub session: SessionConfig,
    pub uploads: UploadConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub port: u16,
    /// Directory holding the built admin front-end pages.
    pub dist_dir: String,
    /// Directory served under /public (uploads live below it).
    pub public_dir: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub mongo_url: String,
    pub users_db: String,
    pub data_db: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Where news images are written; must sit under `public_dir` so a
    /// stored filename is reachable at /public/uploads/news/<name>.
    pub news_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        Self {
            environment,
            http: HttpConfig {
                port: env::var("ADMIN_API_PORT")
                    .ok()
                    .or_else(|| env::var("PORT").ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3000),
                dist_dir: env::var("ADMIN_DIST_DIR").unwrap_or_else(|_| "dist".to_string()),
                public_dir: env::var("ADMIN_PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            store: StoreConfig {
                mongo_url: env::var("MONGO_URL")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                users_db: env::var("USERS_DB").unwrap_or_else(|_| "users".to_string()),
                data_db: env::var("DATA_DB").unwrap_or_else(|_| "data".to_string()),
            },
            session: SessionConfig {
                cookie_name: env::var("SESSION_COOKIE_NAME")
                    .unwrap_or_else(|_| "admin_session".to_string()),
            },
            uploads: UploadConfig {
                news_dir: env::var("NEWS_UPLOAD_DIR")
                    .unwrap_or_else(|_| "public/uploads/news".to_string()),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::from_env();
        assert!(!config.store.users_db.is_empty());
        assert!(!config.store.data_db.is_empty());
        assert!(!config.session.cookie_name.is_empty());
    }
}
