use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Caller identity used for favorite mutations until an auth layer exists.
///
/// There is no session or token handling yet, so every favorite operation is
/// performed on behalf of this user. The id is threaded explicitly through
/// `AppState` into the endpoint layer rather than read ad hoc, so wiring in a
/// real authenticated identity later only touches the state construction.
const DEFAULT_CURRENT_USER_ID: i32 = 1;

pub struct Config {
    /// Connection string for the relational store. Postgres in deployment;
    /// falls back to a local SQLite file when `DATABASE_URL` is unset.
    pub database_url: String,

    /// Port the HTTP listener binds on (`PORT`, default 3000).
    pub port: u16,

    /// Identity favorite mutations are performed on behalf of.
    pub current_user_id: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            port,
            current_user_id: DEFAULT_CURRENT_USER_ID,
        })
    }
}
