//! Runtime configuration from the environment.

use std::env;
use std::path::PathBuf;

use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_FILE: &str = "data/sessions.json";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub session_file: PathBuf,
    pub session_ttl_hours: i64,
}

impl Config {
    /// Read configuration from the environment, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("PARKRIDE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let session_file = env::var("PARKRIDE_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        let session_ttl_hours = match env::var("PARKRIDE_SESSION_TTL_HOURS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring unparsable PARKRIDE_SESSION_TTL_HOURS={:?}, using {}",
                    raw, DEFAULT_SESSION_TTL_HOURS
                );
                DEFAULT_SESSION_TTL_HOURS
            }),
            Err(_) => DEFAULT_SESSION_TTL_HOURS,
        };

        Self {
            bind_addr,
            session_file,
            session_ttl_hours,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}
