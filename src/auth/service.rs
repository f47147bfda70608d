//! Account and session operations against the mock directory.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::models::{Session, User, UserRecord};
use super::store::{SessionStore, StoreError};

/// Accounts seeded into every process
const SEEDED_USERS: [(&str, &str, &str, &str, bool); 1] = [(
    "test@example.com",
    "password123",
    "user-123",
    "Test User",
    true,
)];

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already in use")]
    EmailInUse,

    #[error("No account found with this email")]
    UserNotFound,

    #[error("Unauthorized: No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mock identity service: seeded directory, uuid tokens, store-backed
/// sessions
pub struct AuthService {
    directory: RwLock<HashMap<String, UserRecord>>,
    sessions: RwLock<HashMap<String, Session>>,
    store: Box<dyn SessionStore>,
    session_ttl: Duration,
}

impl AuthService {
    /// Build the service, loading persisted sessions and dropping any
    /// that have already expired.
    pub fn new(store: Box<dyn SessionStore>, session_ttl_hours: i64) -> Result<Self, StoreError> {
        let mut directory = HashMap::new();
        for (email, password, uid, display_name, verified) in SEEDED_USERS {
            directory.insert(
                email.to_string(),
                UserRecord {
                    user: User {
                        uid: uid.to_string(),
                        email: email.to_string(),
                        display_name: display_name.to_string(),
                        email_verified: verified,
                    },
                    password: password.to_string(),
                },
            );
        }

        let now = Utc::now();
        let sessions: HashMap<String, Session> = store
            .load()?
            .into_iter()
            .filter(|session| session.is_valid_at(now))
            .map(|session| (session.token.clone(), session))
            .collect();

        Ok(Self {
            directory: RwLock::new(directory),
            sessions: RwLock::new(sessions),
            store,
            session_ttl: Duration::hours(session_ttl_hours),
        })
    }

    /// Authenticate against the directory and open a session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        let user = {
            let directory = self.directory.read().await;
            let record = directory
                .get(&email)
                .filter(|record| record.password == password)
                .ok_or(AuthError::InvalidCredentials)?;
            record.user.clone()
        };

        self.open_session(user).await
    }

    /// Register a new account and open a session. Registrations live
    /// only as long as the process.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let user = {
            let mut directory = self.directory.write().await;
            if directory.contains_key(&email) {
                return Err(AuthError::EmailInUse);
            }

            let display_name = email
                .split('@')
                .next()
                .unwrap_or(email.as_str())
                .to_string();
            let user = User {
                uid: new_uid(),
                email: email.clone(),
                display_name,
                email_verified: false,
            };
            directory.insert(
                email,
                UserRecord {
                    user: user.clone(),
                    password: password.to_string(),
                },
            );
            user
        };

        self.open_session(user).await
    }

    /// Close a session; closing an already-absent token is not an error
    pub async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        self.persist(&sessions)?;
        Ok(())
    }

    /// Mock password reset: verifies the account and logs the send
    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        let directory = self.directory.read().await;
        if !directory.contains_key(&email) {
            return Err(AuthError::UserNotFound);
        }

        info!("Mock password reset email sent to {}", email);
        Ok(())
    }

    /// Resolve a token to its session, if present and unexpired
    pub async fn session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .filter(|session| session.is_valid_at(Utc::now()))
            .cloned()
    }

    /// All currently valid sessions (cache warm-up)
    pub async fn active_sessions(&self) -> Vec<Session> {
        let now = Utc::now();
        let sessions = self.sessions.read().await;
        sessions
            .values()
            .filter(|session| session.is_valid_at(now))
            .cloned()
            .collect()
    }

    /// Drop expired sessions from the map and the store; returns how
    /// many were removed
    pub async fn sweep_expired(&self) -> Result<usize, StoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_valid_at(now));
        let removed = before - sessions.len();

        if removed > 0 {
            self.persist(&sessions)?;
        }
        Ok(removed)
    }

    async fn open_session(&self, user: User) -> Result<Session, AuthError> {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user,
            created_at: now,
            expires_at: now + self.session_ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        self.persist(&sessions)?;
        Ok(session)
    }

    fn persist(&self, sessions: &HashMap<String, Session>) -> Result<(), StoreError> {
        let snapshot: Vec<Session> = sessions.values().cloned().collect();
        self.store.save(&snapshot)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn new_uid() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("user-{}", &suffix[..7])
}
