//! User and session models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
}

/// Directory entry; the password never leaves this module tree
#[derive(Debug, Clone)]
pub(crate) struct UserRecord {
    pub user: User,
    pub password: String,
}

/// An authenticated session, persisted through the session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session is valid at the given time
    pub fn is_valid_at(&self, check_time: DateTime<Utc>) -> bool {
        check_time < self.expires_at
    }
}
