//! In-memory caching using moka
//!
//! Holds authenticated sessions in front of the session store so the
//! bearer-token guard rarely touches it. Entries age out on their own;
//! logout invalidates eagerly.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::auth::{AuthService, Session};

/// Application cache holding resolved sessions
#[derive(Clone)]
pub struct AppCache {
    /// Sessions (token -> Session)
    pub sessions: Cache<String, Arc<Session>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Sessions: 10k entries, 30 min TTL, 10 min idle
            sessions: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(30 * 60))
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            sessions_size: self.sessions.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.sessions.invalidate_all();
        info!("All caches invalidated");
    }

    /// Invalidate a single session by token
    pub async fn invalidate_session(&self, token: &str) {
        self.sessions.invalidate(token).await;
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub sessions_size: u64,
}

/// Preload persisted sessions so tokens resolve without a store hit
/// right after startup
pub async fn warm_sessions(cache: &AppCache, auth: &AuthService) {
    let sessions = auth.active_sessions().await;
    let count = sessions.len();
    for session in sessions {
        cache
            .sessions
            .insert(session.token.clone(), Arc::new(session))
            .await;
    }
    info!("Warmed {} persisted session(s)", count);
}

/// Background sweeper pruning expired sessions every 10 minutes
pub async fn start_session_sweeper(cache: AppCache, auth: Arc<AuthService>) {
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        match auth.sweep_expired().await {
            Ok(0) => {}
            Ok(removed) => {
                info!("Swept {} expired session(s). Stats: {:?}", removed, cache.stats());
            }
            Err(err) => warn!("Session sweep failed to persist: {}", err),
        }
    }
}
