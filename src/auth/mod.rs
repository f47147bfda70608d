//! Mock identity and session layer.
//!
//! A seeded in-process user directory with uuid session tokens. Sessions
//! persist through an injectable store (load/save); everything else is
//! process-lifetime only. This is deliberately not a real identity
//! system.

pub mod extract;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

// Re-export commonly used items
pub use extract::CurrentSession;
pub use models::{Session, User};
pub use routes::router;
pub use service::{AuthError, AuthService};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
