//! # auditrack - Audit Findings Tracker
//!
//! Records audit findings, assigns them to auditors, and collects free-text
//! notes per department.
//!
//! auditrack provides:
//! - SQLite-backed storage with an idempotent, self-seeding schema
//! - A service facade of single-statement operations
//! - Explicit sessions and a role capability table (`admin` / `auditor`)
//! - A role-gated, menu-driven terminal interface

pub mod model;
pub mod storage;
pub mod service;
pub mod access;
pub mod session;
pub mod config;
pub mod ui;
pub mod app;


// Re-exports for convenient access
pub use model::{Identity, Role};
pub use access::{allowed, Action};
pub use session::Session;
pub use service::Tracker;
pub use storage::SqliteStore;

/// Result type alias for auditrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for auditrack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Please fill all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Role '{role}' may not {action}")]
    Forbidden { role: Role, action: Action },
}

impl Error {
    /// Failures shown to the user as a warning rather than ending the session
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::MissingFields(_) | Error::UsernameTaken(_) | Error::NotSignedIn | Error::Forbidden { .. }
        )
    }
}
