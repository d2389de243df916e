//! Patientor Client
//!
//! REST collaborator, configuration and patient session for the patientor
//! API. The core model and form rules live in `patientor_core`; this crate
//! moves those records over HTTP and keeps the one patient a view is showing.
//!
//! # Modules
//!
//! - [`api`]: The `PatientApi` trait with HTTP and in-memory implementations
//! - [`config`]: Base URL and timeout, resolved once at startup
//! - [`logging`]: `RUST_LOG`-driven filter for the binary
//! - [`session`]: Current-patient state and the add-entry flow

pub mod api;
pub mod config;
pub mod logging;
pub mod session;

pub use api::{HttpPatientApi, MockPatientApi, PatientApi};
pub use config::ClientConfig;
pub use session::PatientSession;

use patientor_core::FormError;
use thiserror::Error;

/// Client errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Cannot connect to API at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Response parsing error: {0}")]
    Decode(String),

    #[error("HTTP client error: {0}")]
    Request(String),

    #[error("No patient is open")]
    NoPatientOpen,

    #[error("Invalid form input: {0}")]
    Form(#[from] FormError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
