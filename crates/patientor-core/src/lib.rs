//! Patientor Core Library
//!
//! Patient record model and the rules for building new records from form
//! input, shared by every front end of the patientor client.
//!
//! # Flow
//!
//! ```text
//! raw form fields ──► EntryFields::build(kind) ──► NewEntry ──► (client) POST
//!                                                                   │
//!                     render / display ◄── Entry ◄── persisted ─────┘
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Diagnosis, Entry and its variants)
//! - [`form`]: Entry and patient form construction and validation
//! - [`display`]: Kind and risk-rating display tokens
//! - [`render`]: Plain-text patient and entry views

pub mod display;
pub mod form;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use display::{entry_kind_display, risk_rating_color, KindDisplay, RiskColor};
pub use form::{build_entry_input, EntryFields, FormError, FormResult, PatientFields};
pub use models::{
    Diagnosis, Discharge, Entry, EntryBase, EntryKind, Gender, HealthCheckEntry,
    HealthCheckRating, HospitalEntry, NewEntry, NewPatient, OccupationalHealthcareEntry, Patient,
    PatientSummary, SickLeave,
};
