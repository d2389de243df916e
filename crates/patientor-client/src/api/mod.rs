//! Retrieval and submission of patient records.

mod http;
mod mock;

pub use http::*;
pub use mock::*;

use patientor_core::{Diagnosis, Entry, NewEntry, NewPatient, Patient, PatientSummary};

use crate::ClientResult;

/// The REST operations the client depends on.
///
/// Submissions return the server-persisted record with its identifier
/// assigned. Implementations never retry.
pub trait PatientApi {
    /// `GET /patients`
    fn fetch_all_patients(&self) -> ClientResult<Vec<PatientSummary>>;

    /// `GET /patients/{id}`
    fn fetch_patient(&self, id: &str) -> ClientResult<Patient>;

    /// `GET /diagnoses`
    fn fetch_diagnoses(&self) -> ClientResult<Vec<Diagnosis>>;

    /// `POST /patients`
    fn submit_patient(&self, patient: &NewPatient) -> ClientResult<Patient>;

    /// `POST /patients/{id}/entries`
    fn submit_entry(&self, patient_id: &str, entry: &NewEntry) -> ClientResult<Entry>;
}
