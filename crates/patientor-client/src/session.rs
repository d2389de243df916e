//! Patient session: the one patient a view is showing.
//!
//! The session owns the snapshot. It is replaced only by a successful
//! fetch, never patched from a failed request. After adding an entry the
//! patient is re-fetched, and only once the submission has resolved.

use patientor_core::{
    Diagnosis, Entry, EntryFields, EntryKind, NewEntry, NewPatient, Patient, PatientSummary,
};
use tracing::{info, warn};

use crate::api::PatientApi;
use crate::{ClientError, ClientResult};

pub struct PatientSession<A: PatientApi> {
    api: A,
    diagnoses: Vec<Diagnosis>,
    current: Option<Patient>,
    /// Set when the snapshot holds a local append the server copy was not re-read for
    stale: bool,
}

impl<A: PatientApi> PatientSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            diagnoses: Vec::new(),
            current: None,
            stale: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The open patient, if any.
    pub fn current(&self) -> Option<&Patient> {
        self.current.as_ref()
    }

    /// The loaded diagnosis catalog.
    pub fn diagnoses(&self) -> &[Diagnosis] {
        &self.diagnoses
    }

    /// Whether the snapshot may differ from the server copy.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn list_patients(&self) -> ClientResult<Vec<PatientSummary>> {
        self.api.fetch_all_patients()
    }

    /// Fetch the diagnosis catalog, replacing the loaded one.
    pub fn load_diagnoses(&mut self) -> ClientResult<&[Diagnosis]> {
        self.diagnoses = self.api.fetch_diagnoses()?;
        Ok(&self.diagnoses)
    }

    /// Open a patient along with the diagnosis catalog.
    ///
    /// Nothing is replaced unless both fetches succeed.
    pub fn open(&mut self, id: &str) -> ClientResult<&Patient> {
        let patient = self.api.fetch_patient(id)?;
        let diagnoses = self.api.fetch_diagnoses()?;

        self.diagnoses = diagnoses;
        self.stale = false;
        let patient: &Patient = self.current.insert(patient);
        Ok(patient)
    }

    /// Re-fetch the open patient.
    pub fn refresh(&mut self) -> ClientResult<&Patient> {
        let id = self.current_id()?;
        let patient = self.api.fetch_patient(&id)?;
        self.stale = false;
        let patient: &Patient = self.current.insert(patient);
        Ok(patient)
    }

    /// Submit an entry for the open patient, then re-synchronize.
    ///
    /// A failed submission leaves the snapshot untouched. If the submission
    /// succeeds but the re-fetch fails, the created entry is appended
    /// locally and the session is marked stale.
    pub fn add_entry(&mut self, entry: &NewEntry) -> ClientResult<Entry> {
        let id = self.current_id()?;

        let created = self.api.submit_entry(&id, entry).map_err(|e| {
            warn!(patient_id = %id, kind = %entry.kind(), error = %e, "entry submission failed");
            e
        })?;
        info!(patient_id = %id, entry_id = %created.id, kind = %created.kind(), "entry created");

        match self.api.fetch_patient(&id) {
            Ok(patient) => {
                self.current = Some(patient);
                self.stale = false;
            }
            Err(e) => {
                warn!(patient_id = %id, error = %e, "re-fetch after entry submission failed");
                if let Some(patient) = self.current.as_mut() {
                    patient.push_entry(created.clone());
                }
                self.stale = true;
            }
        }

        Ok(created)
    }

    /// Validate raw form values against the loaded catalog, then [`add_entry`](Self::add_entry).
    pub fn add_entry_from_form(
        &mut self,
        kind: EntryKind,
        fields: &EntryFields,
        diagnosis_codes: &[String],
    ) -> ClientResult<Entry> {
        let entry = fields.build_validated(kind, diagnosis_codes, &self.diagnoses)?;
        self.add_entry(&entry)
    }

    /// Submit a new patient. The open patient is not changed.
    pub fn add_patient(&mut self, patient: &NewPatient) -> ClientResult<Patient> {
        let created = self.api.submit_patient(patient).map_err(|e| {
            warn!(error = %e, "patient submission failed");
            e
        })?;
        info!(patient_id = %created.id, "patient created");
        Ok(created)
    }

    fn current_id(&self) -> ClientResult<String> {
        self.current
            .as_ref()
            .map(|p| p.id.clone())
            .ok_or(ClientError::NoPatientOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPatientApi;
    use patientor_core::{EntryBase, HealthCheckEntry, HealthCheckRating};

    const DANA: &str = "d2773598-f723-11e9-8f0b-362b9e155667";

    fn health_check() -> NewEntry {
        NewEntry::HealthCheck(HealthCheckEntry {
            base: EntryBase {
                description: "Follow-up".into(),
                date: "2020-02-02".into(),
                specialist: "MD House".into(),
                diagnosis_codes: Some(vec![]),
            },
            health_check_rating: HealthCheckRating::LowRisk,
        })
    }

    #[test]
    fn test_add_entry_requires_open_patient() {
        let mut session = PatientSession::new(MockPatientApi::with_sample_data());
        assert!(matches!(
            session.add_entry(&health_check()),
            Err(ClientError::NoPatientOpen)
        ));
        assert!(session.api().calls().is_empty());
    }

    #[test]
    fn test_open_loads_catalog() {
        let mut session = PatientSession::new(MockPatientApi::with_sample_data());
        let patient = session.open(DANA).unwrap();
        assert_eq!(patient.name, "Dana Scully");
        assert_eq!(session.diagnoses().len(), 6);
    }

    #[test]
    fn test_failed_open_keeps_previous_patient() {
        let mut session = PatientSession::new(MockPatientApi::with_sample_data());
        session.open(DANA).unwrap();

        assert!(matches!(session.open("missing"), Err(ClientError::NotFound(_))));
        assert_eq!(session.current().unwrap().id, DANA);
    }

    #[test]
    fn test_add_entry_form_validation_happens_before_submit() {
        let mut session = PatientSession::new(MockPatientApi::with_sample_data());
        session.open(DANA).unwrap();
        let calls_before = session.api().calls().len();

        let result = session.add_entry_from_form(
            EntryKind::Hospital,
            &EntryFields::default(),
            &[],
        );
        assert!(matches!(result, Err(ClientError::Form(_))));
        assert_eq!(session.api().calls().len(), calls_before);
    }

    #[test]
    fn test_refresh_clears_stale() {
        let mut session = PatientSession::new(MockPatientApi::with_sample_data());
        session.open(DANA).unwrap();
        session.api().fail_next_fetch("timeout");
        session.add_entry(&health_check()).unwrap();
        assert!(session.is_stale());

        session.refresh().unwrap();
        assert!(!session.is_stale());
        assert_eq!(session.current().unwrap().entries.len(), 2);
    }
}
