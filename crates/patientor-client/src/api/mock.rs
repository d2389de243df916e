//! In-memory [`PatientApi`] for tests and offline runs.

use std::cell::RefCell;

use patientor_core::{
    Diagnosis, Discharge, Entry, EntryBase, Gender, HealthCheckEntry, HealthCheckRating,
    HospitalEntry, NewEntry, NewPatient, Patient, PatientSummary,
};

use super::PatientApi;
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
struct MockState {
    patients: Vec<Patient>,
    diagnoses: Vec<Diagnosis>,
    /// Requests received, as "METHOD /path"
    calls: Vec<String>,
    fail_next_submit: Option<String>,
    fail_next_fetch: Option<String>,
}

/// Acts like the server: stores submissions and assigns identifiers.
#[derive(Debug, Default)]
pub struct MockPatientApi {
    state: RefCell<MockState>,
}

impl MockPatientApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        self.state.borrow_mut().patients = patients;
        self
    }

    pub fn with_diagnoses(self, diagnoses: Vec<Diagnosis>) -> Self {
        self.state.borrow_mut().diagnoses = diagnoses;
        self
    }

    /// A small catalog and two patients, for `--offline` runs.
    pub fn with_sample_data() -> Self {
        let diagnoses = vec![
            Diagnosis::new("M24.2", "Disorder of ligament"),
            Diagnosis::new("M51.2", "Other specified intervertebral disc displacement"),
            Diagnosis::new("S03.5", "Sprain and strain of joints and ligaments of other parts of head"),
            Diagnosis::new("J10.1", "Influenza with other respiratory manifestations"),
            Diagnosis::new("S62.5", "Fracture of thumb"),
            Diagnosis::new("Z57.1", "Occupational exposure to radiation"),
        ];

        let mut john = Patient::from_new(
            "d2773336-f723-11e9-8f0b-362b9e155667".into(),
            NewPatient {
                name: "John McClane".into(),
                date_of_birth: "1986-07-09".into(),
                ssn: "090786-122X".into(),
                gender: Gender::Male,
                occupation: "New york city cop".into(),
            },
        );
        john.push_entry(
            NewEntry::Hospital(HospitalEntry {
                base: EntryBase {
                    description: "Healing time appr. 2 weeks.".into(),
                    date: "2015-01-02".into(),
                    specialist: "MD House".into(),
                    diagnosis_codes: Some(vec!["S62.5".into()]),
                },
                discharge: Discharge {
                    date: "2015-01-16".into(),
                    criteria: "Thumb has healed.".into(),
                },
            })
            .with_id("d811e46d-70b3-4d90-b090-4535c7cf8fb1"),
        );

        let mut dana = Patient::from_new(
            "d2773598-f723-11e9-8f0b-362b9e155667".into(),
            NewPatient {
                name: "Dana Scully".into(),
                date_of_birth: "1974-01-05".into(),
                ssn: "050174-432N".into(),
                gender: Gender::Female,
                occupation: "Forensic Pathologist".into(),
            },
        );
        dana.push_entry(
            NewEntry::HealthCheck(HealthCheckEntry {
                base: EntryBase {
                    description: "Yearly control visit.".into(),
                    date: "2019-10-20".into(),
                    specialist: "MD House".into(),
                    diagnosis_codes: None,
                },
                health_check_rating: HealthCheckRating::Healthy,
            })
            .with_id("b4f4eca1-2aa7-4b13-9a18-4a5535c3c8da"),
        );

        Self::new()
            .with_patients(vec![john, dana])
            .with_diagnoses(diagnoses)
    }

    /// Make the next `submit_*` call fail with a transport error.
    pub fn fail_next_submit(&self, message: &str) {
        self.state.borrow_mut().fail_next_submit = Some(message.to_string());
    }

    /// Make the next `fetch_*` call fail with a transport error.
    pub fn fail_next_fetch(&self, message: &str) {
        self.state.borrow_mut().fail_next_fetch = Some(message.to_string());
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// The stored (server-side) copy of a patient.
    pub fn stored_patient(&self, id: &str) -> Option<Patient> {
        self.state
            .borrow()
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn record(&self, call: String, failure: fn(&mut MockState) -> Option<String>) -> ClientResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match failure(&mut *state) {
            Some(message) => Err(ClientError::Connection(message)),
            None => Ok(()),
        }
    }

    fn fetch_call(&self, call: String) -> ClientResult<()> {
        self.record(call, |s| s.fail_next_fetch.take())
    }

    fn submit_call(&self, call: String) -> ClientResult<()> {
        self.record(call, |s| s.fail_next_submit.take())
    }
}

impl PatientApi for MockPatientApi {
    fn fetch_all_patients(&self) -> ClientResult<Vec<PatientSummary>> {
        self.fetch_call("GET /patients".into())?;
        Ok(self.state.borrow().patients.iter().map(Patient::summary).collect())
    }

    fn fetch_patient(&self, id: &str) -> ClientResult<Patient> {
        self.fetch_call(format!("GET /patients/{}", id))?;
        self.stored_patient(id)
            .ok_or_else(|| ClientError::NotFound(format!("patient {}", id)))
    }

    fn fetch_diagnoses(&self) -> ClientResult<Vec<Diagnosis>> {
        self.fetch_call("GET /diagnoses".into())?;
        Ok(self.state.borrow().diagnoses.clone())
    }

    fn submit_patient(&self, patient: &NewPatient) -> ClientResult<Patient> {
        self.submit_call("POST /patients".into())?;
        let created = Patient::from_new(uuid::Uuid::new_v4().to_string(), patient.clone());
        self.state.borrow_mut().patients.push(created.clone());
        Ok(created)
    }

    fn submit_entry(&self, patient_id: &str, entry: &NewEntry) -> ClientResult<Entry> {
        self.submit_call(format!("POST /patients/{}/entries", patient_id))?;
        let mut state = self.state.borrow_mut();
        let patient = state
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| ClientError::NotFound(format!("patient {}", patient_id)))?;

        let created = entry.clone().with_id(uuid::Uuid::new_v4().to_string());
        patient.push_entry(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_new_patient() -> NewPatient {
        NewPatient {
            name: "Matti Luukkainen".into(),
            date_of_birth: "1971-04-09".into(),
            ssn: "090471-8890".into(),
            gender: Gender::Male,
            occupation: "Digital evangelist".into(),
        }
    }

    #[test]
    fn test_submit_patient_assigns_id() {
        let api = MockPatientApi::new();
        let created = api.submit_patient(&make_new_patient()).unwrap();
        assert_eq!(created.id.len(), 36);
        assert!(created.entries.is_empty());
        assert_eq!(api.fetch_all_patients().unwrap().len(), 1);
    }

    #[test]
    fn test_fail_next_submit_is_one_shot() {
        let api = MockPatientApi::new();
        api.fail_next_submit("network down");
        assert!(matches!(
            api.submit_patient(&make_new_patient()),
            Err(ClientError::Connection(m)) if m == "network down"
        ));
        assert!(api.fetch_all_patients().unwrap().is_empty());
        assert!(api.submit_patient(&make_new_patient()).is_ok());
    }

    #[test]
    fn test_fetch_unknown_patient() {
        let api = MockPatientApi::with_sample_data();
        assert!(matches!(api.fetch_patient("nope"), Err(ClientError::NotFound(_))));
        assert_eq!(api.calls(), vec!["GET /patients/nope".to_string()]);
    }

    #[test]
    fn test_sample_data() {
        let api = MockPatientApi::with_sample_data();
        assert_eq!(api.fetch_all_patients().unwrap().len(), 2);
        assert_eq!(api.fetch_diagnoses().unwrap().len(), 6);
    }
}
