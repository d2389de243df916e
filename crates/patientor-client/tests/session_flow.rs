//! Add-entry flow against the in-memory API.

use patientor_client::{ClientError, MockPatientApi, PatientApi, PatientSession};
use patientor_core::{EntryFields, EntryKind, Gender, NewEntry, NewPatient, Patient};

fn make_patient(id: &str) -> Patient {
    Patient::from_new(
        id.to_string(),
        NewPatient {
            name: "Jane Doe".into(),
            date_of_birth: "1980-05-05".into(),
            ssn: "050580-111A".into(),
            gender: Gender::Female,
            occupation: "Engineer".into(),
        },
    )
}

fn make_entry() -> NewEntry {
    let fields = EntryFields {
        description: "Annual checkup".into(),
        date: "2024-01-10".into(),
        specialist: "Dr. X".into(),
        health_check_rating: 1,
        ..Default::default()
    };
    fields.build(EntryKind::HealthCheck, &["M54.5".to_string()]).unwrap()
}

fn open_session() -> PatientSession<MockPatientApi> {
    let api = MockPatientApi::new()
        .with_patients(vec![make_patient("p-1")])
        .with_diagnoses(vec![patientor_core::Diagnosis::new("M54.5", "Low back pain")]);
    let mut session = PatientSession::new(api);
    session.open("p-1").unwrap();
    session
}

#[test]
fn test_failed_submission_leaves_entries_unchanged() {
    let mut session = open_session();
    let before = session.current().unwrap().clone();

    session.api().fail_next_submit("connection reset");
    let result = session.add_entry(&make_entry());

    assert!(matches!(result, Err(ClientError::Connection(_))));
    assert_eq!(session.current().unwrap(), &before);
    assert!(session.current().unwrap().entries.is_empty());
    assert!(!session.is_stale());
    // No re-fetch after a failed submission.
    assert_eq!(session.api().calls().last().unwrap(), "POST /patients/p-1/entries");
}

#[test]
fn test_submission_then_refetch_in_order() {
    let mut session = open_session();
    let created = session.add_entry(&make_entry()).unwrap();

    let calls = session.api().calls();
    assert_eq!(
        calls[calls.len() - 2..],
        ["POST /patients/p-1/entries".to_string(), "GET /patients/p-1".to_string()]
    );

    let patient = session.current().unwrap();
    assert_eq!(patient.entries.len(), 1);
    assert_eq!(patient.entries[0].id, created.id);
    assert_eq!(patient.entries[0].details, make_entry());
}

#[test]
fn test_refetch_failure_appends_locally_and_marks_stale() {
    let mut session = open_session();
    session.api().fail_next_fetch("timeout");

    let created = session.add_entry(&make_entry()).unwrap();

    assert!(session.is_stale());
    let patient = session.current().unwrap();
    assert_eq!(patient.entries.len(), 1);
    assert_eq!(patient.entries[0].id, created.id);
    // The server copy has it too.
    assert_eq!(session.api().stored_patient("p-1").unwrap().entries.len(), 1);
}

#[test]
fn test_add_entry_from_form_rejects_unknown_code() {
    let mut session = open_session();
    let fields = EntryFields {
        description: "Back pain".into(),
        date: "2024-03-01".into(),
        specialist: "Dr. Y".into(),
        ..Default::default()
    };

    let result = session.add_entry_from_form(EntryKind::HealthCheck, &fields, &["Z99".to_string()]);
    assert!(matches!(result, Err(ClientError::Form(_))));

    let created = session
        .add_entry_from_form(EntryKind::HealthCheck, &fields, &["M54.5".to_string()])
        .unwrap();
    assert_eq!(created.details.diagnosis_codes(), ["M54.5".to_string()]);
}

#[test]
fn test_add_patient_does_not_change_open_patient() {
    let mut session = open_session();
    let created = session
        .add_patient(&NewPatient {
            name: "John Roe".into(),
            date_of_birth: "1990-01-01".into(),
            ssn: "010190-222B".into(),
            gender: Gender::Male,
            occupation: "Driver".into(),
        })
        .unwrap();

    assert_ne!(created.id, "p-1");
    assert_eq!(session.current().unwrap().id, "p-1");
    assert_eq!(session.api().fetch_all_patients().unwrap().len(), 2);
}
