//! Patient models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use crate::form::FormError;

/// Patient gender as sent over the wire (`female`, `male`, `other`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    #[default]
    Other,
}

impl Gender {
    /// All genders in form order.
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| FormError::UnknownGender(s.to_string()))
    }
}

/// A patient record as returned by `GET /patients/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Server-assigned identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: String,
    /// National identifier
    pub ssn: String,
    pub gender: Gender,
    pub occupation: String,
    /// Medical entries in server order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Patient {
    /// Build the persisted form of a new patient (identifier supplied by the server).
    pub fn from_new(id: String, patient: NewPatient) -> Self {
        Self {
            id,
            name: patient.name,
            date_of_birth: patient.date_of_birth,
            ssn: patient.ssn,
            gender: patient.gender,
            occupation: patient.occupation,
            entries: Vec::new(),
        }
    }

    /// Append an entry returned by the server.
    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Non-sensitive view of this patient.
    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            gender: self.gender,
            occupation: self.occupation.clone(),
        }
    }
}

/// Payload for `POST /patients`. Identifier and entries are assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub gender: Gender,
    pub occupation: String,
}

/// Patient listing row from `GET /patients` (no ssn, no entries).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub occupation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_new_patient() -> NewPatient {
        NewPatient {
            name: "Martin Riggs".into(),
            date_of_birth: "1979-01-30".into(),
            ssn: "300179-77A".into(),
            gender: Gender::Male,
            occupation: "Cop".into(),
        }
    }

    #[test]
    fn test_gender_wire_values() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
        assert!(serde_json::from_str::<Gender>("\"Female\"").is_err());
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!(matches!(
            "robot".parse::<Gender>(),
            Err(FormError::UnknownGender(g)) if g == "robot"
        ));
        assert_eq!(Gender::default(), Gender::Other);
    }

    #[test]
    fn test_new_patient_camel_case() {
        let value = serde_json::to_value(make_new_patient()).unwrap();
        assert_eq!(value["dateOfBirth"], "1979-01-30");
        assert!(value.get("id").is_none());
        assert!(value.get("entries").is_none());
    }

    #[test]
    fn test_from_new_starts_without_entries() {
        let patient = Patient::from_new("d2773336".into(), make_new_patient());
        assert_eq!(patient.id, "d2773336");
        assert!(patient.entries.is_empty());
        assert_eq!(patient.summary().name, "Martin Riggs");
    }

    #[test]
    fn test_summary_ignores_sensitive_fields() {
        let json = r#"{"id":"1","name":"A","dateOfBirth":"1970-01-01","ssn":"x","gender":"other","occupation":"B","entries":[]}"#;
        let summary: PatientSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, "1");
        let back = serde_json::to_value(&summary).unwrap();
        assert!(back.get("ssn").is_none());
    }
}
