//! Patient form: raw field values to a `NewPatient`.

use super::{require, require_date, FormResult};
use crate::models::{Gender, NewPatient};

/// Raw values of the add-patient form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientFields {
    pub name: String,
    pub ssn: String,
    pub date_of_birth: String,
    pub occupation: String,
    /// Gender as typed; empty means `other`
    pub gender: String,
}

impl PatientFields {
    /// Validate every field and build the payload.
    pub fn build_validated(&self) -> FormResult<NewPatient> {
        require("name", &self.name)?;
        require("ssn", &self.ssn)?;
        require_date("dateOfBirth", &self.date_of_birth)?;
        require("occupation", &self.occupation)?;

        let gender = if self.gender.trim().is_empty() {
            Gender::default()
        } else {
            self.gender.trim().to_lowercase().parse()?
        };

        Ok(NewPatient {
            name: self.name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            ssn: self.ssn.trim().to_string(),
            gender,
            occupation: self.occupation.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;

    fn make_fields() -> PatientFields {
        PatientFields {
            name: "Hans Gruber".into(),
            ssn: "250470-555L".into(),
            date_of_birth: "1970-04-25".into(),
            occupation: "Technician".into(),
            gender: String::new(),
        }
    }

    #[test]
    fn test_gender_defaults_to_other() {
        let patient = make_fields().build_validated().unwrap();
        assert_eq!(patient.gender, Gender::Other);
        assert_eq!(patient.name, "Hans Gruber");
    }

    #[test]
    fn test_gender_is_case_insensitive() {
        let mut fields = make_fields();
        fields.gender = "Male".into();
        assert_eq!(fields.build_validated().unwrap().gender, Gender::Male);

        fields.gender = "unknown".into();
        assert_eq!(
            fields.build_validated(),
            Err(FormError::UnknownGender("unknown".into()))
        );
    }

    #[test]
    fn test_required_fields() {
        let mut fields = make_fields();
        fields.ssn = String::new();
        assert_eq!(fields.build_validated(), Err(FormError::MissingField("ssn")));

        let mut fields = make_fields();
        fields.date_of_birth = "25/04/1970".into();
        assert!(matches!(
            fields.build_validated(),
            Err(FormError::InvalidDate { field: "dateOfBirth", .. })
        ));
    }
}
