//! Entry form: raw field values to a `NewEntry`.

use super::{check_date, require, require_date, FormError, FormResult};
use crate::models::{
    is_known_code, Diagnosis, Discharge, EntryBase, EntryKind, HealthCheckEntry,
    HealthCheckRating, HospitalEntry, NewEntry, OccupationalHealthcareEntry, SickLeave,
};

/// Raw values of every field the entry form can show.
///
/// Only the fields belonging to the selected kind end up in the payload;
/// the rest are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub description: String,
    pub date: String,
    pub specialist: String,
    /// Rating as picked in the form (0-3)
    pub health_check_rating: i64,
    pub employer_name: String,
    pub sick_leave_start_date: String,
    pub sick_leave_end_date: String,
    pub discharge_date: String,
    pub discharge_criteria: String,
}

impl EntryFields {
    /// Project the fields relevant to `kind` into a payload.
    ///
    /// Empty strings are passed through as-is. The rating is the only value
    /// checked here, since `HealthCheckRating` cannot hold anything outside 0-3.
    pub fn build(&self, kind: EntryKind, diagnosis_codes: &[String]) -> FormResult<NewEntry> {
        let base = EntryBase {
            description: self.description.clone(),
            date: self.date.clone(),
            specialist: self.specialist.clone(),
            diagnosis_codes: Some(diagnosis_codes.to_vec()),
        };

        let entry = match kind {
            EntryKind::HealthCheck => NewEntry::HealthCheck(HealthCheckEntry {
                base,
                health_check_rating: HealthCheckRating::try_from(self.health_check_rating)?,
            }),
            EntryKind::Hospital => NewEntry::Hospital(HospitalEntry {
                base,
                discharge: Discharge {
                    date: self.discharge_date.clone(),
                    criteria: self.discharge_criteria.clone(),
                },
            }),
            EntryKind::OccupationalHealthcare => {
                NewEntry::OccupationalHealthcare(OccupationalHealthcareEntry {
                    base,
                    employer_name: self.employer_name.clone(),
                    sick_leave: self.sick_leave(),
                })
            }
        };

        Ok(entry)
    }

    /// Validate, then build.
    pub fn build_validated(
        &self,
        kind: EntryKind,
        diagnosis_codes: &[String],
        catalog: &[Diagnosis],
    ) -> FormResult<NewEntry> {
        self.validate(kind, diagnosis_codes, catalog)?;
        self.build(kind, diagnosis_codes)
    }

    /// Check required fields, date formats and diagnosis codes for `kind`.
    ///
    /// Fields that `kind` does not use are not inspected.
    pub fn validate(
        &self,
        kind: EntryKind,
        diagnosis_codes: &[String],
        catalog: &[Diagnosis],
    ) -> FormResult<()> {
        require("description", &self.description)?;
        require_date("date", &self.date)?;
        require("specialist", &self.specialist)?;

        match kind {
            EntryKind::HealthCheck => {
                HealthCheckRating::try_from(self.health_check_rating)?;
            }
            EntryKind::Hospital => {
                require_date("discharge.date", &self.discharge_date)?;
                require("discharge.criteria", &self.discharge_criteria)?;
            }
            EntryKind::OccupationalHealthcare => {
                require("employerName", &self.employer_name)?;
                if !self.sick_leave_start_date.is_empty() {
                    check_date("sickLeave.startDate", &self.sick_leave_start_date)?;
                }
                if !self.sick_leave_end_date.is_empty() {
                    check_date("sickLeave.endDate", &self.sick_leave_end_date)?;
                }
            }
        }

        if let Some(code) = diagnosis_codes.iter().find(|c| !is_known_code(catalog, c)) {
            return Err(FormError::UnknownDiagnosis(code.clone()));
        }

        Ok(())
    }

    /// Sick leave exists only if at least one boundary was supplied.
    fn sick_leave(&self) -> Option<SickLeave> {
        if self.sick_leave_start_date.is_empty() && self.sick_leave_end_date.is_empty() {
            return None;
        }
        Some(SickLeave {
            start_date: self.sick_leave_start_date.clone(),
            end_date: self.sick_leave_end_date.clone(),
        })
    }
}

/// Build an entry payload from a kind tag as received from a caller.
///
/// Fails with [`FormError::UnknownEntryKind`] when `kind` is not one of the
/// three entry tags.
pub fn build_entry_input(
    kind: &str,
    fields: &EntryFields,
    diagnosis_codes: &[String],
) -> FormResult<NewEntry> {
    let kind: EntryKind = kind.parse()?;
    fields.build(kind, diagnosis_codes)
}
