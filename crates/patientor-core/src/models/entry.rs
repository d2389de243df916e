//! Medical entry models.
//!
//! An entry is one of three variants, discriminated on the wire by the
//! `type` field. Each variant owns its sub-records, so a health check can
//! never carry an employer and a hospital stay can never carry sick leave.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::FormError;

/// The three entry tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    HealthCheck,
    Hospital,
    OccupationalHealthcare,
}

impl EntryKind {
    /// All kinds in menu order.
    pub const ALL: [EntryKind; 3] = [
        EntryKind::HealthCheck,
        EntryKind::Hospital,
        EntryKind::OccupationalHealthcare,
    ];

    /// Wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::HealthCheck => "HealthCheck",
            EntryKind::Hospital => "Hospital",
            EntryKind::OccupationalHealthcare => "OccupationalHealthcare",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FormError::UnknownEntryKind(s.to_string()))
    }
}

/// Health check risk rating, serialized as an integer 0-3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum HealthCheckRating {
    Healthy = 0,
    LowRisk = 1,
    HighRisk = 2,
    CriticalRisk = 3,
}

impl HealthCheckRating {
    pub const ALL: [HealthCheckRating; 4] = [
        HealthCheckRating::Healthy,
        HealthCheckRating::LowRisk,
        HealthCheckRating::HighRisk,
        HealthCheckRating::CriticalRisk,
    ];

    /// Numeric value on the wire.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Human-readable label, as offered in the entry form.
    pub fn label(&self) -> &'static str {
        match self {
            HealthCheckRating::Healthy => "Healthy",
            HealthCheckRating::LowRisk => "Low risk",
            HealthCheckRating::HighRisk => "High risk",
            HealthCheckRating::CriticalRisk => "Critical risk",
        }
    }
}

impl TryFrom<i64> for HealthCheckRating {
    type Error = FormError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        HealthCheckRating::ALL
            .into_iter()
            .find(|r| i64::from(r.value()) == value)
            .ok_or(FormError::RatingOutOfRange(value))
    }
}

impl TryFrom<u8> for HealthCheckRating {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HealthCheckRating::try_from(i64::from(value))
    }
}

impl From<HealthCheckRating> for u8 {
    fn from(rating: HealthCheckRating) -> Self {
        rating.value()
    }
}

/// Fields shared by every entry variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntryBase {
    pub description: String,
    /// Visit date (YYYY-MM-DD)
    pub date: String,
    /// Name of the attending specialist
    pub specialist: String,
    /// Codes from the diagnosis catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_codes: Option<Vec<String>>,
}

/// Hospital discharge sub-record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Discharge {
    pub date: String,
    pub criteria: String,
}

/// Sick leave sub-record. Either boundary may be empty, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckEntry {
    #[serde(flatten)]
    pub base: EntryBase,
    pub health_check_rating: HealthCheckRating,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HospitalEntry {
    #[serde(flatten)]
    pub base: EntryBase,
    pub discharge: Discharge,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalHealthcareEntry {
    #[serde(flatten)]
    pub base: EntryBase,
    pub employer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeave>,
}

/// Payload for `POST /patients/{id}/entries`: an entry without its identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum NewEntry {
    HealthCheck(HealthCheckEntry),
    Hospital(HospitalEntry),
    OccupationalHealthcare(OccupationalHealthcareEntry),
}

impl NewEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            NewEntry::HealthCheck(_) => EntryKind::HealthCheck,
            NewEntry::Hospital(_) => EntryKind::Hospital,
            NewEntry::OccupationalHealthcare(_) => EntryKind::OccupationalHealthcare,
        }
    }

    /// Shared fields of whichever variant this is.
    pub fn base(&self) -> &EntryBase {
        match self {
            NewEntry::HealthCheck(e) => &e.base,
            NewEntry::Hospital(e) => &e.base,
            NewEntry::OccupationalHealthcare(e) => &e.base,
        }
    }

    /// Selected diagnosis codes, empty when none were sent.
    pub fn diagnosis_codes(&self) -> &[String] {
        self.base().diagnosis_codes.as_deref().unwrap_or(&[])
    }

    /// Attach a server-assigned identifier.
    pub fn with_id(self, id: impl Into<String>) -> Entry {
        Entry {
            id: id.into(),
            details: self,
        }
    }
}

/// A persisted medical entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    #[serde(flatten)]
    pub details: NewEntry,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        self.details.kind()
    }

    pub fn base(&self) -> &EntryBase {
        self.details.base()
    }
}
