//! Diagnosis reference data.

use serde::{Deserialize, Serialize};

/// A diagnosis from the code catalog. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    /// Diagnosis code (ICD-10 style, e.g. "M54.5") - unique key
    pub code: String,
    /// English name
    pub name: String,
    /// Latin name, when the catalog has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin: Option<String>,
}

impl Diagnosis {
    /// Create a diagnosis without a latin name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            latin: None,
        }
    }

    /// Label used when listing or selecting diagnoses.
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// Check whether `code` exists in the catalog.
pub fn is_known_code(catalog: &[Diagnosis], code: &str) -> bool {
    catalog.iter().any(|d| d.code == code)
}
