//! Presentation mapping: entry kinds and risk ratings to display tokens.
//!
//! Every function here is total. Unknown kinds fall into the neutral
//! "Other" bucket and out-of-range ratings render gray.

use std::fmt;

use crate::models::{EntryKind, Gender, HealthCheckRating};

/// Chip/border color token for an entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipColor {
    Error,
    Info,
    Success,
    Default,
}

impl ChipColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipColor::Error => "error",
            ChipColor::Info => "info",
            ChipColor::Success => "success",
            ChipColor::Default => "default",
        }
    }
}

/// Icon token for an entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryIcon {
    LocalHospital,
    Work,
    HealthAndSafety,
    MedicalServices,
}

impl EntryIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryIcon::LocalHospital => "LocalHospital",
            EntryIcon::Work => "Work",
            EntryIcon::HealthAndSafety => "HealthAndSafety",
            EntryIcon::MedicalServices => "MedicalServices",
        }
    }
}

/// How an entry kind is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDisplay {
    pub color: ChipColor,
    pub icon: EntryIcon,
    pub label: &'static str,
}

/// Fallback for tags outside the three known kinds.
pub const OTHER_KIND: KindDisplay = KindDisplay {
    color: ChipColor::Default,
    icon: EntryIcon::MedicalServices,
    label: "Other",
};

impl EntryKind {
    /// Display tokens for this kind.
    pub fn display(&self) -> KindDisplay {
        match self {
            EntryKind::Hospital => KindDisplay {
                color: ChipColor::Error,
                icon: EntryIcon::LocalHospital,
                label: "Hospital",
            },
            EntryKind::OccupationalHealthcare => KindDisplay {
                color: ChipColor::Info,
                icon: EntryIcon::Work,
                label: "Occupational Healthcare",
            },
            EntryKind::HealthCheck => KindDisplay {
                color: ChipColor::Success,
                icon: EntryIcon::HealthAndSafety,
                label: "Health Check",
            },
        }
    }
}

/// Display tokens for a raw kind tag.
pub fn entry_kind_display(kind: &str) -> KindDisplay {
    kind.parse::<EntryKind>()
        .map(|k| k.display())
        .unwrap_or(OTHER_KIND)
}

/// Color class for a health check rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskColor {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl RiskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Yellow => "yellow",
            RiskColor::Orange => "orange",
            RiskColor::Red => "red",
            RiskColor::Gray => "gray",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color for a numeric rating; anything outside 0-3 is gray.
pub fn risk_rating_color(rating: i64) -> RiskColor {
    match HealthCheckRating::try_from(rating) {
        Ok(r) => r.color(),
        Err(_) => RiskColor::Gray,
    }
}

impl HealthCheckRating {
    pub fn color(&self) -> RiskColor {
        match self {
            HealthCheckRating::Healthy => RiskColor::Green,
            HealthCheckRating::LowRisk => RiskColor::Yellow,
            HealthCheckRating::HighRisk => RiskColor::Orange,
            HealthCheckRating::CriticalRisk => RiskColor::Red,
        }
    }
}

/// Colors of the four rating hearts: filled up to `rating`, gray after.
pub fn rating_hearts(rating: i64) -> [RiskColor; 4] {
    let color = risk_rating_color(rating);
    let mut hearts = [RiskColor::Gray; 4];
    for (i, heart) in hearts.iter_mut().enumerate() {
        if (i as i64) <= rating {
            *heart = color;
        }
    }
    hearts
}

/// Icon token shown next to a patient's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderIcon {
    Male,
    Female,
    Transgender,
}

impl GenderIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderIcon::Male => "Male",
            GenderIcon::Female => "Female",
            GenderIcon::Transgender => "Transgender",
        }
    }
}

pub fn gender_icon(gender: Gender) -> GenderIcon {
    match gender {
        Gender::Male => GenderIcon::Male,
        Gender::Female => GenderIcon::Female,
        Gender::Other => GenderIcon::Transgender,
    }
}
