//! Plain-text views of patients and entries.

use crate::display::{gender_icon, rating_hearts};
use crate::models::{Diagnosis, Entry, NewEntry, Patient, PatientSummary};

/// Render one entry as an indented block.
///
/// Diagnosis codes are expanded with names from `catalog` when known.
pub fn render_entry(entry: &Entry, catalog: &[Diagnosis]) -> String {
    let kind = entry.kind().display();
    let base = entry.base();
    let mut out = String::new();

    out.push_str(&format!(
        "[{}] {} ({})\n",
        kind.label,
        base.date,
        kind.icon.as_str()
    ));
    out.push_str(&format!("  {}\n", base.description));
    out.push_str(&format!("  Diagnosed by: {}\n", base.specialist));

    for code in entry.details.diagnosis_codes() {
        match catalog.iter().find(|d| &d.code == code) {
            Some(d) => out.push_str(&format!("  - {} {}\n", d.code, d.name)),
            None => out.push_str(&format!("  - {}\n", code)),
        }
    }

    match &entry.details {
        NewEntry::Hospital(h) => {
            out.push_str("  Discharge:\n");
            out.push_str(&format!("    Date: {}\n", h.discharge.date));
            out.push_str(&format!("    Criteria: {}\n", h.discharge.criteria));
        }
        NewEntry::OccupationalHealthcare(o) => {
            out.push_str(&format!("  Employer: {}\n", o.employer_name));
            if let Some(leave) = &o.sick_leave {
                out.push_str(&format!(
                    "  Sick Leave: {} - {}\n",
                    leave.start_date, leave.end_date
                ));
            }
        }
        NewEntry::HealthCheck(c) => {
            let rating = i64::from(c.health_check_rating.value());
            let hearts: Vec<&str> = rating_hearts(rating).iter().map(|h| h.as_str()).collect();
            out.push_str(&format!(
                "  Health Check Rating: {} [{}]\n",
                c.health_check_rating.label(),
                hearts.join(" ")
            ));
        }
    }

    out
}

/// Render the patient detail view followed by every entry.
pub fn render_patient(patient: &Patient, catalog: &[Diagnosis]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n",
        patient.name,
        gender_icon(patient.gender).as_str()
    ));
    out.push_str(&format!("Date of Birth: {}\n", patient.date_of_birth));
    out.push_str(&format!("Occupation: {}\n", patient.occupation));
    out.push_str(&format!("SSN: {}\n\n", patient.ssn));

    if patient.entries.is_empty() {
        out.push_str("No entries.\n");
    } else {
        out.push_str("Entries:\n");
        for entry in &patient.entries {
            out.push_str(&render_entry(entry, catalog));
        }
    }

    out
}

/// One line per patient, as in the patient list table.
pub fn render_summaries(patients: &[PatientSummary]) -> String {
    let mut out = String::new();
    for p in patients {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            p.id, p.name, p.gender, p.occupation, p.date_of_birth
        ));
    }
    out
}
