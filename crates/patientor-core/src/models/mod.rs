//! Domain models for patient records.

mod diagnosis;
mod entry;
mod patient;

pub use diagnosis::*;
pub use entry::*;
pub use patient::*;
