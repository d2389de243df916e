use anyhow::Context;
use clap::{Parser, Subcommand};

use patientor_client::{ClientConfig, HttpPatientApi, MockPatientApi, PatientApi, PatientSession};
use patientor_core::render::{render_entry, render_patient, render_summaries};
use patientor_core::{EntryFields, EntryKind, PatientFields};

#[derive(Parser)]
#[command(name = "patientor")]
#[command(about = "Patient record client")]
struct Cli {
    /// API base URL (overrides PATIENTOR_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Use built-in sample data instead of the API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    Patients,
    /// Show a patient with their entries
    Show {
        /// Patient ID
        id: String,
    },
    /// List the diagnosis catalog
    Diagnoses,
    /// Add a new patient
    AddPatient {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ssn: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_of_birth: String,
        #[arg(long)]
        occupation: String,
        /// female, male or other
        #[arg(long, default_value = "")]
        gender: String,
    },
    /// Add an entry to a patient
    AddEntry {
        /// Patient ID
        id: String,
        /// HealthCheck, Hospital or OccupationalHealthcare
        kind: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Visit date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        specialist: String,
        /// Health check rating (0-3)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        rating: i64,
        #[arg(long, default_value = "")]
        employer: String,
        #[arg(long, default_value = "")]
        sick_leave_start: String,
        #[arg(long, default_value = "")]
        sick_leave_end: String,
        #[arg(long, default_value = "")]
        discharge_date: String,
        #[arg(long, default_value = "")]
        discharge_criteria: String,
        /// Diagnosis code (repeatable)
        #[arg(long = "diagnosis")]
        diagnoses: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    patientor_client::logging::init();

    let cli = Cli::parse();

    if cli.offline {
        return run(cli.command, PatientSession::new(MockPatientApi::with_sample_data()));
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.base_url.as_deref() {
        config = config.with_base_url(url)?;
    }
    let api = HttpPatientApi::new(&config)?;
    run(cli.command, PatientSession::new(api))
}

fn run<A: PatientApi>(command: Commands, mut session: PatientSession<A>) -> anyhow::Result<()> {
    match command {
        Commands::Patients => {
            let patients = session.list_patients().context("fetching patients")?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                print!("{}", render_summaries(&patients));
            }
        }
        Commands::Show { id } => {
            session.open(&id).with_context(|| format!("opening patient {}", id))?;
            if let Some(patient) = session.current() {
                print!("{}", render_patient(patient, session.diagnoses()));
            }
        }
        Commands::Diagnoses => {
            for diagnosis in session.load_diagnoses().context("fetching diagnoses")? {
                match &diagnosis.latin {
                    Some(latin) => println!("{} ({})", diagnosis.label(), latin),
                    None => println!("{}", diagnosis.label()),
                }
            }
        }
        Commands::AddPatient {
            name,
            ssn,
            date_of_birth,
            occupation,
            gender,
        } => {
            let fields = PatientFields {
                name,
                ssn,
                date_of_birth,
                occupation,
                gender,
            };
            let patient = fields.build_validated()?;
            let created = session.add_patient(&patient).context("adding patient")?;
            println!("Added patient {} ({})", created.name, created.id);
        }
        Commands::AddEntry {
            id,
            kind,
            description,
            date,
            specialist,
            rating,
            employer,
            sick_leave_start,
            sick_leave_end,
            discharge_date,
            discharge_criteria,
            diagnoses,
        } => {
            let kind: EntryKind = kind.parse()?;
            let fields = EntryFields {
                description,
                date,
                specialist,
                health_check_rating: rating,
                employer_name: employer,
                sick_leave_start_date: sick_leave_start,
                sick_leave_end_date: sick_leave_end,
                discharge_date,
                discharge_criteria,
            };

            session.open(&id).with_context(|| format!("opening patient {}", id))?;
            let created = session
                .add_entry_from_form(kind, &fields, &diagnoses)
                .context("adding entry")?;

            println!("Added entry {}", created.id);
            print!("{}", render_entry(&created, session.diagnoses()));
            if session.is_stale() {
                eprintln!("warning: patient could not be reloaded; showing local copy");
            }
        }
    }

    Ok(())
}
