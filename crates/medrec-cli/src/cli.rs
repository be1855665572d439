//! CLI argument definitions for `medrec`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medrec_model::RecordKind;

#[derive(Parser)]
#[command(
    name = "medrec",
    version,
    about = "Hospital records - validate and import patient, visit and prescription CSV files",
    long_about = "Validate hospital record CSV files and import them into an in-memory store.\n\n\
                  Patients, visits and doctor rosters are imported as the hospital\n\
                  administrator; prescriptions as a logged-in doctor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient names and record identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the columns a record file must carry.
    Columns {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Validate one CSV file without importing it.
    Check(CheckArgs),

    /// Show the drugs a speciality prescribes from.
    Formulary {
        /// Speciality name; unknown names show the general list.
        speciality: String,
    },

    /// Import record files into a fresh store and report on the result.
    Load(LoadArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the full validation result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Doctor roster (user_id, doctor_name, password, doctor_speciality).
    #[arg(long, value_name = "FILE")]
    pub doctors: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    pub patients: Option<PathBuf>,

    /// Visits; their patients must be stored or in --patients.
    #[arg(long, value_name = "FILE")]
    pub visits: Option<PathBuf>,

    /// Prescriptions, imported under the --doctor-user session.
    #[arg(long, value_name = "FILE", requires = "doctor_user")]
    pub prescriptions: Option<PathBuf>,

    /// Doctor user ID to log in as.
    #[arg(long = "doctor-user", value_name = "USER_ID", requires = "doctor_password")]
    pub doctor_user: Option<String>,

    #[arg(long = "doctor-password", value_name = "PASSWORD", requires = "doctor_user")]
    pub doctor_password: Option<String>,

    /// Write the merged collections as CSV files into this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Reference date for the monthly visit count (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<chrono::NaiveDate>,

    /// Refuse files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    #[value(alias = "patient")]
    Patients,
    #[value(alias = "visit")]
    Visits,
    #[value(alias = "doctor")]
    Doctors,
    #[value(alias = "prescription")]
    Prescriptions,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Patients => RecordKind::Patient,
            KindArg::Visits => RecordKind::Visit,
            KindArg::Doctors => RecordKind::Doctor,
            KindArg::Prescriptions => RecordKind::Prescription,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
