use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;

use medrec_ingest::ReadOptions;
use medrec_model::{RecordKind, formulary_for};
use medrec_cli::pipeline::{DoctorLogin, LoadPlan, check_file, run_load};
use medrec_cli::types::{CheckResult, LoadResult};

use crate::cli::{CheckArgs, LoadArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_columns(kind: RecordKind) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(kind.label())]);
    apply_table_style(&mut table);
    for (position, column) in kind.columns().iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), (*column).to_string()]);
    }
    println!("{table}");
}

pub fn run_formulary(speciality: &str) {
    let formulary = formulary_for(speciality);
    println!("Category: {}", formulary.category);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Drug")]);
    apply_table_style(&mut table);
    for drug in formulary.drugs {
        table.add_row(vec![*drug]);
    }
    println!("{table}");
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    check_file(args.kind.into(), &args.file, ReadOptions::default())
}

pub fn run_load_command(args: &LoadArgs) -> Result<LoadResult> {
    let mut read_options = ReadOptions::default();
    if let Some(limit) = args.max_file_size {
        read_options.max_file_size = limit;
    }
    let doctor_login = match (&args.doctor_user, &args.doctor_password) {
        (Some(user_id), Some(password)) => Some(DoctorLogin {
            user_id: user_id.clone(),
            password: password.clone(),
        }),
        _ => None,
    };
    let plan = LoadPlan {
        doctors: args.doctors.clone(),
        patients: args.patients.clone(),
        visits: args.visits.clone(),
        prescriptions: args.prescriptions.clone(),
        doctor_login,
        export_dir: args.export_dir.clone(),
        read_options,
        today: args.today.unwrap_or_else(|| Local::now().date_naive()),
    };
    run_load(&plan)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json(value: &serde_json::Value, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("render result for {}", path.display()))?;
    println!("{text}");
    Ok(())
}
