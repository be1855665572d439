use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medrec_cli::types::{CheckResult, DoctorSummary, LoadResult};
use medrec_store::SeverityTrend;

pub fn print_check(result: &CheckResult) {
    println!("File: {}", result.path.display());
    println!("Kind: {}", result.kind.label());
    if result.valid {
        println!("Valid: {} records ready to import", result.accepted);
    } else {
        println!(
            "Invalid: {} records accepted, {} problems",
            result.accepted,
            result.errors.len()
        );
    }

    if !result.preview.is_empty() {
        let mut table = Table::new();
        table.set_header(
            result
                .kind
                .export_columns()
                .iter()
                .map(|column| header_cell(column)),
        );
        apply_table_style(&mut table);
        for row in &result.preview {
            table.add_row(row.iter().map(Cell::new));
        }
        println!();
        println!("Preview:");
        println!("{table}");
    }
    print_errors(&result.errors);
}

pub fn print_load_summary(result: &LoadResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("File"),
        header_cell("Merged"),
        header_cell("Rejected"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_merged = 0usize;
    let mut total_rejected = 0usize;
    for import in &result.imports {
        total_merged += import.merged;
        total_rejected += import.errors.len();
        table.add_row(vec![
            Cell::new(import.kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(import.path.display()),
            Cell::new(import.merged),
            count_cell(import.errors.len(), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_merged).add_attribute(Attribute::Bold),
        count_cell(total_rejected, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    for import in &result.imports {
        if import.errors.is_empty() {
            continue;
        }
        eprintln!("{} rejections ({}):", import.kind.label(), import.path.display());
        for error in &import.errors {
            eprintln!("- {error}");
        }
    }

    let admin = &result.admin;
    println!();
    println!(
        "Patients: {}  Visits: {}  Doctors: {}  This month: {}",
        admin.patients, admin.visits, admin.doctors, admin.visits_this_month
    );
    if let Some(doctor) = &result.prescribing_doctor {
        println!("Prescriptions imported as: {doctor}");
    }

    if !result.recent_visits.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Visit"),
            header_cell("Patient"),
            header_cell("Date"),
            header_cell("Severity"),
            header_cell("Doctor"),
        ]);
        apply_table_style(&mut table);
        for visit in &result.recent_visits {
            table.add_row(vec![
                Cell::new(&visit.visit_id),
                Cell::new(&visit.patient_id),
                Cell::new(&visit.visit_date),
                Cell::new(format!("{}/5", visit.severity_score)),
                Cell::new(&visit.doctor_name),
            ]);
        }
        println!();
        println!("Recent visits:");
        println!("{table}");
    }

    for doctor in &result.doctors {
        print_doctor(doctor);
    }
    for path in &result.exported {
        println!("Exported: {}", path.display());
    }
}

fn print_doctor(doctor: &DoctorSummary) {
    let overview = &doctor.overview;
    println!();
    println!(
        "{} ({}, {}): {} patients, {} visits ({} IP / {} OP), {} prescriptions, avg severity {:.1}",
        doctor.name,
        doctor.user_id,
        doctor.speciality,
        overview.patients,
        overview.visits,
        doctor.breakdown.inpatient,
        doctor.breakdown.outpatient,
        overview.prescriptions,
        overview.average_severity
    );
    if doctor.roster.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Name"),
        header_cell("Visits"),
        header_cell("Last visit"),
        header_cell("Trend"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for line in &doctor.roster {
        table.add_row(vec![
            Cell::new(&line.patient_id),
            Cell::new(&line.full_name),
            Cell::new(line.visits),
            line.last_visit
                .as_ref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            trend_cell(line.trend),
        ]);
    }
    println!("{table}");
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in errors {
        eprintln!("- {error}");
    }
}

fn trend_cell(trend: SeverityTrend) -> Cell {
    match trend {
        SeverityTrend::Increased => Cell::new("↑ increased").fg(Color::Red),
        SeverityTrend::Decreased => Cell::new("↓ decreased").fg(Color::Green),
        SeverityTrend::Neutral => dim_cell("- neutral"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
