//! Hospital record ingestion.
//!
//! Turns raw CSV text into a grid of trimmed string cells, loads that text
//! from disk, and writes stored collections back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use medrec_ingest::{ReadOptions, read_csv_grid};
//!
//! let grid = read_csv_grid(Path::new("patients.csv"), ReadOptions::default())?;
//! let header = &grid[0];
//! ```

mod csv;
mod error;
mod export;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use self::csv::{
    Grid, MAX_CSV_FILE_SIZE, ReadOptions, check_file_size, parse_csv, parse_csv_line,
    read_csv_grid, read_csv_text, trim_cell,
};

// === Export ===
pub use export::{write_records, write_records_to};
