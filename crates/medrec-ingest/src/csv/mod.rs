//! CSV parsing and file loading.

mod parser;
mod reader;

pub use parser::{Grid, parse_csv, parse_csv_line, trim_cell};
pub use reader::{MAX_CSV_FILE_SIZE, ReadOptions, check_file_size, read_csv_grid, read_csv_text};
