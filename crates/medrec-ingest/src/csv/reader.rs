//! Loading CSV text from disk.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

use super::parser::{Grid, parse_csv};

/// Maximum file size for CSV loading (50 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Options for reading source files.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Files larger than this are refused before reading.
    pub max_file_size: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

fn open_error(path: &Path, err: io::Error) -> IngestError {
    if err.kind() == io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads a whole CSV file as text.
///
/// UTF-8 only. A UTF-8 byte-order mark is stripped; UTF-16 files and invalid
/// UTF-8 are refused.
pub fn read_csv_text(path: &Path, options: ReadOptions) -> Result<String> {
    check_file_size(path, options.max_file_size)?;

    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding: "non-UTF-8",
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Reads and parses a CSV file into a grid.
pub fn read_csv_grid(path: &Path, options: ReadOptions) -> Result<Grid> {
    let text = read_csv_text(path, options)?;
    let grid = parse_csv(&text);
    debug!(
        path = %path.display(),
        bytes = text.len(),
        rows = grid.len(),
        "parsed csv file"
    );
    Ok(grid)
}
