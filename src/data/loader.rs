use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use super::columns::{normalize_header, ColumnMap, ColumnRole};
use super::model::{LoadStats, PriceCatalog, PriceRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a whole file was left out of the catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required columns: {}", join_roles(.0))]
    MissingColumns(Vec<ColumnRole>),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Why a single data row was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("row has {found} fields, at least {required} required")]
    ShortRow { found: usize, required: usize },
    #[error("{role} value {value:?} is not a number")]
    NotANumber { role: ColumnRole, value: String },
    #[error("weight is zero")]
    ZeroWeight,
}

fn join_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Scan `dir` for price lists and load every usable row.
///
/// Never fails: an unreadable directory yields an empty catalog, and files
/// that cannot be used are logged and skipped.
pub fn load_directory(dir: &Path, marker: &str) -> PriceCatalog {
    let paths = match candidate_files(dir, marker) {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("Cannot open directory {}: {e}", dir.display());
            return PriceCatalog::default();
        }
    };

    let mut records = Vec::new();
    let mut stats = LoadStats {
        files_matched: paths.len(),
        ..LoadStats::default()
    };

    for path in &paths {
        let file_name = base_name(path);
        match load_file(path) {
            Ok(loaded) => {
                log::debug!(
                    "{file_name}: {} rows loaded, {} rows skipped",
                    loaded.records.len(),
                    loaded.rows_skipped
                );
                stats.files_loaded += 1;
                stats.rows_skipped += loaded.rows_skipped;
                records.extend(loaded.records);
            }
            Err(e @ LoadError::MissingColumns(_)) => {
                log::warn!("Skipping {file_name}: {e}");
                stats.files_skipped += 1;
            }
            Err(e) => {
                log::error!("Failed to read {file_name}: {e}");
                stats.files_skipped += 1;
            }
        }
    }

    log::debug!("Scan of {}: {stats}", dir.display());
    PriceCatalog::from_records(records, stats)
}

/// Regular files in `dir` whose name contains `marker` (case-insensitive),
/// sorted by file name.
pub fn candidate_files(dir: &Path, marker: &str) -> io::Result<Vec<PathBuf>> {
    let marker = marker.to_lowercase();
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        let name = entry.file_name();
        if !name.to_string_lossy().to_lowercase().contains(&marker) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

// ---------------------------------------------------------------------------
// Single file
// ---------------------------------------------------------------------------

/// Rows accepted from one file plus the number rejected.
#[derive(Debug, Default)]
pub struct FileLoad {
    pub records: Vec<PriceRecord>,
    pub rows_skipped: usize,
}

/// Load one comma-delimited price list.
///
/// The header row decides which columns hold name, price and weight. Rows
/// that fail [`parse_row`] are counted and dropped; any read or decoding
/// error discards the whole file.
pub fn load_file(path: &Path) -> Result<FileLoad, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let columns = ColumnMap::resolve(&headers).map_err(LoadError::MissingColumns)?;

    let source_file = base_name(path);
    let mut loaded = FileLoad::default();

    for result in reader.records() {
        let row = result?;
        match parse_row(&row, &columns, &source_file) {
            Ok(record) => loaded.records.push(record),
            Err(_) => loaded.rows_skipped += 1,
        }
    }

    Ok(loaded)
}

/// Turn one data row into a record.
pub fn parse_row(row: &StringRecord, columns: &ColumnMap, source_file: &str) -> Result<PriceRecord, RowError> {
    let required = columns.required_len();
    if row.len() < required {
        return Err(RowError::ShortRow {
            found: row.len(),
            required,
        });
    }

    let name = row[columns.name].trim();
    let price = parse_field(&row[columns.price], ColumnRole::Price)?;
    let weight = parse_field(&row[columns.weight], ColumnRole::Weight)?;

    PriceRecord::new(name, price, weight, source_file).ok_or(RowError::ZeroWeight)
}

fn parse_field(raw: &str, role: ColumnRole) -> Result<f64, RowError> {
    parse_decimal(raw).ok_or_else(|| RowError::NotANumber {
        role,
        value: raw.to_string(),
    })
}

/// Parse a decimal that may use `,` instead of `.` as separator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
