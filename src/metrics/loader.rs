//! Load the industry metrics CSV
//!
//! The first column is the company acronym and becomes the table index.
//! Every other column is numeric once thousands separators are removed;
//! blank cells are kept as missing values.

use super::{Column, ColumnData, MetricsTable};
use crate::error::{DashboardError, Result};
use csv::ReaderBuilder;
use std::io::Read;
use std::num::ParseIntError;
use std::path::Path;

/// Default path to the metrics file
pub const DEFAULT_METRICS_PATH: &str = "data/industry_metrics.csv";

/// Header of the index column
pub const KEY_COLUMN: &str = "Company Acronym";

/// Character stripped from numeric text before parsing
pub const THOUSANDS_SEPARATOR: char = ',';

/// Cell text read as a missing value, in addition to blank cells
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Blank cells and spreadsheet missing markers carry no value
pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Strip thousands separators and parse a nullable integer.
/// Blank text and missing markers are a missing value.
pub fn clean_integer(raw: &str) -> std::result::Result<Option<i64>, ParseIntError> {
    if is_missing(raw) {
        return Ok(None);
    }
    let cleaned: String = raw.trim().chars().filter(|&c| c != THOUSANDS_SEPARATOR).collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned.parse().map(Some)
}

/// Infer a column's type from its raw cells.
///
/// A column carrying thousands separators must clean to integers. A column
/// without separators is integer if every cell parses as one, otherwise
/// float if every cell parses as a finite decimal.
fn parse_column(name: &str, index: &[String], raw: &[String]) -> Result<ColumnData> {
    let format_error = |row: usize| DashboardError::Format {
        column: name.to_string(),
        company: index[row].clone(),
        value: raw[row].clone(),
    };

    let mut integers = Vec::with_capacity(raw.len());
    let mut first_non_integer = None;
    for (row, cell) in raw.iter().enumerate() {
        match clean_integer(cell) {
            Ok(value) => integers.push(value),
            Err(_) => {
                first_non_integer = Some(row);
                break;
            }
        }
    }

    let Some(bad_row) = first_non_integer else {
        return Ok(ColumnData::Integer(integers));
    };

    if raw.iter().any(|cell| cell.contains(THOUSANDS_SEPARATOR)) {
        return Err(format_error(bad_row));
    }

    let mut floats = Vec::with_capacity(raw.len());
    for (row, cell) in raw.iter().enumerate() {
        if is_missing(cell) {
            floats.push(None);
            continue;
        }
        match cell.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => floats.push(Some(v)),
            _ => return Err(format_error(row)),
        }
    }

    log::debug!("Column '{}' parsed as float", name);
    Ok(ColumnData::Float(floats))
}

/// Load metrics from a CSV file
pub fn load_metrics<P: AsRef<Path>>(path: P) -> Result<MetricsTable> {
    let path = path.as_ref();
    log::info!("Loading metrics from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_metrics_from_reader(file)
}

/// Load metrics from any reader (e.g., string buffer)
pub fn load_metrics_from_reader<R: Read>(reader: R) -> Result<MetricsTable> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    match headers.first() {
        Some(first) if first == KEY_COLUMN => {}
        other => {
            return Err(DashboardError::MissingKeyColumn {
                expected: KEY_COLUMN.to_string(),
                found: other.cloned().unwrap_or_default(),
            });
        }
    }

    let mut index = Vec::new();
    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len() - 1];

    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let company = record.get(0).unwrap_or_default().trim();
        if company.is_empty() {
            return Err(DashboardError::EmptyCompany { row: row + 1 });
        }
        index.push(company.to_string());

        for (col, cells) in raw_columns.iter_mut().enumerate() {
            cells.push(record.get(col + 1).unwrap_or_default().to_string());
        }
    }

    let columns = headers[1..]
        .iter()
        .zip(&raw_columns)
        .map(|(name, raw)| {
            Ok(Column {
                name: name.clone(),
                data: parse_column(name, &index, raw)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let table = MetricsTable::new(KEY_COLUMN, index, columns)?;
    log::info!("Loaded {} companies x {} metrics", table.len(), table.columns().len());
    Ok(table)
}

/// Load metrics from the default data/industry_metrics.csv location
pub fn load_default_metrics() -> Result<MetricsTable> {
    load_metrics(DEFAULT_METRICS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Format an integer the way the source spreadsheet does
    fn format_thousands(value: Option<i64>) -> String {
        let Some(n) = value else {
            return String::new();
        };
        let digits = n.unsigned_abs().to_string();
        let mut out = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(THOUSANDS_SEPARATOR);
            }
            out.push(c);
        }
        if n < 0 {
            out.insert(0, '-');
        }
        out
    }

    #[test]
    fn test_clean_round_trip() {
        let samples = [
            None,
            Some(0),
            Some(7),
            Some(999),
            Some(1_000),
            Some(-45_678),
            Some(12_345_678_901),
            Some(i64::MAX),
            Some(i64::MIN),
        ];
        for n in samples {
            assert_eq!(clean_integer(&format_thousands(n)), Ok(n), "value {:?}", n);
        }
        assert_eq!(format_thousands(Some(1_234_567)), "1,234,567");
    }

    #[test]
    fn test_clean_rejects_text() {
        assert!(clean_integer("12a,000").is_err());
        assert!(clean_integer("1,234.5").is_err());
        assert_eq!(clean_integer("   "), Ok(None));
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "Company Acronym,Asset,Offices,Solvency\n\
                   NLIC,\"171,400,000\",190,1.5\n\
                   LICN,\"98,250\",,2\n";
        let table = load_metrics_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.index(), &["NLIC".to_string(), "LICN".to_string()]);
        assert_eq!(
            table.column("Asset").unwrap().data,
            ColumnData::Integer(vec![Some(171_400_000), Some(98_250)])
        );
        assert_eq!(
            table.column("Offices").unwrap().data,
            ColumnData::Integer(vec![Some(190), None])
        );
        assert_eq!(
            table.column("Solvency").unwrap().data,
            ColumnData::Float(vec![Some(1.5), Some(2.0)])
        );
    }

    #[test]
    fn test_non_numeric_text_is_fatal() {
        let csv = "Company Acronym,Asset\nNLIC,\"1,000\"\nLICN,abc\n";
        let err = load_metrics_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DashboardError::Format { column, company, value } => {
                assert_eq!(column, "Asset");
                assert_eq!(company, "LICN");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_markers_load_as_missing() {
        let csv = "Company Acronym,Asset,Solvency\n\
                   NLIC,\"1,000\",1.5\n\
                   LICN,NA,nan\n\
                   ALICL,n/a,#N/A\n\
                   PLIC,NULL,2.25\n";
        let table = load_metrics_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(
            table.column("Asset").unwrap().data,
            ColumnData::Integer(vec![Some(1_000), None, None, None])
        );
        assert_eq!(
            table.column("Solvency").unwrap().data,
            ColumnData::Float(vec![Some(1.5), None, None, Some(2.25)])
        );
        assert_eq!(clean_integer(" N/A "), Ok(None));
        assert!(!is_missing("NAN"));
    }

    #[test]
    fn test_decimal_with_separator_is_fatal() {
        let csv = "Company Acronym,Asset\nNLIC,\"1,000.5\"\n";
        assert!(matches!(
            load_metrics_from_reader(csv.as_bytes()),
            Err(DashboardError::Format { .. })
        ));
    }

    #[test]
    fn test_key_column_required() {
        let csv = "Company,Asset\nNLIC,1\n";
        let err = load_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingKeyColumn { ref found, .. } if found == "Company"));
    }

    #[test]
    fn test_duplicate_company_is_fatal() {
        let csv = "Company Acronym,Asset\nNLIC,1\nNLIC,2\n";
        assert!(matches!(
            load_metrics_from_reader(csv.as_bytes()),
            Err(DashboardError::DuplicateCompany { .. })
        ));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "\u{feff}Company Acronym,Employees").unwrap();
        writeln!(file, "NLIC,\"1,120\"").unwrap();
        drop(file);

        let table = load_metrics(&path).unwrap();
        assert_eq!(table.series("Employees").unwrap().values(), &[Some(1120.0)]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_metrics(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(DashboardError::Io(_))));
    }

    #[test]
    fn test_load_default_metrics() {
        let table = load_default_metrics().expect("Failed to load sample metrics");
        assert_eq!(table.len(), 13);
        for column in [
            "First Year Premiums",
            "Gross Insurance Contract Liabilities",
            "Catastrophic Reserves",
            "Asset",
            "Liability",
            "Paid-up Capital",
            "Net Profit",
            "Gross Earned Premiums",
            "Net Claims and Benefits Paid",
            "Operating Expense",
            "Offices",
            "Agents",
            "Employees",
        ] {
            assert!(table.column(column).is_ok(), "missing column {}", column);
        }
    }
}
