//! Per-company reference figures that are not in the metrics table
//!
//! Growth rates and solvency margins are published separately from the
//! financial statements; the market share pie also takes its wedge offsets
//! from here.

use crate::error::{DashboardError, Result};
use crate::metrics::KeyedSeries;
use csv::Reader;
use std::io::Read;
use std::path::Path;

/// Default path to the reference series file
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference_series.csv";

/// Raw CSV row matching reference_series.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Company Acronym")]
    company: String,
    #[serde(rename = "First Year Premium Growth Rate")]
    first_year_premium_growth: f64,
    #[serde(rename = "Gross Premium Growth Rate")]
    gross_premium_growth: f64,
    #[serde(rename = "Solvency Margin")]
    solvency_margin: f64,
    #[serde(rename = "Market Share Pull", default)]
    market_share_pull: Option<f64>,
}

/// Literal series keyed by company acronym
#[derive(Debug, Clone)]
pub struct ReferenceSeries {
    /// Year-on-year first year premium growth, in percent
    pub first_year_premium_growth: KeyedSeries,
    /// Year-on-year gross premium growth, in percent
    pub gross_premium_growth: KeyedSeries,
    /// Solvency margin, in percent
    pub solvency_margin: KeyedSeries,
    /// Wedge offset in the market share pie; absent means no offset
    pub market_share_pull: KeyedSeries,
}

impl ReferenceSeries {
    pub fn empty() -> Self {
        Self {
            first_year_premium_growth: KeyedSeries::new("First Year Premium Growth Rate"),
            gross_premium_growth: KeyedSeries::new("Gross Premium Growth Rate"),
            solvency_margin: KeyedSeries::new("Solvency Margin"),
            market_share_pull: KeyedSeries::new("Market Share Pull"),
        }
    }

    /// Add one company's figures; each company may appear only once
    fn push(&mut self, line: usize, row: CsvRow) -> Result<()> {
        let company = row.company.trim().to_string();
        if company.is_empty() {
            return Err(DashboardError::EmptyCompany { row: line });
        }
        if self.solvency_margin.get(&company).is_some() {
            return Err(DashboardError::DuplicateCompany { company });
        }
        self.first_year_premium_growth.insert(company.clone(), row.first_year_premium_growth);
        self.gross_premium_growth.insert(company.clone(), row.gross_premium_growth);
        self.solvency_margin.insert(company.clone(), row.solvency_margin);
        if let Some(pull) = row.market_share_pull {
            self.market_share_pull.insert(company, pull);
        }
        Ok(())
    }
}

/// Load reference series from a CSV file
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceSeries> {
    log::info!("Loading reference series from {}", path.as_ref().display());
    let file = std::fs::File::open(path)?;
    load_reference_from_reader(file)
}

/// Load reference series from any reader
pub fn load_reference_from_reader<R: Read>(reader: R) -> Result<ReferenceSeries> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut reference = ReferenceSeries::empty();

    for (row, result) in csv_reader.deserialize().enumerate() {
        let record: CsvRow = result?;
        reference.push(row + 1, record)?;
    }

    log::debug!("Loaded reference series for {} companies", reference.solvency_margin.len());
    Ok(reference)
}

/// Load reference series from the default data/reference_series.csv location
pub fn load_default_reference() -> Result<ReferenceSeries> {
    load_reference(DEFAULT_REFERENCE_PATH)
}
