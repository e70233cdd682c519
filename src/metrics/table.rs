//! In-memory metrics table indexed by company acronym

use crate::error::{DashboardError, Result};
use super::Series;
use serde::Serialize;
use std::collections::HashSet;

/// Typed values of one metric column
///
/// Integer columns come from cells that were plain or separator-formatted
/// integers; float columns only appear when a column holds decimals and no
/// thousands separators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
    Integer(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(values) => values.len(),
            ColumnData::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a row position widened to f64; `None` for missing cells
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            ColumnData::Integer(values) => values.get(row).copied().flatten().map(|v| v as f64),
            ColumnData::Float(values) => values.get(row).copied().flatten(),
        }
    }

    /// All values widened to f64, preserving missing cells
    pub fn to_f64(&self) -> Vec<Option<f64>> {
        (0..self.len()).map(|row| self.get_f64(row)).collect()
    }

    pub fn as_integers(&self) -> Option<&[Option<i64>]> {
        match self {
            ColumnData::Integer(values) => Some(values.as_slice()),
            ColumnData::Float(_) => None,
        }
    }
}

/// A named metric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Cleaned metrics, one row per company
///
/// Row order is the order of the source file and is the order every chart
/// uses for its categories.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsTable {
    key_name: String,
    index: Vec<String>,
    columns: Vec<Column>,
}

impl MetricsTable {
    /// Build a table, checking that the index is unique and every column
    /// has one value per company
    pub fn new(key_name: impl Into<String>, index: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(index.len());
        for company in &index {
            if !seen.insert(company.as_str()) {
                return Err(DashboardError::DuplicateCompany { company: company.clone() });
            }
        }

        for column in &columns {
            if column.data.len() != index.len() {
                return Err(DashboardError::Shape {
                    labels: index.len(),
                    values: column.data.len(),
                });
            }
        }

        Ok(Self {
            key_name: key_name.into(),
            index,
            columns,
        })
    }

    /// Name of the key column (e.g. "Company Acronym")
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Company identifiers in row order
    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DashboardError::MissingColumn { column: name.to_string() })
    }

    /// Row position of a company, if present
    pub fn position(&self, company: &str) -> Option<usize> {
        self.index.iter().position(|c| c == company)
    }

    /// A column as a labelled f64 series aligned with the index
    pub fn series(&self, name: &str) -> Result<Series> {
        let column = self.column(name)?;
        Series::new(name, self.index.clone(), column.data.to_f64())
    }

    /// Elementwise `numerator / denominator` over two columns
    pub fn ratio(&self, numerator: &str, denominator: &str) -> Result<Series> {
        Series::ratio(&self.series(numerator)?, &self.series(denominator)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_company_table() -> MetricsTable {
        MetricsTable::new(
            "Company Acronym",
            vec!["AAA".to_string(), "BBB".to_string()],
            vec![
                Column {
                    name: "Asset".to_string(),
                    data: ColumnData::Integer(vec![Some(100), Some(200)]),
                },
                Column {
                    name: "Liability".to_string(),
                    data: ColumnData::Integer(vec![Some(50), None]),
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_column_lookup() {
        let table = two_company_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.key_name(), "Company Acronym");
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Asset", "Liability"]);
        assert_eq!(table.position("BBB"), Some(1));
        assert_eq!(table.position("CCC"), None);

        let liability = table.column("Liability").unwrap();
        assert_eq!(liability.data.as_integers(), Some(&[Some(50), None][..]));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let table = two_company_table();
        let err = table.series("Net Profit").unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { ref column } if column == "Net Profit"));
    }

    #[test]
    fn test_series_preserves_missing_values() {
        let table = two_company_table();
        let series = table.series("Liability").unwrap();
        assert_eq!(series.labels(), &["AAA".to_string(), "BBB".to_string()]);
        assert_eq!(series.values(), &[Some(50.0), None]);
    }

    #[test]
    fn test_duplicate_company_rejected() {
        let result = MetricsTable::new(
            "Company Acronym",
            vec!["AAA".to_string(), "AAA".to_string()],
            Vec::new(),
        );
        assert!(matches!(result, Err(DashboardError::DuplicateCompany { .. })));
    }

    #[test]
    fn test_ragged_column_rejected() {
        let result = MetricsTable::new(
            "Company Acronym",
            vec!["AAA".to_string(), "BBB".to_string()],
            vec![Column {
                name: "Asset".to_string(),
                data: ColumnData::Float(vec![Some(1.5)]),
            }],
        );
        assert!(matches!(result, Err(DashboardError::Shape { labels: 2, values: 1 })));
    }
}
