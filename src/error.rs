//! Error types shared by the loader, chart factory and renderer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Column '{column}' has non-numeric value '{value}' for company '{company}'")]
    Format {
        column: String,
        company: String,
        value: String,
    },

    #[error("Missing key column '{expected}' (found '{found}')")]
    MissingKeyColumn { expected: String, found: String },

    #[error("Company '{company}' appears more than once")]
    DuplicateCompany { company: String },

    #[error("Row {row} has an empty company identifier")]
    EmptyCompany { row: usize },

    #[error("Column '{column}' not found")]
    MissingColumn { column: String },

    #[error("Shape mismatch: {labels} labels but {values} values")]
    Shape { labels: usize, values: usize },

    #[error("Division by zero computing {numerator} / {denominator} for company '{company}'")]
    DivisionByZero {
        company: String,
        numerator: String,
        denominator: String,
    },

    #[error("Series '{series}' has no value for company '{company}'")]
    MissingCompany { series: String, company: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
