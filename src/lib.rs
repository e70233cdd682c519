//! Insurance Dashboard - industry analytics for life insurance companies
//!
//! This library provides:
//! - Loading and cleaning the industry metrics CSV (thousands separators, nullable integers)
//! - Derived ratio series and company-keyed reference series
//! - Bar and pie chart factories with fixed dashboard styling
//! - The dashboard layout itself and HTML/JSON rendering

pub mod error;
pub mod metrics;
pub mod chart;
pub mod dashboard;
pub mod render;

// Re-export commonly used types
pub use error::{DashboardError, Result};
pub use metrics::{MetricsTable, Series, KeyedSeries, load_metrics};
pub use chart::{make_bar, make_pie, BarSpec, PieSpec, Figure, Orientation};
pub use dashboard::{build_dashboard, load_reference, Page, ReferenceSeries};
pub use render::{HtmlHost, JsonHost, LayoutHost};
