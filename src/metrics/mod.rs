//! Company metrics table, CSV loading and derived series

mod table;
mod series;
pub mod loader;

pub use table::{Column, ColumnData, MetricsTable};
pub use series::{KeyedSeries, Series};
pub use loader::{load_metrics, load_metrics_from_reader, load_default_metrics, clean_integer};
