//! Pie chart factory for the market share view

use super::figure::{Figure, Layout, PieTrace, Trace};
use super::style;
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub title: String,
    /// Radial offset per wedge, as a fraction of the radius
    pub pull: Option<Vec<f64>>,
}

impl PieSpec {
    pub fn new(labels: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            labels,
            values,
            title: String::new(),
            pull: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn pull(mut self, pull: Vec<f64>) -> Self {
        self.pull = Some(pull);
        self
    }
}

/// Build a pie with thin black wedge borders and a bold title
pub fn make_pie(spec: &PieSpec) -> Result<Figure> {
    if spec.labels.len() != spec.values.len() {
        return Err(DashboardError::Shape {
            labels: spec.labels.len(),
            values: spec.values.len(),
        });
    }
    if let Some(pull) = &spec.pull {
        if pull.len() != spec.labels.len() {
            return Err(DashboardError::Shape {
                labels: spec.labels.len(),
                values: pull.len(),
            });
        }
    }

    let trace = PieTrace {
        labels: spec.labels.clone(),
        values: spec.values.clone(),
        pull: spec.pull.clone(),
        marker: style::outlined(None, style::PIE_BORDER_WIDTH),
    };

    Ok(Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: style::bold_text(&spec.title),
            xaxis: None,
            yaxis: None,
            showlegend: None,
            bargap: None,
        },
    })
}
