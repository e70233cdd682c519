//! Chart objects serialized in plotly.js figure format (`{data, layout}`)

use super::Orientation;
use serde::Serialize;

/// A renderable chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
}

/// Values on one bar axis: company labels or numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Categories(Vec<String>),
    Numbers(Vec<Option<f64>>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Categories(v) => v.len(),
            AxisValues::Numbers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: AxisValues,
    pub y: AxisValues,
    pub orientation: Orientation,
    pub marker: Marker,
}

impl BarTrace {
    /// Axis carrying the company labels
    pub fn categories(&self) -> &AxisValues {
        match self.orientation {
            Orientation::Vertical => &self.x,
            Orientation::Horizontal => &self.y,
        }
    }

    /// Axis carrying the bar lengths
    pub fn values(&self) -> &AxisValues {
        match self.orientation {
            Orientation::Vertical => &self.y,
            Orientation::Horizontal => &self.x,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<Vec<f64>>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// First bar trace, if this is a bar chart
    pub fn bar(&self) -> Option<&BarTrace> {
        self.data.iter().find_map(|t| match t {
            Trace::Bar(bar) => Some(bar),
            Trace::Pie(_) => None,
        })
    }

    /// First pie trace, if this is a pie chart
    pub fn pie(&self) -> Option<&PieTrace> {
        self.data.iter().find_map(|t| match t {
            Trace::Pie(pie) => Some(pie),
            Trace::Bar(_) => None,
        })
    }

    /// Number of categories (bars or wedges) across all traces
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|t| match t {
                Trace::Bar(bar) => bar.categories().len(),
                Trace::Pie(pie) => pie.labels.len(),
            })
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
