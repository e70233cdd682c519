//! Bar chart factory

use super::figure::{AxisValues, BarTrace, Figure, Trace};
use super::style;
use crate::error::{DashboardError, Result};
use crate::metrics::Series;
use serde::Serialize;

/// Which axis the company labels run along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Labels on the horizontal axis, bars grow upward
    #[default]
    #[serde(rename = "v")]
    Vertical,
    /// Labels on the vertical axis, bars grow rightward
    #[serde(rename = "h")]
    Horizontal,
}

impl Orientation {
    pub fn border_width(&self) -> f64 {
        match self {
            Orientation::Vertical => style::VERTICAL_BORDER_WIDTH,
            Orientation::Horizontal => style::HORIZONTAL_BORDER_WIDTH,
        }
    }

    pub fn bar_gap(&self) -> Option<f64> {
        match self {
            Orientation::Vertical => None,
            Orientation::Horizontal => Some(style::HORIZONTAL_BAR_GAP),
        }
    }
}

/// Data and styling for one bar chart
///
/// `x_label` always titles the horizontal axis and `y_label` the vertical
/// one, whichever of them carries the company labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub orientation: Orientation,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
}

impl BarSpec {
    pub fn new(labels: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            labels,
            values,
            orientation: Orientation::Vertical,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            color: style::DEFAULT_FILL.to_string(),
        }
    }

    pub fn from_series(series: Series) -> Self {
        let (labels, values) = series.into_parts();
        Self::new(labels, values)
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn build(&self) -> Result<Figure> {
        make_bar(self)
    }
}

/// Build a styled single-trace bar chart.
///
/// Labels and values are used as given: no sorting or aggregation. Empty
/// input gives an empty chart; mismatched lengths are a shape error.
pub fn make_bar(spec: &BarSpec) -> Result<Figure> {
    if spec.labels.len() != spec.values.len() {
        return Err(DashboardError::Shape {
            labels: spec.labels.len(),
            values: spec.values.len(),
        });
    }

    let categories = AxisValues::Categories(spec.labels.clone());
    let numbers = AxisValues::Numbers(spec.values.clone());
    let (x, y) = match spec.orientation {
        Orientation::Vertical => (categories, numbers),
        Orientation::Horizontal => (numbers, categories),
    };

    let trace = BarTrace {
        x,
        y,
        orientation: spec.orientation,
        marker: style::outlined(Some(&spec.color), spec.orientation.border_width()),
    };

    let mut layout = style::bar_layout(&spec.title, &spec.x_label, &spec.y_label);
    layout.bargap = spec.orientation.bar_gap();

    Ok(Figure {
        data: vec![Trace::Bar(trace)],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies() -> Vec<String> {
        vec!["NLIC".to_string(), "LICN".to_string(), "ALICL".to_string()]
    }

    fn spec() -> BarSpec {
        BarSpec::new(companies(), vec![Some(3.0), None, Some(1.5)])
            .title("Net Profit")
            .x_label("Company Acronym")
            .y_label("Amount (in NPR)")
            .color("#5A6EF8")
    }

    #[test]
    fn test_vertical_axes_follow_input_order() {
        let fig = make_bar(&spec()).unwrap();
        let bar = fig.bar().unwrap();

        assert_eq!(bar.x, AxisValues::Categories(companies()));
        assert_eq!(bar.y, AxisValues::Numbers(vec![Some(3.0), None, Some(1.5)]));
        assert_eq!(bar.categories(), &bar.x);
        assert_eq!(bar.marker.line.width, 2.0);
        assert_eq!(bar.marker.line.color, "black");
        assert_eq!(bar.marker.color.as_deref(), Some("#5A6EF8"));
        assert_eq!(fig.layout.bargap, None);
    }

    #[test]
    fn test_horizontal_swaps_axes() {
        let fig = make_bar(&spec().horizontal()).unwrap();
        let bar = fig.bar().unwrap();

        assert_eq!(bar.orientation, Orientation::Horizontal);
        assert_eq!(bar.y, AxisValues::Categories(companies()));
        assert_eq!(bar.x, AxisValues::Numbers(vec![Some(3.0), None, Some(1.5)]));
        assert_eq!(bar.values(), &bar.x);
        assert_eq!(bar.marker.line.width, 0.9);
        assert_eq!(fig.layout.bargap, Some(0.2));
    }

    #[test]
    fn test_titles_are_bold_and_legend_hidden() {
        let fig = make_bar(&spec()).unwrap();
        assert_eq!(fig.title(), "<b>Net Profit</b>");
        assert_eq!(fig.layout.xaxis.as_ref().unwrap().title.text, "<b>Company Acronym</b>");
        assert_eq!(fig.layout.yaxis.as_ref().unwrap().title.text, "<b>Amount (in NPR)</b>");
        assert_eq!(fig.layout.showlegend, Some(false));
    }

    #[test]
    fn test_identical_inputs_identical_charts() {
        let first = make_bar(&spec()).unwrap();
        let second = make_bar(&spec()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_empty_input_gives_empty_chart() {
        let fig = make_bar(&BarSpec::new(Vec::new(), Vec::new()).title("Empty")).unwrap();
        assert_eq!(fig.point_count(), 0);
        assert!(fig.bar().unwrap().values().is_empty());
        assert_eq!(fig.title(), "<b>Empty</b>");
    }

    #[test]
    fn test_length_mismatch_is_shape_error() {
        let err = make_bar(&BarSpec::new(companies(), vec![Some(1.0)])).unwrap_err();
        assert!(matches!(err, DashboardError::Shape { labels: 3, values: 1 }));
    }

    #[test]
    fn test_default_fill_is_blue() {
        let fig = BarSpec::new(companies(), vec![None; 3]).build().unwrap();
        assert_eq!(fig.bar().unwrap().marker.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_serializes_as_plotly_figure() {
        let fig = make_bar(&spec().horizontal()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();

        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["orientation"], "h");
        assert_eq!(json["data"][0]["y"][0], "NLIC");
        assert!(json["data"][0]["x"][1].is_null());
        assert_eq!(json["data"][0]["marker"]["line"]["width"], 0.9);
        assert_eq!(json["layout"]["bargap"], 0.2);
        assert_eq!(json["layout"]["showlegend"], false);
    }
}
