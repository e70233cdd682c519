//! Fixed chart styling shared by every bar and pie

use super::figure::{Axis, Layout, Marker, MarkerLine, Text};

/// Border color of bars and wedges
pub const BORDER_COLOR: &str = "black";

/// Fill used when a chart names no color
pub const DEFAULT_FILL: &str = "blue";

pub const VERTICAL_BORDER_WIDTH: f64 = 2.0;
pub const HORIZONTAL_BORDER_WIDTH: f64 = 0.9;

/// Gap between adjacent horizontal bars, as a fraction of the band
pub const HORIZONTAL_BAR_GAP: f64 = 0.2;

pub const PIE_BORDER_WIDTH: f64 = 0.5;

/// Wrap text in bold markup
pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

pub fn bold_text(text: &str) -> Text {
    Text { text: bold(text) }
}

/// Solid fill with a black outline
pub fn outlined(color: Option<&str>, width: f64) -> Marker {
    Marker {
        color: color.map(str::to_string),
        line: MarkerLine {
            color: BORDER_COLOR.to_string(),
            width,
        },
    }
}

/// Layout with bold title and axis titles and the legend hidden
pub fn bar_layout(title: &str, x_label: &str, y_label: &str) -> Layout {
    Layout {
        title: bold_text(title),
        xaxis: Some(Axis { title: bold_text(x_label) }),
        yaxis: Some(Axis { title: bold_text(y_label) }),
        showlegend: Some(false),
        bargap: None,
    }
}
