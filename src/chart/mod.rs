//! Chart factories producing plotly-compatible figures

mod bar;
mod pie;
pub mod figure;
pub mod style;

pub use bar::{make_bar, BarSpec, Orientation};
pub use pie::{make_pie, PieSpec};
pub use figure::{AxisValues, Figure, Trace};
