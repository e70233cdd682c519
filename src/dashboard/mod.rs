//! Dashboard layout tree and the section-by-section chart script

pub mod layout;
pub mod reference;
mod script;

pub use layout::{Block, EmbeddedChart, Page, Pane, Tab};
pub use reference::{load_reference, load_reference_from_reader, load_default_reference, ReferenceSeries};
pub use script::*;
