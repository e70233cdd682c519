//! Layout hosts: turn a dashboard page into a displayable document

mod html;

pub use html::HtmlHost;

use crate::dashboard::Page;
use crate::error::Result;

/// A surface that can display a page of embedded charts
pub trait LayoutHost {
    /// Render the whole page; charts appear in declaration order
    fn render(&self, page: &Page) -> Result<String>;
}

/// Emits the page tree as pretty JSON, figures included
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHost;

impl LayoutHost for JsonHost {
    fn render(&self, page: &Page) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }
}
