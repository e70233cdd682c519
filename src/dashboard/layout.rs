//! Page tree handed to a layout host: tabs, weighted rows, callouts, charts

use crate::chart::Figure;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub title: String,
    /// Use the full browser width instead of a centered column
    pub wide: bool,
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub label: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Header { text: String },
    Callout { text: String },
    Row { panes: Vec<Pane> },
    Chart(EmbeddedChart),
}

/// One column of a row; its width is `weight` relative to its siblings
#[derive(Debug, Clone, Serialize)]
pub struct Pane {
    pub weight: u32,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedChart {
    pub figure: Figure,
    /// Stretch to the width of the enclosing pane
    pub fill_width: bool,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            wide: false,
            tabs: Vec::new(),
        }
    }

    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// All embedded charts in declaration order
    pub fn charts(&self) -> Vec<&EmbeddedChart> {
        let mut out = Vec::new();
        for tab in &self.tabs {
            collect_charts(&tab.blocks, &mut out);
        }
        out
    }

    pub fn chart_count(&self) -> usize {
        self.charts().len()
    }
}

fn collect_charts<'a>(blocks: &'a [Block], out: &mut Vec<&'a EmbeddedChart>) {
    for block in blocks {
        match block {
            Block::Chart(chart) => out.push(chart),
            Block::Row { panes } => {
                for pane in panes {
                    collect_charts(&pane.blocks, out);
                }
            }
            Block::Header { .. } | Block::Callout { .. } => {}
        }
    }
}

impl Tab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            blocks: Vec::new(),
        }
    }

    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Header { text: text.into() });
        self
    }

    pub fn row(mut self, panes: Vec<Pane>) -> Self {
        self.blocks.push(Block::Row { panes });
        self
    }
}

impl Pane {
    pub fn new(weight: u32) -> Self {
        Self {
            weight,
            blocks: Vec::new(),
        }
    }

    pub fn callout(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Callout { text: text.into() });
        self
    }

    pub fn chart(mut self, figure: Figure) -> Self {
        self.blocks.push(Block::Chart(EmbeddedChart { figure, fill_width: false }));
        self
    }

    pub fn wide_chart(mut self, figure: Figure) -> Self {
        self.blocks.push(Block::Chart(EmbeddedChart { figure, fill_width: true }));
        self
    }

    pub fn row(mut self, panes: Vec<Pane>) -> Self {
        self.blocks.push(Block::Row { panes });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{make_bar, BarSpec};

    fn figure(title: &str) -> Figure {
        make_bar(&BarSpec::new(vec!["A".to_string()], vec![Some(1.0)]).title(title)).unwrap()
    }

    #[test]
    fn test_charts_in_declaration_order() {
        let page = Page::new("Test").wide().tab(
            Tab::new("Dashboard").header("DASHBOARD").row(vec![
                Pane::new(1).callout("LEFT").wide_chart(figure("first")),
                Pane::new(3).row(vec![
                    Pane::new(1).chart(figure("second")),
                    Pane::new(1).chart(figure("third")),
                ]),
            ]),
        );

        assert!(page.wide);
        let titles: Vec<_> = page.charts().iter().map(|c| c.figure.title().to_string()).collect();
        assert_eq!(titles, vec!["<b>first</b>", "<b>second</b>", "<b>third</b>"]);
        assert!(page.charts()[0].fill_width);
        assert!(!page.charts()[1].fill_width);
    }

    #[test]
    fn test_page_serializes_block_kinds() {
        let page = Page::new("Test").tab(Tab::new("Only").header("H").row(vec![Pane::new(2).callout("C")]));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["tabs"][0]["blocks"][0]["kind"], "header");
        assert_eq!(json["tabs"][0]["blocks"][1]["kind"], "row");
        assert_eq!(json["tabs"][0]["blocks"][1]["panes"][0]["weight"], 2);
        assert_eq!(json["tabs"][0]["blocks"][1]["panes"][0]["blocks"][0]["text"], "C");
    }
}
