//! Self-contained HTML page with plotly.js charts
//!
//! Rows are flex containers whose panes grow by their declared weights.
//! Each chart gets its own `<div>` and a `Plotly.newPlot` call fed with the
//! figure JSON.

use super::LayoutHost;
use crate::dashboard::{Block, EmbeddedChart, Page, Pane, Tab};
use crate::error::Result;
use chrono::{DateTime, Local};

/// plotly.js bundle loaded by the page
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone)]
pub struct HtmlHost {
    plotly_src: String,
    generated_at: Option<DateTime<Local>>,
}

impl Default for HtmlHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlHost {
    pub fn new() -> Self {
        Self {
            plotly_src: PLOTLY_CDN.to_string(),
            generated_at: None,
        }
    }

    /// Load plotly.js from another location (e.g. a vendored copy)
    pub fn with_plotly_src(mut self, src: impl Into<String>) -> Self {
        self.plotly_src = src.into();
        self
    }

    /// Stamp the footer with a generation time
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = Some(at);
        self
    }
}

impl LayoutHost for HtmlHost {
    fn render(&self, page: &Page) -> Result<String> {
        let mut ctx = RenderContext::default();

        let mut nav = String::new();
        let mut panels = String::new();
        for (i, tab) in page.tabs.iter().enumerate() {
            let active = if i == 0 { " active" } else { "" };
            nav.push_str(&format!(
                r#"<button class="tab-button{active}" data-tab="tab-{i}">{label}</button>"#,
                label = escape_html(&tab.label),
            ));
            panels.push_str(&format!(
                r#"<section class="tab-panel{active}" id="tab-{i}">{body}</section>"#,
                body = render_tab(tab, &mut ctx)?,
            ));
        }

        let footer = match &self.generated_at {
            Some(at) => format!("<footer>Generated {}</footer>", at.format("%Y-%m-%d %H:%M")),
            None => String::new(),
        };

        log::debug!("Rendered {} charts across {} tabs", ctx.next_id, page.tabs.len());

        Ok(format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly_src}"></script>
    <style>{css}</style>
</head>
<body>
    <main class="{layout}">
        <nav class="tabs">{nav}</nav>
        {panels}
        {footer}
    </main>
    <script>
{tab_js}
{charts}
    </script>
</body>
</html>
"##,
            title = escape_html(&page.title),
            plotly_src = escape_html(&self.plotly_src),
            css = inline_css(),
            layout = if page.wide { "wide" } else { "centered" },
            tab_js = inline_tab_javascript(),
            charts = ctx.scripts.join("\n"),
        ))
    }
}

#[derive(Default)]
struct RenderContext {
    next_id: usize,
    scripts: Vec<String>,
}

fn render_tab(tab: &Tab, ctx: &mut RenderContext) -> Result<String> {
    render_blocks(&tab.blocks, ctx)
}

fn render_blocks(blocks: &[Block], ctx: &mut RenderContext) -> Result<String> {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Header { text } => out.push_str(&format!("<h2>{}</h2>", escape_html(text))),
            Block::Callout { text } => {
                out.push_str(&format!(r#"<div class="callout">{}</div>"#, escape_html(text)))
            }
            Block::Row { panes } => out.push_str(&render_row(panes, ctx)?),
            Block::Chart(chart) => out.push_str(&render_chart(chart, ctx)?),
        }
    }
    Ok(out)
}

fn render_row(panes: &[Pane], ctx: &mut RenderContext) -> Result<String> {
    let mut out = String::from(r#"<div class="row">"#);
    for pane in panes {
        out.push_str(&format!(
            r#"<div class="pane" style="flex: {} 1 0">{}</div>"#,
            pane.weight,
            render_blocks(&pane.blocks, ctx)?,
        ));
    }
    out.push_str("</div>");
    Ok(out)
}

fn render_chart(chart: &EmbeddedChart, ctx: &mut RenderContext) -> Result<String> {
    let id = format!("chart-{}", ctx.next_id);
    ctx.next_id += 1;

    let data = script_safe(&serde_json::to_string(&chart.figure.data)?);
    let layout = script_safe(&serde_json::to_string(&chart.figure.layout)?);
    ctx.scripts.push(format!(
        r#"Plotly.newPlot("{id}", {data}, {layout}, {{"responsive": {responsive}, "displaylogo": false}});"#,
        responsive = chart.fill_width,
    ));

    let class = if chart.fill_width { "chart fill" } else { "chart" };
    Ok(format!(r#"<div class="{class}" id="{id}"></div>"#))
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// JSON cannot close or comment out the surrounding `<script>` element
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn inline_css() -> &'static str {
    r#"
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 16px;
            color: #31333f;
            background: #fff;
        }
        main.centered { max-width: 736px; margin: 0 auto; }
        main.wide { width: 100%; }
        .tabs { display: flex; gap: 4px; border-bottom: 1px solid #e6e6e6; margin-bottom: 12px; }
        .tab-button {
            border: none;
            background: none;
            padding: 8px 16px;
            cursor: pointer;
            font-size: 14px;
            border-bottom: 2px solid transparent;
        }
        .tab-button.active { color: #ff4b4b; border-bottom-color: #ff4b4b; }
        .tab-panel { display: none; }
        .tab-panel.active { display: block; }
        .row { display: flex; gap: 16px; width: 100%; }
        .pane { min-width: 0; }
        .callout {
            background: rgba(33, 195, 84, 0.1);
            color: rgb(23, 114, 51);
            border-radius: 4px;
            padding: 12px 16px;
            margin: 8px 0;
        }
        .chart { height: 450px; width: 700px; max-width: 100%; }
        .chart.fill { width: 100%; }
        footer { text-align: center; color: #888; font-size: 12px; margin-top: 24px; }
    "#
}

fn inline_tab_javascript() -> &'static str {
    r#"
        document.querySelectorAll('.tab-button').forEach(function (button) {
            button.addEventListener('click', function () {
                document.querySelectorAll('.tab-button, .tab-panel').forEach(function (el) {
                    el.classList.remove('active');
                });
                button.classList.add('active');
                document.getElementById(button.dataset.tab).classList.add('active');
                window.dispatchEvent(new Event('resize'));
            });
        });
    "#
}
