//! Self-contained HTML dashboard page.
//!
//! The page has a "Filters" sidebar with the two table-size checkboxes and a
//! full-width main area that shows either the chart (drawn client side by
//! vega-embed) or a single error/warning message.

use crate::chart::spec::ChartSpec;
use crate::error::{DashboardError, Severity};
use crate::pipeline::types::FilterConfig;

pub const PAGE_TITLE: &str = "Heatmap Visualization";

/// What the main area of the page shows.
#[derive(Debug)]
pub enum PageBody<'a> {
    Chart(&'a ChartSpec),
    Message { severity: Severity, text: String },
}

impl<'a> PageBody<'a> {
    pub fn from_result(result: &'a Result<ChartSpec, DashboardError>) -> Self {
        match result {
            Ok(spec) => PageBody::Chart(spec),
            Err(e) => PageBody::Message {
                severity: e.severity(),
                text: e.to_string(),
            },
        }
    }
}

/// Page inputs. `interactive` pages reload themselves with the new filter
/// when a checkbox changes; static pages show the filter read-only.
#[derive(Debug)]
pub struct PageState<'a> {
    pub filter: FilterConfig,
    pub body: PageBody<'a>,
    pub interactive: bool,
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    margin: 0;
    color: #262730;
    display: flex;
    min-height: 100vh;
}
aside {
    width: 240px;
    padding: 2rem 1.5rem;
    background: #f0f2f6;
}
aside h2 {
    font-size: 1.1rem;
    margin-top: 0;
}
aside label {
    display: block;
    margin: 0.5rem 0;
}
main {
    flex: 1;
    padding: 2rem 3rem;
}
#chart {
    width: 100%;
}
.message {
    padding: 1rem;
    border-radius: 0.5rem;
}
.message.error {
    background: #ffe0e0;
    color: #7d1a1a;
}
.message.warning {
    background: #fff6d6;
    color: #6b5300;
}
"#
}

fn render_sidebar(filter: &FilterConfig, interactive: bool) -> String {
    let checkbox = |id: &str, label: &str, checked: bool| {
        format!(
            r#"<label><input type="checkbox" id="{id}"{checked}{disabled}> {label}</label>"#,
            checked = if checked { " checked" } else { "" },
            disabled = if interactive { "" } else { " disabled" },
        )
    };

    format!(
        "<aside>\n<h2>Filters</h2>\n{}\n{}\n</aside>",
        checkbox("size2", "Show Table Size 2", filter.include_size_2),
        checkbox("size4", "Show Table Size 4", filter.include_size_4),
    )
}

fn filter_script() -> &'static str {
    r#"
for (const id of ["size2", "size4"]) {
    document.getElementById(id).addEventListener("change", () => {
        const params = new URLSearchParams();
        params.set("size2", document.getElementById("size2").checked);
        params.set("size4", document.getElementById("size4").checked);
        window.location.search = params.toString();
    });
}
"#
}

fn render_body(body: &PageBody<'_>) -> Result<(String, String), serde_json::Error> {
    match body {
        PageBody::Chart(spec) => {
            // Keep "</script>" inside the JSON from closing the tag.
            let json = serde_json::to_string(spec)?.replace("</", "<\\/");
            let script = format!(
                "vegaEmbed(\"#chart\", {json}, {{ actions: false }}).catch(console.error);"
            );
            Ok((r#"<div id="chart"></div>"#.to_string(), script))
        }
        PageBody::Message { severity, text } => {
            let class = match severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let html = format!(
                r#"<div class="message {class}">{}</div>"#,
                escape_html(text)
            );
            Ok((html, String::new()))
        }
    }
}

/// Renders the full dashboard page.
pub fn render_page(state: &PageState<'_>) -> Result<String, serde_json::Error> {
    let (main_html, chart_script) = render_body(&state.body)?;
    let controls = if state.interactive {
        filter_script()
    } else {
        ""
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
{sidebar}
<main>
    <h1>{title}</h1>
    {main_html}
</main>
<script>{controls}{chart_script}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        sidebar = render_sidebar(&state.filter, state.interactive),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::build_spec;
    use crate::pipeline::shape::shape;
    use crate::pipeline::types::SlotTotal;

    fn spec() -> ChartSpec {
        let heatmap = shape(vec![SlotTotal {
            day_of_week: 2,
            table_slot: "19:00".to_string(),
            value: 3.5,
        }])
        .unwrap();
        build_spec(&heatmap)
    }

    #[test]
    fn test_chart_page_embeds_spec() {
        let spec = spec();
        let page = render_page(&PageState {
            filter: FilterConfig::default(),
            body: PageBody::Chart(&spec),
            interactive: true,
        })
        .unwrap();

        assert!(page.contains("<title>Heatmap Visualization</title>"));
        assert!(page.contains("vegaEmbed(\"#chart\""));
        assert!(page.contains("Odds of Getting a Table"));
        assert!(page.contains(r#"id="size2" checked>"#));
        assert!(page.contains("Show Table Size 4"));
        assert!(page.contains("window.location.search"));
    }

    #[test]
    fn test_warning_page_has_no_chart() {
        let result = Err(DashboardError::NoSelection);
        let page = render_page(&PageState {
            filter: FilterConfig::new(false, false),
            body: PageBody::from_result(&result),
            interactive: true,
        })
        .unwrap();

        assert!(page.contains(r#"class="message warning""#));
        assert!(page.contains("At least one table size must be selected for visualization."));
        assert!(!page.contains("vegaEmbed("));
        assert!(page.contains(r#"id="size2">"#));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let result = Err(DashboardError::MissingFile {
            path: "<script>alert(1)</script>.csv".to_string(),
        });
        let page = render_page(&PageState {
            filter: FilterConfig::default(),
            body: PageBody::from_result(&result),
            interactive: false,
        })
        .unwrap();

        assert!(page.contains(r#"class="message error""#));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;.csv"));
        assert!(!page.contains("<script>alert(1)"));
    }

    #[test]
    fn test_static_page_disables_checkboxes() {
        let spec = spec();
        let page = render_page(&PageState {
            filter: FilterConfig::new(true, false),
            body: PageBody::Chart(&spec),
            interactive: false,
        })
        .unwrap();

        assert!(page.contains(r#"id="size2" checked disabled>"#));
        assert!(page.contains(r#"id="size4" disabled>"#));
        assert!(!page.contains("window.location.search"));
    }
}
