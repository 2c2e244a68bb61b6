//! Standalone SVG output for a laid-out timeline.
//!
//! Hover data is attached to every bar as an SVG `<title>`, which browsers
//! show as a tooltip.

use crate::render::chart::{ChartBar, TimelineChart};

const WIDTH: usize = 1000;
const MARGIN: usize = 20;
const LABEL_WIDTH: usize = 180;
const TITLE_HEIGHT: usize = 40;
const LANE_HEIGHT: usize = 28;
const BAR_HEIGHT: usize = 18;
const AXIS_HEIGHT: usize = 30;
const MIN_BAR_WIDTH: f64 = 1.0;

/// Renders `chart` as a complete SVG document.
pub fn to_svg(chart: &TimelineChart) -> String {
    let plot_width = WIDTH - 2 * MARGIN - LABEL_WIDTH;
    let plot_left = MARGIN + LABEL_WIDTH;
    let plot_top = MARGIN + TITLE_HEIGHT;
    let plot_height = chart.bar_count() * LANE_HEIGHT;
    let height = plot_top + plot_height + AXIS_HEIGHT + MARGIN;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" font-family="sans-serif" font-size="12">
  <style>
    .title {{ font-size: 16px; font-weight: bold; fill: #2a3f5f; }}
    .label {{ fill: #2a3f5f; }}
    .grid {{ stroke: #ebf0f8; stroke-width: 1; }}
    .tick {{ fill: #506784; font-size: 11px; }}
    .bar:hover rect {{ opacity: 0.8; }}
    .inverted rect {{ stroke: #444; stroke-dasharray: 3 2; }}
  </style>
  <rect width="100%" height="100%" fill="white"/>
  <text x="{MARGIN}" y="{}" class="title">{}</text>
"#,
        MARGIN + TITLE_HEIGHT / 2,
        escape_xml(&chart.title)
    );

    for year in chart.axis.ticks() {
        let x = plot_left as f64 + chart.axis.position_of_year(year) * plot_width as f64;
        svg.push_str(&format!(
            r#"  <line x1="{x:.1}" y1="{plot_top}" x2="{x:.1}" y2="{}" class="grid"/>
  <text x="{x:.1}" y="{}" text-anchor="middle" class="tick">{year}</text>
"#,
            plot_top + plot_height,
            plot_top + plot_height + AXIS_HEIGHT / 2 + 4
        ));
    }

    for bar in &chart.bars {
        svg.push_str(&render_bar(chart, bar, plot_left, plot_top, plot_width));
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_bar(
    chart: &TimelineChart,
    bar: &ChartBar,
    plot_left: usize,
    plot_top: usize,
    plot_width: usize,
) -> String {
    let lane_top = plot_top + bar.lane * LANE_HEIGHT;
    let x1 = plot_left as f64 + chart.axis.position(bar.left()) * plot_width as f64;
    let x2 = plot_left as f64 + chart.axis.position(bar.right()) * plot_width as f64;
    let width = (x2 - x1).max(MIN_BAR_WIDTH);
    let class = if bar.inverted { "bar inverted" } else { "bar" };

    format!(
        r#"  <g class="{class}">
    <text x="{}" y="{}" text-anchor="end" class="label">{}</text>
    <rect x="{x1:.1}" y="{}" width="{width:.1}" height="{BAR_HEIGHT}" fill="{}"/>
    <title>{}</title>
  </g>
"#,
        plot_left - 8,
        lane_top + LANE_HEIGHT / 2 + 4,
        escape_xml(bar.label()),
        lane_top + (LANE_HEIGHT - BAR_HEIGHT) / 2,
        bar.color,
        escape_xml(&bar.hover.to_string())
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
