//! Plain-text Gantt rendering for terminals.

use crate::model::person::LifeStatus;
use crate::render::chart::{ChartBar, TimelineChart};

const PLOT_COLUMNS: usize = 60;
const MAX_LABEL_CHARS: usize = 24;
const DECEASED_FILL: char = '#';
const ALIVE_FILL: char = '=';
const INVERTED_FILL: char = '~';

/// Renders `chart` as fixed-width text, one line per bar.
pub fn to_text(chart: &TimelineChart) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|bar| bar.label().chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_CHARS);

    let mut out = String::new();
    out.push_str(&chart.title);
    out.push('\n');

    for bar in &chart.bars {
        out.push_str(&format!(
            "{} |{}|\n",
            pad_label(bar.label(), label_width),
            bar_cells(chart, bar)
        ));
    }

    out.push_str(&format!("{} +{}+\n", " ".repeat(label_width), "-".repeat(PLOT_COLUMNS)));
    out.push_str(&format!("{}  {}\n", " ".repeat(label_width), tick_line(chart)));
    out.push_str(&format!(
        "{DECEASED_FILL} deceased   {ALIVE_FILL} alive (until today)   {INVERTED_FILL} end before start\n"
    ));
    out
}

fn column(position: f64) -> usize {
    let max = (PLOT_COLUMNS - 1) as f64;
    (position * max).round().clamp(0.0, max) as usize
}

fn bar_cells(chart: &TimelineChart, bar: &ChartBar) -> String {
    let first = column(chart.axis.position(bar.left()));
    let last = column(chart.axis.position(bar.right()));
    let fill = match (bar.inverted, bar.hover.status) {
        (true, _) => INVERTED_FILL,
        (false, LifeStatus::Alive) => ALIVE_FILL,
        (false, LifeStatus::Deceased) => DECEASED_FILL,
    };
    (0..PLOT_COLUMNS)
        .map(|col| if (first..=last).contains(&col) { fill } else { ' ' })
        .collect()
}

fn tick_line(chart: &TimelineChart) -> String {
    let mut cells = vec![' '; PLOT_COLUMNS + 8];
    let mut next_free = 0;
    for year in chart.axis.ticks() {
        let label = year.to_string();
        let start = column(chart.axis.position_of_year(year));
        if start < next_free || start + label.len() > cells.len() {
            continue;
        }
        for (offset, ch) in label.chars().enumerate() {
            cells[start + offset] = ch;
        }
        next_free = start + label.len() + 1;
    }
    cells.into_iter().collect::<String>().trim_end().to_string()
}

fn pad_label(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count > width {
        let mut truncated: String = label.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{label}{}", " ".repeat(width - count))
    }
}
