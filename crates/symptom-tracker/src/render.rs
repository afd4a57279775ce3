//! Terminal rendering of [`HistoryView`]s.
//!
//! Everything here returns a `String`; printing is left to the caller.

use std::fmt::Write as _;

use crate::labels::Labels;
use crate::view::{ChartPoint, ChartView, HistoryView, ListItem, ListView};

/// Width of the y-axis gutter (`10 ┤`).
const GUTTER: usize = 4;

const MARKER: char = '●';
const CONNECTOR: char = '·';

/// Render the list as `YYYY-MM-DD / <prefix><level>` lines.
#[must_use]
pub fn list_plain(list: &ListView, labels: &Labels) -> String {
    match list {
        ListView::Empty { placeholder } => format!("{placeholder}\n"),
        ListView::Entries { items } => items
            .iter()
            .map(|item| format!("{} / {}{}\n", item.date, labels.level_prefix, item.level))
            .collect(),
    }
}

/// Render the list as an aligned two-column table.
#[must_use]
pub fn list_table(list: &ListView, labels: &Labels) -> String {
    let items: &[ListItem] = match list {
        ListView::Empty { placeholder } => return format!("{placeholder}\n"),
        ListView::Entries { items } => items,
    };

    let date_width = items
        .iter()
        .map(|i| display_width(&i.date))
        .chain(std::iter::once(display_width(labels.date)))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {}",
        pad(labels.date, date_width),
        labels.level_column
    );
    let _ = writeln!(
        out,
        "{}-+-{}",
        "-".repeat(date_width),
        "-".repeat(display_width(labels.level_column))
    );
    for item in items {
        let _ = writeln!(out, "{} | {:>2}", pad(&item.date, date_width), item.level);
    }
    out
}

/// Render the chart as a text line chart.
///
/// Rows run from 10 at the top to 1 at the bottom. Each point owns
/// `column_width` columns, with its marker in the middle and interpolated
/// connectors towards the next point. `column_width` is raised to 6 if
/// smaller so `MM-DD` labels fit.
#[must_use]
pub fn chart_text(chart: &ChartView, column_width: usize) -> String {
    let (name, y_domain, points) = match chart {
        ChartView::NoData { placeholder } => return format!("{placeholder}\n"),
        ChartView::Series {
            name,
            y_domain,
            points,
        } => (*name, *y_domain, points.as_slice()),
    };

    let width = column_width.max(6);
    let [low, high] = y_domain;
    let plot_width = points.len() * width;
    let rows = usize::from(high - low) + 1;
    let mut grid = vec![vec![' '; plot_width]; rows];

    let row_of = |level: i64| -> usize {
        let clamped = level.clamp(i64::from(low), i64::from(high));
        usize::try_from(i64::from(high) - clamped).unwrap_or(0)
    };
    let center = |index: usize| index * width + width / 2;

    let span = i64::try_from(width).unwrap_or(6);
    for (index, pair) in points.windows(2).enumerate() {
        let (from, to) = (i64::from(pair[0].level), i64::from(pair[1].level));
        for (offset, step) in (1..span).enumerate() {
            let x = center(index) + offset + 1;
            // Linear interpolation, rounded to the nearest row.
            let scaled = from * span + (to - from) * step;
            let level = (2 * scaled + span).div_euclid(2 * span);
            grid[row_of(level)][x] = CONNECTOR;
        }
    }
    for (index, point) in points.iter().enumerate() {
        grid[row_of(i64::from(point.level))][center(index)] = MARKER;
    }

    let mut out = String::new();
    let _ = writeln!(out, "{MARKER} {name}");
    for (row, cells) in grid.iter().enumerate() {
        let level = usize::from(high) - row;
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{level:>2} ┤{}", line.trim_end());
    }
    let _ = writeln!(out, "{}└{}", " ".repeat(GUTTER - 1), "─".repeat(plot_width));
    let _ = writeln!(out, "{}", x_labels(points, width).trim_end());
    let _ = writeln!(out, "{}{}", " ".repeat(GUTTER), date_span(points));
    out
}

/// Render the whole page: title, list card, chart card.
#[must_use]
pub fn dashboard(view: &HistoryView, labels: &Labels, column_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels.app_title);
    let _ = writeln!(out, "{}", "=".repeat(display_width(labels.app_title)));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading(labels.history_title));
    out.push_str(&list_plain(&view.list, labels));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading(labels.chart_title));
    out.push_str(&chart_text(&view.chart, column_width));
    out
}

fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(display_width(title)))
}

fn x_labels(points: &[ChartPoint], width: usize) -> String {
    let mut line = " ".repeat(GUTTER);
    for point in points {
        // `YYYY-MM-DD` -> `MM-DD`, centered in the column.
        let short = point.date.get(5..).unwrap_or(&point.date);
        let left = (width / 2).saturating_sub(short.chars().count() / 2);
        let _ = write!(line, "{}", pad(&format!("{}{short}", " ".repeat(left)), width));
    }
    line
}

fn date_span(points: &[ChartPoint]) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if first.date != last.date => {
            format!("{} → {}", first.date, last.date)
        }
        (Some(first), _) => first.date.clone(),
        _ => String::new(),
    }
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Terminal columns taken by `text`, counting East Asian wide characters as two.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| {
            let cp = u32::from(c);
            let wide = matches!(
                cp,
                0x1100..=0x115F
                    | 0x2E80..=0xA4CF
                    | 0xAC00..=0xD7A3
                    | 0xF900..=0xFAFF
                    | 0xFE30..=0xFE4F
                    | 0xFF00..=0xFF60
                    | 0xFFE0..=0xFFE6
            );
            if wide {
                2
            } else {
                1
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Language;
    use crate::record::{parse_date, Level, SymptomRecord};
    use crate::view::project;

    fn ja() -> &'static Labels {
        Labels::for_language(Language::Ja)
    }

    fn view_of(entries: &[(&str, u8)]) -> HistoryView {
        let records: Vec<SymptomRecord> = entries
            .iter()
            .map(|(d, l)| SymptomRecord::new(parse_date(d).unwrap(), Level::new(*l).unwrap()))
            .collect();
        project(&records, ja())
    }

    #[test]
    fn test_list_plain_scenario() {
        let view = view_of(&[("2024-01-01", 3), ("2024-01-05", 7)]);
        assert_eq!(
            list_plain(&view.list, ja()),
            "2024-01-01 / レベル: 3\n2024-01-05 / レベル: 7\n"
        );
    }

    #[test]
    fn test_list_plain_empty() {
        let view = view_of(&[]);
        assert_eq!(list_plain(&view.list, ja()), "記録がありません\n");
    }

    #[test]
    fn test_list_table() {
        let view = view_of(&[("2024-01-01", 3), ("2024-01-05", 10)]);
        let table = list_table(&view.list, ja());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("日付"));
        assert_eq!(lines[2], "2024-01-01 |  3");
        assert_eq!(lines[3], "2024-01-05 | 10");
    }

    #[test]
    fn test_list_table_empty() {
        let view = view_of(&[]);
        assert_eq!(list_table(&view.list, ja()), "記録がありません\n");
    }

    #[test]
    fn test_chart_empty_placeholder() {
        let view = view_of(&[]);
        assert_eq!(chart_text(&view.chart, 6), "データがありません\n");
    }

    #[test]
    fn test_chart_places_markers_on_level_rows() {
        let view = view_of(&[("2024-01-01", 3), ("2024-01-05", 7)]);
        let chart = chart_text(&view.chart, 6);
        let lines: Vec<&str> = chart.lines().collect();

        // Legend, ten rows, axis, labels, span.
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "● 症状レベル");

        let row = |level: usize| lines[1 + (10 - level)];
        assert!(row(3).starts_with(" 3 ┤"));
        assert!(row(3).contains('●'));
        assert!(row(7).contains('●'));
        assert!(!row(10).contains('●'));
        assert!(!row(1).contains('●'));
    }

    #[test]
    fn test_chart_x_axis_order() {
        let view = view_of(&[("2024-01-01", 3), ("2024-01-05", 7)]);
        let chart = chart_text(&view.chart, 6);
        let lines: Vec<&str> = chart.lines().collect();

        let labels = lines[12];
        let first = labels.find("01-01").unwrap();
        let second = labels.find("01-05").unwrap();
        assert!(first < second);
        assert_eq!(lines[13].trim(), "2024-01-01 → 2024-01-05");
    }

    #[test]
    fn test_chart_marker_columns_line_up_with_labels() {
        let view = view_of(&[("2024-01-01", 3), ("2024-01-05", 7)]);
        let chart = chart_text(&view.chart, 6);
        let lines: Vec<&str> = chart.lines().collect();

        let marker_col = |line: &str| line.chars().position(|c| c == '●').unwrap();
        // Gutter (4) + center of the first column (3).
        assert_eq!(marker_col(lines[1 + 7]), 7);
        assert_eq!(marker_col(lines[1 + 3]), 13);
    }

    #[test]
    fn test_chart_connects_points() {
        let view = view_of(&[("2024-01-01", 1), ("2024-01-02", 10)]);
        let chart = chart_text(&view.chart, 6);
        assert!(chart.contains('·'));
    }

    #[test]
    fn test_chart_single_point() {
        let view = view_of(&[("2024-02-29", 10)]);
        let chart = chart_text(&view.chart, 6);
        let lines: Vec<&str> = chart.lines().collect();

        assert!(lines[1].starts_with("10 ┤"));
        assert!(lines[1].contains('●'));
        assert!(!chart.contains('·'));
        assert_eq!(lines[13].trim(), "2024-02-29");
    }

    #[test]
    fn test_chart_narrow_width_is_widened() {
        let view = view_of(&[("2024-01-01", 5), ("2024-01-02", 5)]);
        assert_eq!(chart_text(&view.chart, 2), chart_text(&view.chart, 6));
    }

    #[test]
    fn test_dashboard_sections() {
        let view = view_of(&[("2024-01-01", 3)]);
        let page = dashboard(&view, ja(), 6);

        assert!(page.starts_with("健康トラッカー\n"));
        assert!(page.contains("過去の記録"));
        assert!(page.contains("2024-01-01 / レベル: 3"));
        assert!(page.contains("症状レベルの推移"));
        let history = page.find("過去の記録").unwrap();
        let chart = page.find("症状レベルの推移").unwrap();
        assert!(history < chart);
    }

    #[test]
    fn test_dashboard_empty() {
        let page = dashboard(&view_of(&[]), ja(), 6);
        assert!(page.contains("記録がありません"));
        assert!(page.contains("データがありません"));
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("2024-01-01"), 10);
        assert_eq!(display_width("日付"), 4);
        assert_eq!(display_width("レベル"), 6);
    }
}
