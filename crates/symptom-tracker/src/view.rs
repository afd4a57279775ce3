//! History views as plain data.
//!
//! [`project`] maps the record history to a list view and a chart view
//! without touching any output device. Rendering lives in [`crate::render`].

use serde::Serialize;

use crate::labels::Labels;
use crate::record::{Level, SymptomRecord};

/// Fixed y-axis domain of the chart.
pub const Y_DOMAIN: [u8; 2] = [Level::MIN.get(), Level::MAX.get()];

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Severity level.
    pub level: u8,
}

/// The history list, or its placeholder when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    /// No records yet.
    Empty {
        /// Text shown instead of the list.
        placeholder: &'static str,
    },
    /// Records in history order.
    Entries {
        /// One item per record.
        items: Vec<ListItem>,
    },
}

impl ListView {
    /// Whether this is the placeholder state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// One chart point. The x-axis is categorical on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Severity level.
    pub level: u8,
}

/// The severity chart, or its placeholder when there is no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    /// No data yet.
    NoData {
        /// Text shown instead of the chart.
        placeholder: &'static str,
    },
    /// A single line series.
    Series {
        /// Series name.
        name: &'static str,
        /// Lowest and highest y-axis value.
        y_domain: [u8; 2],
        /// Points in x-axis order.
        points: Vec<ChartPoint>,
    },
}

impl ChartView {
    /// Whether this is the placeholder state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// The x-axis categories, in order.
    #[must_use]
    pub fn x_axis(&self) -> Vec<&str> {
        match self {
            Self::NoData { .. } => Vec::new(),
            Self::Series { points, .. } => points.iter().map(|p| p.date.as_str()).collect(),
        }
    }
}

/// Both history views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    /// The history list.
    pub list: ListView,
    /// The severity chart.
    pub chart: ChartView,
}

/// Project `records` into list and chart views.
///
/// Order is preserved exactly; callers keep the history sorted.
#[must_use]
pub fn project(records: &[SymptomRecord], labels: &Labels) -> HistoryView {
    HistoryView {
        list: list_view(records, labels),
        chart: chart_view(records, labels),
    }
}

/// The list half of [`project`].
#[must_use]
pub fn list_view(records: &[SymptomRecord], labels: &Labels) -> ListView {
    if records.is_empty() {
        return ListView::Empty {
            placeholder: labels.no_records,
        };
    }
    ListView::Entries {
        items: records
            .iter()
            .map(|r| ListItem {
                date: r.date_string(),
                level: r.level.get(),
            })
            .collect(),
    }
}

/// The chart half of [`project`].
#[must_use]
pub fn chart_view(records: &[SymptomRecord], labels: &Labels) -> ChartView {
    if records.is_empty() {
        return ChartView::NoData {
            placeholder: labels.no_data,
        };
    }
    ChartView::Series {
        name: labels.chart_series,
        y_domain: Y_DOMAIN,
        points: records
            .iter()
            .map(|r| ChartPoint {
                date: r.date_string(),
                level: r.level.get(),
            })
            .collect(),
    }
}
