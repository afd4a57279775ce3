//! User-facing text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language for titles, placeholders and acknowledgments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Japanese.
    #[default]
    Ja,
    /// English.
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja => write!(f, "ja"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Every piece of text the views print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Page title.
    pub app_title: &'static str,
    /// Entry form heading.
    pub form_title: &'static str,
    /// Date field label.
    pub date: &'static str,
    /// Level field label.
    pub level_field: &'static str,
    /// Save action label.
    pub save_action: &'static str,
    /// History list heading.
    pub history_title: &'static str,
    /// Prefix in front of a level in the history list.
    pub level_prefix: &'static str,
    /// Short level column heading.
    pub level_column: &'static str,
    /// Placeholder for an empty history list.
    pub no_records: &'static str,
    /// Chart heading.
    pub chart_title: &'static str,
    /// Chart series name.
    pub chart_series: &'static str,
    /// Placeholder for an empty chart.
    pub no_data: &'static str,
    /// Acknowledgment shown after a successful save.
    pub saved: &'static str,
}

const JA: Labels = Labels {
    app_title: "健康トラッカー",
    form_title: "症状記録",
    date: "日付",
    level_field: "症状の程度 (1-10)",
    save_action: "記録を保存",
    history_title: "過去の記録",
    level_prefix: "レベル: ",
    level_column: "レベル",
    no_records: "記録がありません",
    chart_title: "症状レベルの推移",
    chart_series: "症状レベル",
    no_data: "データがありません",
    saved: "記録を保存しました",
};

const EN: Labels = Labels {
    app_title: "Health Tracker",
    form_title: "Symptom Entry",
    date: "Date",
    level_field: "Severity (1-10)",
    save_action: "Save record",
    history_title: "History",
    level_prefix: "Level: ",
    level_column: "Level",
    no_records: "No records",
    chart_title: "Severity Trend",
    chart_series: "Severity",
    no_data: "No data",
    saved: "Record saved",
};

impl Labels {
    /// The labels for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Ja => &JA,
            Language::En => &EN,
        }
    }
}
