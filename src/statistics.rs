//! Per-locale counts reshaped for a grouped bar chart.

use serde::Serialize;

use crate::model::Statistic;

pub const TO_TRANSLATE: &str = "to translate";
pub const TRANSLATED: &str = "translated";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<(String, u64)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl Chart {
    pub fn series(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }
}

/// Two parallel series, "to translate" first. No data, no chart.
pub fn chart(stats: &[Statistic]) -> Option<Chart> {
    if stats.is_empty() {
        return None;
    }

    let to_translate = stats
        .iter()
        .map(|s| (s.locale.clone(), s.totranslate))
        .collect();
    let translated = stats
        .iter()
        .map(|s| (s.locale.clone(), s.translated))
        .collect();

    Some(Chart {
        series: vec![
            Series {
                key: TO_TRANSLATE.to_string(),
                values: to_translate,
            },
            Series {
                key: TRANSLATED.to_string(),
                values: translated,
            },
        ],
        x_axis_label: "Language".to_string(),
        y_axis_label: "Nb of key".to_string(),
    })
}

/// Share of keys translated for one locale, in percent.
pub fn completion(stat: &Statistic) -> u64 {
    let total = if stat.keytotal > 0 {
        stat.keytotal
    } else {
        stat.translated + stat.totranslate
    };
    if total == 0 {
        return 0;
    }
    stat.translated * 100 / total
}

#[cfg(test)]
#[path = "tests/statistics_tests.rs"]
mod tests;
