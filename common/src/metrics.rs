//! バックエンドから返る指標と表示用のフォールバック値
//!
//! スキーマはクライアント側で強制しない。表示時に欠けている項目は
//! `DEFAULT_METRICS` の固定値で埋める（計算値ではなく表示用の値）。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 表示する指標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    AvgCleaningTime,
    HygieneScore,
    Violations,
    TotalTables,
    OnTimeCleaning,
    DelayedCleaning,
}

/// 指標ごとのキー・ラベル・フォールバック値
#[derive(Debug, Clone, Copy)]
pub struct MetricDefault {
    pub metric: Metric,
    pub key: &'static str,
    pub label: &'static str,
    pub fallback: &'static str,
    pub unit: Option<&'static str>,
}

pub const DEFAULT_METRICS: [MetricDefault; 6] = [
    MetricDefault {
        metric: Metric::AvgCleaningTime,
        key: "avgCleaningTime",
        label: "Avg. Cleaning Time",
        fallback: "4.2",
        unit: Some("min"),
    },
    MetricDefault {
        metric: Metric::HygieneScore,
        key: "hygieneScore",
        label: "Hygiene Score",
        fallback: "87",
        unit: Some("%"),
    },
    MetricDefault {
        metric: Metric::Violations,
        key: "violations",
        label: "Violations",
        fallback: "3",
        unit: None,
    },
    MetricDefault {
        metric: Metric::TotalTables,
        key: "totalTables",
        label: "Total Tables Monitored:",
        fallback: "24",
        unit: None,
    },
    MetricDefault {
        metric: Metric::OnTimeCleaning,
        key: "onTimeCleaning",
        label: "Tables Cleaned On Time:",
        fallback: "21",
        unit: None,
    },
    MetricDefault {
        metric: Metric::DelayedCleaning,
        key: "delayedCleaning",
        label: "Delayed Cleanings:",
        fallback: "3",
        unit: None,
    },
];

impl Metric {
    pub fn defaults(&self) -> &'static MetricDefault {
        let index = match self {
            Metric::AvgCleaningTime => 0,
            Metric::HygieneScore => 1,
            Metric::Violations => 2,
            Metric::TotalTables => 3,
            Metric::OnTimeCleaning => 4,
            Metric::DelayedCleaning => 5,
        };
        &DEFAULT_METRICS[index]
    }
}

/// サマリーレスポンス（そのまま保持）
///
/// オブジェクト以外が返ってきてもエラーにはせず、全項目フォールバック表示になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryReport(pub Value);

impl SummaryReport {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// 表示用の値（欠けていればフォールバック）
    pub fn display(&self, metric: Metric) -> String {
        let defaults = metric.defaults();
        self.get(defaults.key)
            .and_then(display_value)
            .unwrap_or_else(|| defaults.fallback.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }
}

/// 内訳レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakdownReport(pub Value);

impl BreakdownReport {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// キーと表示値の組（キー順）
    ///
    /// オブジェクト以外は `value` 1行にまとめる。null は空。
    pub fn entries(&self) -> Vec<(String, String)> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| {
                    let shown = display_value(value).unwrap_or_else(|| "-".to_string());
                    (key.clone(), shown)
                })
                .collect(),
            other => display_value(other)
                .map(|shown| vec![("value".to_string(), shown)])
                .unwrap_or_default(),
        }
    }
}

/// アップロード受付レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadReceipt(pub Value);

/// null・空文字は欠損として扱う。0 や false は値として表示する。
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: Value) -> SummaryReport {
        SummaryReport::from_value(value)
    }

    #[test]
    fn test_empty_summary_uses_every_fallback() {
        let summary = report(json!({}));
        let shown: Vec<String> = DEFAULT_METRICS.iter().map(|d| summary.display(d.metric)).collect();
        assert_eq!(shown, vec!["4.2", "87", "3", "24", "21", "3"]);
    }

    #[test]
    fn test_present_fields_are_shown_verbatim() {
        let summary = report(json!({
            "avgCleaningTime": 5.75,
            "hygieneScore": "91",
            "violations": 0,
            "totalTables": 30,
        }));
        assert_eq!(summary.display(Metric::AvgCleaningTime), "5.75");
        assert_eq!(summary.display(Metric::HygieneScore), "91");
        assert_eq!(summary.display(Metric::Violations), "0");
        assert_eq!(summary.display(Metric::TotalTables), "30");
        assert_eq!(summary.display(Metric::OnTimeCleaning), "21");
    }

    #[test]
    fn test_null_and_blank_fall_back() {
        let summary = report(json!({ "violations": null, "delayedCleaning": "" }));
        assert_eq!(summary.display(Metric::Violations), "3");
        assert_eq!(summary.display(Metric::DelayedCleaning), "3");
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let summary = report(json!({ "peakHour": "12:00" }));
        assert_eq!(summary.get("peakHour"), Some(&json!("12:00")));
    }

    #[test]
    fn test_non_object_payload_falls_back() {
        for body in [json!([1, 2]), json!("ok"), json!(true), Value::Null] {
            let summary = report(body);
            let shown: Vec<String> = DEFAULT_METRICS.iter().map(|d| summary.display(d.metric)).collect();
            assert_eq!(shown, vec!["4.2", "87", "3", "24", "21", "3"]);
            assert_eq!(summary.get("hygieneScore"), None);
        }
    }

    #[test]
    fn test_non_object_breakdown_entries() {
        assert!(BreakdownReport::from_value(Value::Null).entries().is_empty());
        assert_eq!(
            BreakdownReport::from_value(json!("pending")).entries(),
            vec![("value".to_string(), "pending".to_string())]
        );
    }

    #[test]
    fn test_breakdown_entries() {
        let breakdown = BreakdownReport::from_value(json!({
            "zones": 4,
            "note": null,
        }));
        assert_eq!(
            breakdown.entries(),
            vec![
                ("note".to_string(), "-".to_string()),
                ("zones".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_lookup() {
        assert_eq!(Metric::HygieneScore.defaults().unit, Some("%"));
        assert_eq!(Metric::DelayedCleaning.defaults().key, "delayedCleaning");
    }

    #[test]
    fn test_every_metric_finds_its_own_row() {
        for row in DEFAULT_METRICS.iter() {
            assert_eq!(row.metric.defaults().metric, row.metric);
            assert_eq!(row.metric.defaults().key, row.key);
        }
    }
}
