//! サマリー/内訳のテキスト表示

use hygiene_common::summary::{BREAKDOWN_HEADING, DIALOG_TITLE, PERIOD_LABEL};
use hygiene_common::{BreakdownReport, HygieneFilters, Metric, SummaryReport, DEFAULT_METRICS};
use std::fmt::Write;

const LABEL_WIDTH: usize = 26;

/// 上段3項目（カード表示）
const HEADLINE: [Metric; 3] = [Metric::AvgCleaningTime, Metric::HygieneScore, Metric::Violations];

pub fn render_summary(report: &SummaryReport, filters: &HygieneFilters) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", DIALOG_TITLE);

    for metric in HEADLINE {
        let defaults = metric.defaults();
        let value = report.display(metric);
        let line = match defaults.unit {
            Some(unit) => format!("{} {}", value, unit),
            None => value,
        };
        let _ = writeln!(out, "  {:<width$}{}", defaults.label, line, width = LABEL_WIDTH);
    }

    let _ = writeln!(out, "\n{}", BREAKDOWN_HEADING);
    for defaults in DEFAULT_METRICS.iter().filter(|d| !HEADLINE.contains(&d.metric)) {
        let _ = writeln!(
            out,
            "  {:<width$}{}",
            defaults.label,
            report.display(defaults.metric),
            width = LABEL_WIDTH
        );
    }
    let _ = writeln!(
        out,
        "  {:<width$}{}",
        PERIOD_LABEL,
        filters.reporting_period(),
        width = LABEL_WIDTH
    );

    out
}

pub fn render_breakdown(report: &BreakdownReport) -> String {
    let entries = report.entries();
    if entries.is_empty() {
        return "(内訳データなし)\n".to_string();
    }

    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for (key, value) in entries {
        let _ = writeln!(out, "  {:<width$}{}", key, value, width = width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hygiene_common::FilterField;
    use serde_json::json;

    #[test]
    fn test_empty_summary_shows_fallbacks() {
        let report = SummaryReport::from_value(json!({}));
        let text = render_summary(&report, &HygieneFilters::default());

        assert!(text.contains("4.2 min"));
        assert!(text.contains("87 %"));
        assert!(text.lines().any(|l| l.starts_with("  Violations") && l.ends_with(" 3")));
        assert!(text.lines().any(|l| l.contains("Total Tables Monitored:") && l.ends_with("24")));
        assert!(text.lines().any(|l| l.contains("Tables Cleaned On Time:") && l.ends_with("21")));
        assert!(text.lines().any(|l| l.contains("Delayed Cleanings:") && l.ends_with(" 3")));
        assert!(text.contains("N/A to N/A"));
        assert!(text.starts_with("Hygiene Summary Report\n"));
        assert!(text.lines().any(|l| l == "Detailed Breakdown"));
    }

    #[test]
    fn test_summary_uses_backend_values_and_period() {
        let report = SummaryReport::from_value(json!({ "hygieneScore": 95, "totalTables": 40 }));
        let mut filters = HygieneFilters::default();
        filters.set(FilterField::StartDate, "2024-01-01");
        filters.set(FilterField::EndDate, "2024-01-31");

        let text = render_summary(&report, &filters);
        assert!(text.contains("95 %"));
        assert!(text.lines().any(|l| l.contains("Total Tables Monitored:") && l.ends_with("40")));
        assert!(text.contains("2024-01-01 to 2024-01-31"));
    }

    #[test]
    fn test_breakdown_rendering() {
        let report = BreakdownReport::from_value(json!({ "bar-section": 12, "patio": "n/a" }));
        let text = render_breakdown(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  bar-section") && lines[0].ends_with("12"));
        assert!(lines[1].ends_with("n/a"));

        let empty = BreakdownReport::from_value(json!({}));
        assert_eq!(render_breakdown(&empty), "(内訳データなし)\n");
    }
}
