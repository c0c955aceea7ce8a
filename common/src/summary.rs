//! サマリーレポートダイアログの状態

use crate::error::Result;
use crate::filters::{FilterField, HygieneFilters};
use crate::metrics::SummaryReport;
use crate::notice::{Notice, MSG_SUMMARY_FAILED, MSG_SUMMARY_SUCCESS};

pub const DIALOG_TITLE: &str = "Hygiene Summary Report";
pub const DIALOG_DESCRIPTION: &str = "Configure filters to generate a detailed hygiene analysis report";
pub const FILTERS_HEADING: &str = "Filters";
pub const RESULTS_HEADING: &str = "Results";
pub const ZONE_LABEL: &str = "Location / Zone";
pub const ZONE_PLACEHOLDER: &str = "Select zone";
pub const BREAKDOWN_HEADING: &str = "Detailed Breakdown";
pub const PERIOD_LABEL: &str = "Reporting Period:";

/// フィルタ・直近の結果・読込中フラグ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryDialogState {
    filters: HygieneFilters,
    report: Option<SummaryReport>,
    loading: bool,
}

impl SummaryDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &HygieneFilters {
        &self.filters
    }

    pub fn report(&self) -> Option<&SummaryReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        self.filters.set(field, value);
    }

    /// 読込を開始し、送信するフィルタを返す（読込中なら None）
    pub fn begin(&mut self) -> Option<HygieneFilters> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.filters.clone())
    }

    /// 結果を反映する。失敗時は前回の結果を残す。
    pub fn finish(&mut self, result: Result<SummaryReport>) -> Notice {
        self.loading = false;
        match result {
            Ok(report) => {
                self.report = Some(report);
                Notice::success(MSG_SUMMARY_SUCCESS)
            }
            Err(_) => Notice::error(MSG_SUMMARY_FAILED),
        }
    }
}
