//! サマリー/内訳リクエストのフィルタ
//!
//! 空の項目はクエリに含めない。`start_date`/`end_date` はワイヤ形式の名前。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 監視対象エリア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Zone {
    All,
    DiningArea1,
    DiningArea2,
    BarSection,
    OutdoorPatio,
}

impl Zone {
    /// 選択肢の表示順
    pub const ALL: [Zone; 5] = [
        Zone::All,
        Zone::DiningArea1,
        Zone::DiningArea2,
        Zone::BarSection,
        Zone::OutdoorPatio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::All => "all",
            Zone::DiningArea1 => "dining-area-1",
            Zone::DiningArea2 => "dining-area-2",
            Zone::BarSection => "bar-section",
            Zone::OutdoorPatio => "outdoor-patio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::All => "All Zones",
            Zone::DiningArea1 => "Dining Area 1",
            Zone::DiningArea2 => "Dining Area 2",
            Zone::BarSection => "Bar Section",
            Zone::OutdoorPatio => "Outdoor Patio",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| format!("unknown zone: {s}"))
    }
}

/// 入力欄の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Zone,
    StartDate,
    EndDate,
}

/// フィルタ選択状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HygieneFilters {
    pub zone: Option<Zone>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl HygieneFilters {
    /// 入力値を反映する
    ///
    /// 空文字や解釈できない値はその項目をクリアする。
    pub fn set(&mut self, field: FilterField, value: &str) {
        let value = value.trim();
        match field {
            FilterField::Zone => self.zone = value.parse().ok(),
            FilterField::StartDate => self.start_date = parse_date(value),
            FilterField::EndDate => self.end_date = parse_date(value),
        }
    }

    /// 入力欄に表示する値（未設定は空文字）
    pub fn value_of(&self, field: FilterField) -> String {
        match field {
            FilterField::Zone => self.zone.map(|z| z.as_str().to_string()).unwrap_or_default(),
            FilterField::StartDate => format_date(self.start_date),
            FilterField::EndDate => format_date(self.end_date),
        }
    }

    /// 設定済みの項目だけをクエリパラメータにする
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(zone) = self.zone {
            params.push(("zone", zone.as_str().to_string()));
        }
        if let Some(date) = self.start_date {
            params.push(("start_date", date.to_string()));
        }
        if let Some(date) = self.end_date {
            params.push(("end_date", date.to_string()));
        }
        params
    }

    /// "2024-01-01 to N/A" 形式の集計期間
    pub fn reporting_period(&self) -> String {
        let show = |date: Option<NaiveDate>| {
            date.map(|d| d.to_string()).unwrap_or_else(|| "N/A".to_string())
        };
        format!("{} to {}", show(self.start_date), show(self.end_date))
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
