//! ダッシュボードの固定表示内容

pub const BRAND_TITLE: &str = "Hygiene Monitor";
pub const BRAND_SUBTITLE: &str = "Restaurant Analysis System";
pub const SYSTEM_STATUS: &str = "System Active";
pub const FOOTER_CAPTION: &str =
    "Powered by YOLO Detection • Real-time Monitoring • Automated Analysis";

/// 右カラムのクイック統計タイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

pub const QUICK_STATS: [QuickStat; 2] = [
    QuickStat {
        label: "Today's Avg",
        value: "3.8 min",
        trend: "↓ 12% from yesterday",
    },
    QuickStat {
        label: "Compliance",
        value: "94%",
        trend: "↑ 3% from last week",
    },
];

/// ライブモニターの表示値（ストリーム未接続の間は固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSnapshot {
    pub is_live: bool,
    pub fps: u32,
    pub detections: u32,
    pub tables_detected: u32,
    pub occupied: u32,
    pub cleaning: u32,
}

impl MonitorSnapshot {
    pub fn placeholder() -> Self {
        Self {
            is_live: true,
            fps: 30,
            detections: 0,
            tables_detected: 0,
            occupied: 0,
            cleaning: 0,
        }
    }

    pub fn badge(&self) -> &'static str {
        if self.is_live { "LIVE" } else { "OFFLINE" }
    }

    /// 下部カウンタ（ラベル, 値）
    pub fn counters(&self) -> [(&'static str, u32); 3] {
        [
            ("Tables Detected", self.tables_detected),
            ("Occupied", self.occupied),
            ("Cleaning", self.cleaning),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_live_and_zeroed() {
        let snapshot = MonitorSnapshot::placeholder();
        assert_eq!(snapshot.badge(), "LIVE");
        assert_eq!(snapshot.fps, 30);
        assert!(snapshot.counters().iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn test_offline_badge() {
        let snapshot = MonitorSnapshot {
            is_live: false,
            ..MonitorSnapshot::placeholder()
        };
        assert_eq!(snapshot.badge(), "OFFLINE");
    }
}
