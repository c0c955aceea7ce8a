//! アップロード進捗の計算

/// トランスポートから届く生の進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub loaded: u64,
    /// 総量が分からない場合は None
    pub total: Option<u64>,
}

/// round(loaded * 100 / total)、100 で頭打ち
///
/// 総量が不明または 0 の場合は None。
pub fn progress_percent(loaded: u64, total: Option<u64>) -> Option<u8> {
    let total = total.filter(|&t| t > 0)?;
    let percent = (loaded as f64 * 100.0 / total as f64).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

/// 1回のアップロード中に値が戻らないようにする
#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    last: Option<u8>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知すべき値を返す（総量不明のイベントは None）
    pub fn observe(&mut self, progress: TransferProgress) -> Option<u8> {
        let percent = progress_percent(progress.loaded, progress.total)?;
        let next = self.last.map_or(percent, |last| last.max(percent));
        self.last = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(loaded: u64, total: Option<u64>) -> TransferProgress {
        TransferProgress { loaded, total }
    }

    #[test]
    fn test_progress_percent_rounds() {
        assert_eq!(progress_percent(0, Some(200)), Some(0));
        assert_eq!(progress_percent(1, Some(3)), Some(33));
        assert_eq!(progress_percent(2, Some(3)), Some(67));
        assert_eq!(progress_percent(200, Some(200)), Some(100));
    }

    #[test]
    fn test_progress_percent_unknown_total() {
        assert_eq!(progress_percent(10, None), None);
        assert_eq!(progress_percent(10, Some(0)), None);
    }

    #[test]
    fn test_progress_percent_clamped() {
        assert_eq!(progress_percent(350, Some(300)), Some(100));
    }

    #[test]
    fn test_tracker_never_decreases() {
        let mut tracker = ProgressTracker::new();
        let values: Vec<u8> = [
            event(10, Some(100)),
            event(50, Some(100)),
            event(40, Some(100)),
            event(70, None),
            event(100, Some(100)),
        ]
        .into_iter()
        .filter_map(|e| tracker.observe(e))
        .collect();

        assert_eq!(values, vec![10, 50, 50, 100]);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 100));
    }
}
