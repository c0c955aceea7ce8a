//! 動画アップロードのセッション状態
//!
//! 状態は `UploadState` の1つだけを取る。アップロード中かつ成功、のような
//! 組み合わせは表現できない。

use crate::error::{Error, Result};
use std::time::Duration;

/// 成功表示から初期状態に戻るまでの時間
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// MIMEタイプが動画かどうか
pub fn is_video_mime(mime_type: &str) -> bool {
    mime_type.starts_with("video/")
}

/// 1024単位で小数2桁に丸めたファイルサイズ（例: "5 MB", "1.5 KB"）
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, SIZE_UNITS[unit])
}

/// 選択ファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMeta {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl VideoMeta {
    pub fn validate(&self) -> Result<()> {
        if is_video_mime(&self.mime_type) {
            Ok(())
        } else {
            Err(Error::InvalidFile(format!(
                "{} ({})",
                self.name,
                if self.mime_type.is_empty() { "unknown type" } else { &self.mime_type }
            )))
        }
    }

    pub fn formatted_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// 選択済みファイル（`F` はプラットフォーム側のハンドル）
#[derive(Debug, Clone, PartialEq)]
pub struct StagedVideo<F> {
    pub meta: VideoMeta,
    pub handle: F,
}

/// 画面に出すステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState<F> {
    Empty,
    Staged(StagedVideo<F>),
    Uploading { video: StagedVideo<F>, progress: u8 },
    Succeeded { video: StagedVideo<F>, generation: u64 },
    Failed { video: StagedVideo<F>, progress: u8 },
}

/// アップロードセッション
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSession<F> {
    state: UploadState<F>,
    generation: u64,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            state: UploadState::Empty,
            generation: 0,
        }
    }
}

impl<F> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState<F> {
        &self.state
    }

    pub fn status(&self) -> UploadStatus {
        match self.state {
            UploadState::Empty | UploadState::Staged(_) => UploadStatus::Idle,
            UploadState::Uploading { .. } => UploadStatus::Uploading,
            UploadState::Succeeded { .. } => UploadStatus::Success,
            UploadState::Failed { .. } => UploadStatus::Error,
        }
    }

    pub fn progress(&self) -> u8 {
        match self.state {
            UploadState::Empty | UploadState::Staged(_) => 0,
            UploadState::Uploading { progress, .. } | UploadState::Failed { progress, .. } => progress,
            UploadState::Succeeded { .. } => 100,
        }
    }

    pub fn video(&self) -> Option<&StagedVideo<F>> {
        match &self.state {
            UploadState::Empty => None,
            UploadState::Staged(video)
            | UploadState::Uploading { video, .. }
            | UploadState::Succeeded { video, .. }
            | UploadState::Failed { video, .. } => Some(video),
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// 「Start Analysis」を押せるか
    pub fn can_start(&self) -> bool {
        matches!(self.state, UploadState::Staged(_) | UploadState::Failed { .. })
    }

    /// ファイルを選択する
    ///
    /// 動画以外は状態を変えずにエラーを返す。アップロード中も受け付けない。
    pub fn select(&mut self, meta: VideoMeta, handle: F) -> Result<()> {
        meta.validate()?;
        if self.is_uploading() {
            return Err(Error::UploadInProgress);
        }
        self.state = UploadState::Staged(StagedVideo { meta, handle });
        Ok(())
    }

    /// 成功したら `SUCCESS_RESET_DELAY` 後に `reset_after_success` へ渡す世代番号を返す
    pub fn succeed(&mut self) -> Option<u64> {
        match std::mem::replace(&mut self.state, UploadState::Empty) {
            UploadState::Uploading { video, .. } => {
                self.generation += 1;
                self.state = UploadState::Succeeded {
                    video,
                    generation: self.generation,
                };
                Some(self.generation)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn fail(&mut self) {
        match std::mem::replace(&mut self.state, UploadState::Empty) {
            UploadState::Uploading { video, progress } => {
                self.state = UploadState::Failed { video, progress };
            }
            other => self.state = other,
        }
    }

    pub fn set_progress(&mut self, percent: u8) {
        if let UploadState::Uploading { progress, .. } = &mut self.state {
            *progress = (*progress).max(percent.min(100));
        }
    }

    /// 同じ世代の成功状態のときだけ空に戻す
    pub fn reset_after_success(&mut self, generation: u64) -> bool {
        match self.state {
            UploadState::Succeeded { generation: current, .. } if current == generation => {
                self.state = UploadState::Empty;
                true
            }
            _ => false,
        }
    }
}

impl<F: Clone> UploadSession<F> {
    /// アップロードを開始し、送信するハンドルを返す
    pub fn start(&mut self) -> Result<F> {
        let video = match &self.state {
            UploadState::Staged(video) | UploadState::Failed { video, .. } => video.clone(),
            UploadState::Uploading { .. } => return Err(Error::UploadInProgress),
            UploadState::Empty | UploadState::Succeeded { .. } => return Err(Error::NothingStaged),
        };
        let handle = video.handle.clone();
        self.state = UploadState::Uploading { video, progress: 0 };
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, size: u64, mime_type: &str) -> VideoMeta {
        VideoMeta {
            name: name.to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }

    fn staged() -> UploadSession<&'static str> {
        let mut session = UploadSession::new();
        session
            .select(meta("report.mp4", 5 * 1024 * 1024, "video/mp4"), "report.mp4")
            .unwrap();
        session
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_file_size_stays_in_gb() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_is_video_mime() {
        assert!(is_video_mime("video/mp4"));
        assert!(is_video_mime("video/quicktime"));
        assert!(!is_video_mime("image/png"));
        assert!(!is_video_mime(""));
    }

    #[test]
    fn test_select_rejects_non_video_without_state_change() {
        let mut session: UploadSession<&str> = UploadSession::new();
        let err = session.select(meta("notes.txt", 12, "text/plain"), "notes.txt").unwrap_err();
        assert!(matches!(err, Error::InvalidFile(_)));
        assert_eq!(session, UploadSession::new());

        let mut session = staged();
        let before = session.clone();
        assert!(session.select(meta("photo.png", 10, "image/png"), "photo.png").is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_select_stages_file() {
        let session = staged();
        assert_eq!(session.status(), UploadStatus::Idle);
        assert_eq!(session.progress(), 0);
        assert!(session.can_start());
        let video = session.video().unwrap();
        assert_eq!(video.meta.formatted_size(), "5 MB");
    }

    #[test]
    fn test_happy_path() {
        let mut session = staged();
        assert_eq!(session.start().unwrap(), "report.mp4");
        assert_eq!(session.status(), UploadStatus::Uploading);
        assert!(!session.can_start());

        for p in [0, 25, 60, 100] {
            session.set_progress(p);
        }
        assert_eq!(session.progress(), 100);

        let generation = session.succeed().unwrap();
        assert_eq!(session.status(), UploadStatus::Success);
        assert!(!session.can_start());

        assert!(session.reset_after_success(generation));
        assert_eq!(session.status(), UploadStatus::Idle);
        assert!(session.video().is_none());
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_success_holds_until_reset_delay() {
        assert_eq!(SUCCESS_RESET_DELAY, Duration::from_secs(3));

        let mut session = staged();
        session.start().unwrap();
        let generation = session.succeed().unwrap();

        // タイマー発火前は成功表示のまま
        assert_eq!(session.status(), UploadStatus::Success);
        assert_eq!(session.progress(), 100);
        assert!(session.video().is_some());
        assert!(!session.reset_after_success(generation + 1));
        assert_eq!(session.status(), UploadStatus::Success);

        // 発火後は空の初期状態
        assert!(session.reset_after_success(generation));
        assert_eq!(*session.state(), UploadState::Empty);
        assert!(!session.reset_after_success(generation));
    }

    #[test]
    fn test_status_names() {
        let names: Vec<&str> = [
            UploadStatus::Idle,
            UploadStatus::Uploading,
            UploadStatus::Success,
            UploadStatus::Error,
        ]
        .iter()
        .map(UploadStatus::as_str)
        .collect();
        assert_eq!(names, vec!["idle", "uploading", "success", "error"]);
    }

    #[test]
    fn test_start_without_file() {
        let mut session: UploadSession<&str> = UploadSession::new();
        assert!(matches!(session.start(), Err(Error::NothingStaged)));
    }

    #[test]
    fn test_start_twice_is_refused() {
        let mut session = staged();
        session.start().unwrap();
        assert!(matches!(session.start(), Err(Error::UploadInProgress)));
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut session = staged();
        session.start().unwrap();
        session.set_progress(40);
        session.fail();
        assert_eq!(session.status(), UploadStatus::Error);
        assert_eq!(session.progress(), 40);
        assert!(session.can_start());

        session.start().unwrap();
        assert_eq!(session.progress(), 0);
        assert_eq!(session.status(), UploadStatus::Uploading);
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut session = staged();
        session.start().unwrap();
        session.set_progress(70);
        session.set_progress(30);
        assert_eq!(session.progress(), 70);
        session.set_progress(250);
        assert_eq!(session.progress(), 100);
    }

    #[test]
    fn test_select_during_upload_is_refused() {
        let mut session = staged();
        session.start().unwrap();
        let err = session.select(meta("other.mov", 1, "video/quicktime"), "other.mov").unwrap_err();
        assert!(matches!(err, Error::UploadInProgress));
        assert_eq!(session.video().unwrap().handle, "report.mp4");
    }

    #[test]
    fn test_stale_reset_keeps_newer_selection() {
        let mut session = staged();
        session.start().unwrap();
        let generation = session.succeed().unwrap();

        session
            .select(meta("second.mp4", 2048, "video/mp4"), "second.mp4")
            .unwrap();
        assert!(!session.reset_after_success(generation));
        assert_eq!(session.video().unwrap().handle, "second.mp4");
    }

    #[test]
    fn test_succeed_and_fail_outside_upload_are_ignored() {
        let mut session = staged();
        assert_eq!(session.succeed(), None);
        session.fail();
        assert_eq!(session.status(), UploadStatus::Idle);
        assert!(session.video().is_some());
    }
}
