//! Hygiene Monitor Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・APIクライアント

pub mod client;
pub mod error;
pub mod filters;
pub mod layout;
pub mod metrics;
pub mod notice;
pub mod progress;
pub mod summary;
pub mod upload;

pub use client::{HygieneClient, ProgressFn, Transport, DEFAULT_BASE_URL, JSON_CONTENT_TYPE};
pub use error::{Error, Result};
pub use filters::{FilterField, HygieneFilters, Zone};
pub use layout::{MonitorSnapshot, QuickStat, QUICK_STATS};
pub use metrics::{BreakdownReport, Metric, SummaryReport, UploadReceipt, DEFAULT_METRICS};
pub use notice::{Notice, NoticeKind};
pub use progress::{progress_percent, ProgressTracker, TransferProgress};
pub use summary::SummaryDialogState;
pub use upload::{
    format_file_size, is_video_mime, StagedVideo, UploadSession, UploadState, UploadStatus,
    VideoMeta, SUCCESS_RESET_DELAY,
};
