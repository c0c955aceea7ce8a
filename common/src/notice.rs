//! トースト通知の内容

pub const MSG_INVALID_VIDEO: &str = "Please select a valid video file";
pub const MSG_UPLOAD_SUCCESS: &str = "Video uploaded successfully! Analysis in progress...";
pub const MSG_UPLOAD_FAILED: &str = "Failed to upload video. Please try again.";
pub const MSG_SUMMARY_SUCCESS: &str = "Summary generated successfully!";
pub const MSG_SUMMARY_FAILED: &str = "Failed to generate summary";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// 一時的に表示する通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
