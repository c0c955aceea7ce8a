use crate::error::{HygieneError, Result};
use hygiene_common::{is_video_mime, VideoMeta};
use std::path::{Path, PathBuf};

/// 拡張子とMIMEタイプの対応（小文字で比較）
const VIDEO_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
];

/// アップロード対象として選択したローカル動画
#[derive(Debug, Clone)]
pub struct LocalVideo {
    pub path: PathBuf,
    pub meta: VideoMeta,
}

/// 拡張子からMIMEタイプを推定する（不明なら空文字）
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    VIDEO_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// ファイルを確認してアップロード用に準備する
pub fn stage_video(path: &Path) -> Result<LocalVideo> {
    if !path.is_file() {
        return Err(HygieneError::FileNotFound(path.display().to_string()));
    }

    let mime_type = mime_type_for(path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !is_video_mime(mime_type) {
        return Err(HygieneError::NotAVideo(name));
    }

    let size = std::fs::metadata(path)?.len();

    Ok(LocalVideo {
        path: path.to_path_buf(),
        meta: VideoMeta {
            name,
            size,
            mime_type: mime_type.to_string(),
        },
    })
}
