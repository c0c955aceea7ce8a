use thiserror::Error;

#[derive(Error, Debug)]
pub enum HygieneError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("動画ファイルではありません: {0}")]
    NotAVideo(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] hygiene_common::Error),
}

pub type Result<T> = std::result::Result<T, HygieneError>;
