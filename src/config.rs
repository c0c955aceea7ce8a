use crate::error::{HygieneError, Result};
use hygiene_common::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 環境変数でベースURLを上書きする
pub const BASE_URL_ENV: &str = "HYGIENE_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// アップロード時に1回で送るバイト数
    pub upload_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            upload_chunk_size: 256 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HygieneError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("hygiene-monitor").join("config.json"))
    }

    /// 優先順: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override {
            return url.to_string();
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.base_url.clone()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(HygieneError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = url;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.upload_chunk_size > 0);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default();
        assert_eq!(
            config.resolve_base_url(Some("http://10.0.0.5:8000")),
            "http://10.0.0.5:8000"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"base_url":"http://edge:8000"}"#).unwrap();
        assert_eq!(config.base_url, "http://edge:8000");
        assert_eq!(config.upload_chunk_size, Config::default().upload_chunk_size);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = Config::default();
        let err = config.set_base_url("localhost:8000".into()).unwrap_err();
        assert!(matches!(err, HygieneError::Config(_)));
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
