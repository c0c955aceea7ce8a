//! 衛生監視バックエンドのAPIクライアント
//!
//! 通信そのものは `Transport` に任せる。ブラウザ版は fetch/XMLHttpRequest、
//! CLI版は reqwest で実装し、テストでは偽物に差し替える。
//! リトライ・タイムアウト・キャッシュ・認証ヘッダは持たない。

use crate::error::Result;
use crate::filters::HygieneFilters;
use crate::metrics::{BreakdownReport, SummaryReport, UploadReceipt};
use crate::progress::{ProgressTracker, TransferProgress};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const SUMMARY_PATH: &str = "/api/hygiene/summary";
pub const BREAKDOWN_PATH: &str = "/api/hygiene/breakdown";
pub const UPLOAD_PATH: &str = "/api/hygiene/upload";
/// multipart のフィールド名
pub const UPLOAD_FIELD: &str = "video";
/// GET リクエストの既定ヘッダ値
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// トランスポートへ渡す進捗コールバック
pub type ProgressFn = Box<dyn FnMut(TransferProgress)>;

/// HTTP 通信の差し替え口
///
/// 2xx 以外のレスポンスは `Error::Status` として返すこと。
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// アップロード対象のファイル
    type File;

    async fn get_json(&self, url: &str) -> Result<Value>;

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &Self::File,
        on_progress: ProgressFn,
    ) -> Result<Value>;
}

/// ベースURLを1つ持つクライアント
#[derive(Debug, Clone)]
pub struct HygieneClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> HygieneClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// パスとクエリから完全なURLを組み立てる
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// サマリー取得
    pub async fn get_summary(&self, filters: &HygieneFilters) -> Result<SummaryReport> {
        let url = self.endpoint(SUMMARY_PATH, &filters.query_params());
        let result = match self.transport.get_json(&url).await {
            Ok(value) => Ok(SummaryReport::from_value(value)),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::error!(%url, error = %e, "Error fetching hygiene summary");
        }
        result
    }

    /// 内訳取得
    pub async fn get_breakdown(&self, filters: &HygieneFilters) -> Result<BreakdownReport> {
        let url = self.endpoint(BREAKDOWN_PATH, &filters.query_params());
        let result = match self.transport.get_json(&url).await {
            Ok(value) => Ok(BreakdownReport::from_value(value)),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::error!(%url, error = %e, "Error fetching breakdown");
        }
        result
    }

    /// 動画アップロード
    ///
    /// `on_progress` には総量が分かるイベントごとに 0〜100 の値が渡る。
    /// 1回のアップロード中に値が減ることはない。
    pub async fn upload_video<P>(
        &self,
        file: &T::File,
        on_progress: Option<P>,
    ) -> Result<UploadReceipt>
    where
        P: FnMut(u8) + 'static,
    {
        let url = self.endpoint(UPLOAD_PATH, &[]);
        let mut tracker = ProgressTracker::new();
        let mut on_progress = on_progress;
        let report: ProgressFn = Box::new(move |progress| {
            if let (Some(percent), Some(callback)) = (tracker.observe(progress), on_progress.as_mut()) {
                callback(percent);
            }
        });

        match self.transport.post_multipart(&url, UPLOAD_FIELD, file, report).await {
            Ok(value) => Ok(UploadReceipt(value)),
            Err(e) => {
                tracing::error!(%url, error = %e, "Error uploading video");
                Err(e)
            }
        }
    }
}
