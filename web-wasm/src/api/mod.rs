//! バックエンドAPI

pub mod browser;

use hygiene_common::{HygieneClient, DEFAULT_BASE_URL};

pub use browser::BrowserTransport;

/// 画面全体で共有するクライアント（コンテキストで渡す）
pub type ApiClient = HygieneClient<BrowserTransport>;

/// ビルド時に HYGIENE_API_BASE_URL が与えられればそれを使う
pub fn api_base_url() -> &'static str {
    option_env!("HYGIENE_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

pub fn build_client() -> ApiClient {
    HygieneClient::new(api_base_url(), BrowserTransport)
}
