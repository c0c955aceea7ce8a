//! Hygiene Monitor CLI
//!
//! 衛生監視バックエンドのサマリー取得・動画アップロードをターミナルから行う

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod transport;
pub mod video;

use hygiene_common::HygieneClient;
use transport::HttpTransport;

/// CLI で使うクライアント
pub type ApiClient = HygieneClient<HttpTransport>;

pub fn build_client(base_url: &str, chunk_size: usize) -> ApiClient {
    HygieneClient::new(base_url, HttpTransport::new(chunk_size))
}
