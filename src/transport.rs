//! reqwest によるバックエンド通信

use crate::video::LocalVideo;
use futures::StreamExt;
use hygiene_common::{
    Error as ApiError, ProgressFn, Result as ApiResult, TransferProgress, Transport,
    JSON_CONTENT_TYPE,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use serde_json::Value;
use tokio_util::io::ReaderStream;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    chunk_size: usize,
}

impl HttpTransport {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            client: Client::new(),
            chunk_size: chunk_size.max(1),
        }
    }
}

/// 2xx 以外は Status エラー、本文は JSON として読む
async fn read_json(response: Response) -> ApiResult<Value> {
    let status = response.status();
    let url = response.url().to_string();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response from {url}: {e}")))?;
    Ok(serde_json::from_slice(&body)?)
}

impl Transport for HttpTransport {
    type File = LocalVideo;

    async fn get_json(&self, url: &str) -> ApiResult<Value> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &LocalVideo,
        mut on_progress: ProgressFn,
    ) -> ApiResult<Value> {
        let source = tokio::fs::File::open(&file.path)
            .await
            .map_err(|e| ApiError::Transport(format!("{}: {e}", file.path.display())))?;
        let total = source
            .metadata()
            .await
            .map_err(|e| ApiError::Transport(format!("{}: {e}", file.path.display())))?
            .len();
        tracing::debug!(%url, file = %file.meta.name, total, "POST multipart");

        // ディスクから chunk_size ずつ読みながら送る。送信済みバイト数はチャネル経由で戻す
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<u64>();
        let mut loaded = 0u64;
        let body = ReaderStream::with_capacity(source, self.chunk_size).map(move |chunk| {
            if let Ok(bytes) = &chunk {
                loaded += bytes.len() as u64;
                let _ = tx.send(loaded);
            }
            chunk
        });

        let part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(file.meta.name.clone())
            .mime_str(&file.meta.mime_type)
            .map_err(|e| ApiError::InvalidFile(e.to_string()))?;
        let form = Form::new().part(field.to_string(), part);

        let request = self.client.post(url).multipart(form).send();
        tokio::pin!(request);

        let response = loop {
            tokio::select! {
                result = &mut request => break result,
                Some(loaded) = rx.recv() => on_progress(TransferProgress { loaded, total: Some(total) }),
            }
        };
        while let Ok(loaded) = rx.try_recv() {
            on_progress(TransferProgress {
                loaded,
                total: Some(total),
            });
        }

        let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response).await
    }
}
