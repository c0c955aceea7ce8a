//! ブラウザ用トランスポート
//!
//! GET は fetch、アップロードは送信進捗を取れる XMLHttpRequest を使う。

use futures::channel::oneshot;
use hygiene_common::{Error, ProgressFn, Result, TransferProgress, Transport, JSON_CONTENT_TYPE};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, Request, RequestInit, RequestMode, Response, XmlHttpRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_error(context: &str, value: JsValue) -> Error {
    Error::Transport(format!("{}: {:?}", context, value))
}

/// ProgressEvent の値を変換（総量不明なら total は None）
pub fn transfer_progress(loaded: f64, total: f64, length_computable: bool) -> TransferProgress {
    TransferProgress {
        loaded: loaded.max(0.0) as u64,
        total: (length_computable && total > 0.0).then(|| total as u64),
    }
}

/// ステータスと本文からレスポンスを解釈する
pub fn parse_response(status: u16, url: &str, body: &str) -> Result<Value> {
    if !(200..300).contains(&status) {
        return Err(Error::Status {
            status,
            url: url.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

impl Transport for BrowserTransport {
    type File = File;

    async fn get_json(&self, url: &str) -> Result<Value> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_error("request", e))?;
        request
            .headers()
            .set("Content-Type", JSON_CONTENT_TYPE)
            .map_err(|e| js_error("headers", e))?;

        let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch", e))?;
        let resp: Response = resp_value.dyn_into().map_err(|e| js_error("response", e))?;

        let text = JsFuture::from(resp.text().map_err(|e| js_error("body", e))?)
            .await
            .map_err(|e| js_error("body", e))?;
        parse_response(resp.status(), url, &text.as_string().unwrap_or_default())
    }

    async fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &File,
        mut on_progress: ProgressFn,
    ) -> Result<Value> {
        let form = FormData::new().map_err(|e| js_error("form", e))?;
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| js_error("form", e))?;

        let xhr = XmlHttpRequest::new().map_err(|e| js_error("xhr", e))?;
        xhr.open("POST", url).map_err(|e| js_error("xhr", e))?;
        // Content-Type は boundary 付きでブラウザが設定する

        let (tx, rx) = oneshot::channel::<std::result::Result<(), String>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_load = {
            let tx = tx.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Ok(()));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let on_error = {
            let tx = tx.clone();
            Closure::wrap(Box::new(move |ev: web_sys::Event| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(format!("upload {}", ev.type_())));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let on_upload_progress = Closure::wrap(Box::new(move |ev: ProgressEvent| {
            on_progress(transfer_progress(ev.loaded(), ev.total(), ev.length_computable()));
        }) as Box<dyn FnMut(_)>);

        let upload = xhr.upload().map_err(|e| js_error("xhr", e))?;
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(on_error.as_ref().unchecked_ref()));
        upload.set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));

        xhr.send_with_opt_form_data(Some(&form))
            .map_err(|e| js_error("send", e))?;

        let outcome = rx.await;

        // クロージャ破棄前にハンドラを外す
        xhr.set_onload(None);
        xhr.set_onerror(None);
        xhr.set_onabort(None);
        upload.set_onprogress(None);

        outcome
            .map_err(|_| Error::Transport("upload was dropped".into()))?
            .map_err(Error::Transport)?;

        let status = xhr.status().map_err(|e| js_error("status", e))?;
        let body = xhr
            .response_text()
            .map_err(|e| js_error("body", e))?
            .unwrap_or_default();
        parse_response(status, url, &body)
    }
}
