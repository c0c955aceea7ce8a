//! 動画アップロードパネル

use crate::api::ApiClient;
use crate::components::progress_bar::ProgressBar;
use crate::components::toaster::use_toaster;
use gloo::console;
use gloo::timers::callback::Timeout;
use hygiene_common::notice::{MSG_INVALID_VIDEO, MSG_UPLOAD_FAILED, MSG_UPLOAD_SUCCESS};
use hygiene_common::{Error, Notice, UploadSession, UploadStatus, VideoMeta, SUCCESS_RESET_DELAY};
use leptos::ev::MouseEvent;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

fn meta_of(file: &File) -> VideoMeta {
    VideoMeta {
        name: file.name(),
        size: file.size().max(0.0) as u64,
        mime_type: file.type_(),
    }
}

/// 成功後に初期状態へ戻すまでのミリ秒
fn reset_delay_ms() -> u32 {
    SUCCESS_RESET_DELAY.as_millis() as u32
}

fn panel_class(status: UploadStatus) -> String {
    format!("card upload status-{}", status.as_str())
}

#[component]
pub fn VideoUpload() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toaster = use_toaster();
    // web_sys::File は Send でないのでローカルシグナルに置く
    let session = RwSignal::new_local(UploadSession::<File>::new());
    let input_ref = NodeRef::<Input>::new();

    let status = move || session.with(|s| s.status());
    let is_uploading = move || status() == UploadStatus::Uploading;

    let open_picker = move |_: MouseEvent| {
        if is_uploading() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let meta = meta_of(&file);
        match session.try_update(|s| s.select(meta, file)) {
            Some(Err(Error::InvalidFile(_))) => toaster.push(Notice::error(MSG_INVALID_VIDEO)),
            Some(Err(e)) => console::warn!(format!("File selection ignored: {}", e)),
            _ => {}
        }
    };

    let on_upload = move |_: MouseEvent| {
        let file = match session.try_update(|s| s.start()) {
            Some(Ok(file)) => file,
            _ => return,
        };
        let client = client.clone();

        spawn_local(async move {
            let on_progress = move |percent: u8| {
                let _ = session.try_update(|s| s.set_progress(percent));
            };

            match client.upload_video(&file, Some(on_progress)).await {
                Ok(receipt) => {
                    console::log!(format!("Upload accepted: {}", receipt.0));
                    toaster.push(Notice::success(MSG_UPLOAD_SUCCESS));

                    if let Some(Some(generation)) = session.try_update(|s| s.succeed()) {
                        Timeout::new(reset_delay_ms(), move || {
                            if session.try_update(|s| s.reset_after_success(generation)) == Some(true) {
                                if let Some(input) = input_ref.get_untracked() {
                                    input.set_value("");
                                }
                            }
                        })
                        .forget();
                    }
                }
                Err(e) => {
                    console::error!(format!("Upload error: {}", e));
                    let _ = session.try_update(|s| s.fail());
                    toaster.push(Notice::error(MSG_UPLOAD_FAILED));
                }
            }
        });
    };

    let file_name = move || {
        session.with(|s| s.video().map(|v| v.meta.name.clone()).unwrap_or_default())
    };
    let file_size = move || {
        session.with(|s| s.video().map(|v| v.meta.formatted_size()).unwrap_or_default())
    };

    view! {
        <section class=move || panel_class(status())>
            <div class="card-header">
                <h2 class="card-title">"Video Upload"</h2>
                <p class="card-description">"Upload recorded footage for hygiene analysis"</p>
            </div>
            <div class="card-content">
                <input
                    node_ref=input_ref
                    type="file"
                    accept="video/*"
                    class="hidden"
                    on:change=on_file_change
                />
                <div
                    class=move || if is_uploading() { "upload-area disabled" } else { "upload-area" }
                    on:click=open_picker
                >
                    <Show
                        when=move || session.with(|s| s.video().is_some())
                        fallback=|| view! {
                            <p>"Click to select video file"</p>
                            <p class="text-muted">"Supported formats: MP4, AVI, MOV"</p>
                        }
                    >
                        <p class="file-name">{file_name}</p>
                        <p class="text-muted">{file_size}</p>
                    </Show>
                </div>

                <Show when=is_uploading>
                    <ProgressBar progress=Signal::derive(move || session.with(|s| s.progress())) />
                </Show>

                <Show when=move || status() == UploadStatus::Success>
                    <p class="upload-status status-success">"Upload successful!"</p>
                </Show>
                <Show when=move || status() == UploadStatus::Error>
                    <p class="upload-status status-error">"Upload failed. Please try again."</p>
                </Show>

                <button
                    class="btn btn-primary btn-block"
                    disabled=move || !session.with(|s| s.can_start())
                    on:click=on_upload
                >
                    {move || if is_uploading() { "Processing..." } else { "Start Analysis" }}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_delay_is_three_seconds() {
        assert_eq!(reset_delay_ms(), 3_000);
    }

    #[test]
    fn test_panel_class_tracks_status() {
        assert_eq!(panel_class(UploadStatus::Idle), "card upload status-idle");
        assert_eq!(panel_class(UploadStatus::Success), "card upload status-success");
    }
}
