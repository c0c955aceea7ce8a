//! トースト通知

use gloo::timers::callback::Timeout;
use hygiene_common::Notice;
use leptos::prelude::*;

/// 自動で消えるまでの時間
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// 通知キュー（App でコンテキストに登録する）
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toaster = *self;
        Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast-{}", toast.notice.kind.as_str());
                    view! {
                        <div class=class role="status" on:click=move |_| toaster.dismiss(id)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
