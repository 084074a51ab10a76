//! Transient notifications for form submissions and deletions.
//!
//! Wrap the app in [`ToastProvider`] and call [`use_toast`] from any component:
//!
//! ```ignore
//! let toast = use_toast();
//! toast.success("Athlete saved successfully");
//! ```

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
    duration_secs: u32,
}

/// Handle returned by [`use_toast`]. `Copy`, so it can move into any handler.
#[derive(Clone, Copy)]
pub struct ToastApi {
    toasts: Signal<Toasts>,
}

impl ToastApi {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().entries.retain(|t| t.id != id);
    }

    fn push(&self, level: ToastLevel, message: String) {
        let mut toasts = self.toasts;
        let (id, secs) = {
            let mut t = toasts.write();
            let id = t.next_id;
            t.next_id += 1;
            t.entries.push(Toast { id, level, message });
            (id, t.duration_secs)
        };
        if secs > 0 {
            schedule_dismiss(*self, id, secs);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(api: ToastApi, id: u64, secs: u32) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(secs.into())).await;
        api.dismiss(id);
    });
}

// No timer outside the browser; toasts stay until clicked.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_api: ToastApi, _id: u64, _secs: u32) {}

pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Provides [`ToastApi`] to its children and renders the toast stack.
#[component]
pub fn ToastProvider(#[props(default = 3)] duration_secs: u32, children: Element) -> Element {
    let toasts = use_signal(|| Toasts {
        duration_secs,
        ..Default::default()
    });
    let api = use_context_provider(|| ToastApi { toasts });
    let entries = toasts.read().entries.clone();

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for Toast { id, level, message } in entries {
                div {
                    key: "{id}",
                    class: match level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    },
                    role: "status",
                    onclick: move |_| api.dismiss(id),
                    "{message}"
                }
            }
        }
    }
}
