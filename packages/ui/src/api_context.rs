//! Backend client shared through context.

use api::{ApiClient, Resource};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{PageState, Record};

/// Get the backend client provided by [`ApiProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component for the backend client.
/// Wrap the router with this so every page can reach the backend.
#[component]
pub fn ApiProvider(client: ApiClient, children: Element) -> Element {
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

/// Reload a page's list from its collection.
///
/// A failed fetch is logged and the page keeps what it had; nothing is shown
/// to the user.
pub async fn refresh_page<T>(resource: Resource<T>, mut page: Signal<PageState<T>>)
where
    T: Record + Clone + Serialize + DeserializeOwned + 'static,
{
    page.write().begin_fetch();
    let outcome = resource.list().await;
    if let Err(e) = page.write().finish_fetch(outcome) {
        tracing::error!("Error fetching {}: {}", resource.collection(), e);
    }
}

/// Scroll the window back to the form at the top of the page.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
