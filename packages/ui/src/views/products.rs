use dioxus::prelude::*;
use store::{PageState, Product};

use crate::{refresh_page, scroll_to_top, use_api, ProductForm, ProductList};

#[component]
pub fn ProductsView() -> Element {
    let api = use_api();
    let mut page = use_signal(PageState::<Product>::new);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move { refresh_page(api.products(), page).await }
    });

    let reload = use_callback(move |_: ()| {
        let resource = api.products();
        spawn(async move { refresh_page(resource, page).await });
    });

    let state = page.read();
    let selected = state.selected().cloned();
    let records = state.records().to_vec();
    let fetching = state.is_fetching();
    drop(state);
    let form_key = selected
        .as_ref()
        .and_then(|p| p.id)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div {
            class: "page",
            ProductForm {
                key: "{form_key}",
                product: selected,
                on_saved: move |_| {
                    page.write().finish_edit();
                    scroll_to_top();
                    reload.call(());
                },
                on_cancel: move |_| page.write().finish_edit(),
            }
            if fetching {
                p { class: "muted", "Loading products..." }
            }
            ProductList {
                products: records,
                on_edit: move |product| {
                    page.write().edit(product);
                    scroll_to_top();
                },
                on_deleted: move |id| {
                    page.write().remove(id);
                },
            }
        }
    }
}
