use dioxus::prelude::*;
use store::{Discipline, PageState};

use crate::{refresh_page, scroll_to_top, use_api, DisciplineForm, DisciplineList};

#[component]
pub fn DisciplinesView() -> Element {
    let api = use_api();
    let mut page = use_signal(PageState::<Discipline>::new);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move { refresh_page(api.disciplines(), page).await }
    });

    let reload = use_callback(move |_: ()| {
        let resource = api.disciplines();
        spawn(async move { refresh_page(resource, page).await });
    });

    let state = page.read();
    let selected = state.selected().cloned();
    let records = state.records().to_vec();
    let fetching = state.is_fetching();
    drop(state);
    let form_key = selected
        .as_ref()
        .and_then(|d| d.id)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div {
            class: "page",
            DisciplineForm {
                key: "{form_key}",
                discipline: selected,
                on_saved: move |_| {
                    page.write().finish_edit();
                    scroll_to_top();
                    reload.call(());
                },
                on_cancel: move |_| page.write().finish_edit(),
            }
            if fetching {
                p { class: "muted", "Loading disciplines..." }
            }
            DisciplineList {
                disciplines: records,
                on_edit: move |discipline| {
                    page.write().edit(discipline);
                    scroll_to_top();
                },
            }
        }
    }
}
