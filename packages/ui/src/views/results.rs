use dioxus::prelude::*;
use store::{Athlete, PageState, ResultRecord};

use crate::{refresh_page, scroll_to_top, use_api, ResultForm, ResultList};

/// Result administration.
///
/// Needs the athletes too: they own the results, and saving a result rewrites
/// its owner.
#[component]
pub fn ResultsView() -> Element {
    let api = use_api();
    let mut page = use_signal(PageState::<ResultRecord>::new);
    let athletes = use_signal(PageState::<Athlete>::new);
    // Owner of the result being edited.
    let mut owner = use_signal(|| None::<u64>);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            refresh_page(api.athletes(), athletes).await;
            refresh_page(api.results(), page).await;
        }
    });

    let reload = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            refresh_page(api.athletes(), athletes).await;
            refresh_page(api.results(), page).await;
        });
    });

    let state = page.read();
    let selected = state.selected().cloned();
    let records = state.records().to_vec();
    let fetching = state.is_fetching() || athletes.read().is_fetching();
    drop(state);
    let athlete_records = athletes.read().records().to_vec();
    let form_key = selected
        .as_ref()
        .and_then(|r| r.id)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div {
            class: "page",
            ResultForm {
                key: "{form_key}",
                result: selected,
                athlete_id: owner(),
                athletes: athlete_records.clone(),
                on_saved: move |_| {
                    page.write().finish_edit();
                    owner.set(None);
                    scroll_to_top();
                    reload.call(());
                },
                on_cancel: move |_| {
                    page.write().finish_edit();
                    owner.set(None);
                },
            }
            if fetching {
                p { class: "muted", "Loading results..." }
            }
            ResultList {
                results: records,
                athletes: athlete_records,
                on_edit: move |(result, owner_id): (ResultRecord, Option<u64>)| {
                    owner.set(owner_id);
                    page.write().edit(result);
                    scroll_to_top();
                },
                on_deleted: move |id| {
                    page.write().remove(id);
                },
            }
        }
    }
}
