use dioxus::prelude::*;
use store::validation::ResultDraft;
use store::{Athlete, Discipline, ResultRecord, ResultType};

use crate::components::{Button, ButtonVariant, FormErrors};
use crate::{use_api, use_toast};

/// Create/edit form for results.
///
/// Saving writes the result itself, then the owning athlete with the result
/// attached. Picking a different athlete while editing also takes the result
/// away from the previous owner. The result type is taken from the selected
/// discipline.
#[component]
pub fn ResultForm(
    result: Option<ResultRecord>,
    /// Owner of `result` when editing.
    athlete_id: Option<u64>,
    athletes: Vec<Athlete>,
    on_saved: EventHandler<ResultRecord>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(|| match &result {
        Some(r) => ResultDraft::from_result(r, athlete_id),
        None => ResultDraft::default(),
    });
    let mut errors = use_signal(Vec::<String>::new);
    let mut catalogue = use_signal(Vec::<Discipline>::new);
    let mut saving = use_signal(|| false);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            match api.disciplines().list().await {
                Ok(list) => catalogue.set(list),
                Err(e) => {
                    tracing::error!("Error fetching disciplines: {}", e);
                    toast.error("Failed to fetch disciplines");
                }
            }
        }
    });

    let handle_submit = move |_| {
        let (record, owner) = match draft.read().validate(&catalogue.read()) {
            Ok(valid) => valid,
            Err(e) => {
                errors.set(e.0);
                return;
            }
        };
        errors.set(Vec::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            let outcome = match api.results().save(&record).await {
                Ok(saved) => api
                    .reassign_result(athlete_id, owner, &saved)
                    .await
                    .map(|_| saved),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(saved) => {
                    draft.set(ResultDraft::default());
                    toast.success("Result saved successfully");
                    on_saved.call(saved);
                }
                Err(e) => {
                    tracing::error!("Error saving result: {}", e);
                    toast.error("Failed to save result");
                }
            }
            saving.set(false);
        });
    };

    let d = draft();
    let editing = d.id.is_some();
    let result_type = d.result_type(&catalogue.read());
    let type_label = result_type.map(|t| t.label()).unwrap_or("-");
    let value_hint = match result_type {
        Some(ResultType::Time) => "hh:mm:ss:ms",
        Some(ResultType::Distance) => "metres, e.g. 7.45",
        Some(ResultType::Points) => "points, e.g. 850",
        None => "",
    };
    let athlete_value = d.athlete_id.map(|id| id.to_string()).unwrap_or_default();
    let discipline_value = d.discipline_id.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "form-card",
            h2 { if editing { "Edit Result" } else { "Add New Result" } }

            div {
                class: "form-field",
                label { r#for: "result-athlete", "Athlete" }
                select {
                    id: "result-athlete",
                    value: "{athlete_value}",
                    onchange: move |evt: FormEvent| {
                        draft.write().athlete_id = evt.value().parse::<u64>().ok();
                    },
                    option { value: "", "Select Athlete" }
                    for athlete in athletes.iter().filter(|a| a.id.is_some()) {
                        option {
                            key: "{athlete.id.unwrap_or_default()}",
                            value: "{athlete.id.unwrap_or_default()}",
                            "{athlete.name} ({athlete.club})"
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "result-discipline", "Discipline" }
                select {
                    id: "result-discipline",
                    value: "{discipline_value}",
                    onchange: move |evt: FormEvent| {
                        draft.write().discipline_id = evt.value().parse::<u64>().ok();
                    },
                    option { value: "", "Select Discipline" }
                    for discipline in catalogue().into_iter().filter(|d| d.id.is_some()) {
                        option {
                            key: "{discipline.id.unwrap_or_default()}",
                            value: "{discipline.id.unwrap_or_default()}",
                            "{discipline.name}"
                        }
                    }
                }
            }

            div {
                class: "form-field",
                span { class: "form-label", "Result Type" }
                span { class: "form-static", "{type_label}" }
            }

            div {
                class: "form-field",
                label { r#for: "result-date", "Date" }
                input {
                    id: "result-date",
                    r#type: "date",
                    value: "{d.date}",
                    oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "result-value", "Result Value" }
                input {
                    id: "result-value",
                    r#type: "text",
                    placeholder: "{value_hint}",
                    value: "{d.result_value}",
                    oninput: move |evt: FormEvent| draft.write().result_value = evt.value(),
                }
            }

            FormErrors { errors: errors() }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: handle_submit,
                    "Save Result"
                }
                if editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
