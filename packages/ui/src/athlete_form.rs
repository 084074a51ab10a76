use dioxus::prelude::*;
use store::models::GENDERS;
use store::validation::AthleteDraft;
use store::{Athlete, Discipline};

use crate::components::{Button, ButtonVariant, FormErrors};
use crate::{use_api, use_toast};

/// Create/edit form for athletes.
///
/// Seeded from `athlete` in edit mode, blank otherwise. The page remounts the
/// form (via `key`) when the selection changes.
#[component]
pub fn AthleteForm(
    athlete: Option<Athlete>,
    on_saved: EventHandler<Athlete>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(|| athlete.as_ref().map(AthleteDraft::from).unwrap_or_default());
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
        let record = match draft.read().validate(&catalogue.read()) {
            Ok(record) => record,
            Err(e) => {
                errors.set(e.0);
                return;
            }
        };
        errors.set(Vec::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.athletes().save(&record).await {
                Ok(saved) => {
                    draft.set(AthleteDraft::default());
                    toast.success("Athlete saved successfully");
                    on_saved.call(saved);
                }
                Err(e) => {
                    tracing::error!("Error saving athlete: {}", e);
                    toast.error("Failed to save athlete");
                }
            }
            saving.set(false);
        });
    };

    let d = draft();
    let editing = d.id.is_some();

    rsx! {
        div {
            class: "form-card",
            h2 { if editing { "Edit Athlete" } else { "Add New Athlete" } }

            div {
                class: "form-field",
                label { r#for: "athlete-name", "Name" }
                input {
                    id: "athlete-name",
                    r#type: "text",
                    value: "{d.name}",
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "athlete-age", "Age" }
                input {
                    id: "athlete-age",
                    r#type: "number",
                    min: "0",
                    value: "{d.age}",
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        if value.trim().parse::<i64>().is_ok_and(|n| n < 0) {
                            return;
                        }
                        draft.write().age = value;
                    },
                }
            }

            div {
                class: "form-field",
                label { r#for: "athlete-gender", "Gender" }
                select {
                    id: "athlete-gender",
                    value: "{d.gender}",
                    onchange: move |evt: FormEvent| draft.write().gender = evt.value(),
                    option { value: "", "Select Gender" }
                    for gender in GENDERS {
                        option { key: "{gender}", value: "{gender}", "{gender}" }
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "athlete-club", "Club" }
                input {
                    id: "athlete-club",
                    r#type: "text",
                    value: "{d.club}",
                    oninput: move |evt: FormEvent| draft.write().club = evt.value(),
                }
            }

            fieldset {
                class: "form-field",
                legend { "Disciplines" }
                if catalogue.read().is_empty() {
                    p { class: "muted", "No disciplines yet. Create one on the Disciplines page." }
                }
                for discipline in catalogue() {
                    if let Some(id) = discipline.id {
                        label {
                            key: "{id}",
                            class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: d.has_discipline(id),
                                onchange: move |_| draft.write().toggle_discipline(id),
                            }
                            "{discipline.name}"
                        }
                    }
                }
            }

            FormErrors { errors: errors() }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: handle_submit,
                    "Save Athlete"
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
