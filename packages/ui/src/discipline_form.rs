use dioxus::prelude::*;
use store::validation::DisciplineDraft;
use store::{Discipline, ResultType};

use crate::components::{Button, ButtonVariant, FormErrors};
use crate::{use_api, use_toast};

/// Create/edit form for disciplines.
#[component]
pub fn DisciplineForm(
    discipline: Option<Discipline>,
    on_saved: EventHandler<Discipline>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(|| {
        discipline
            .as_ref()
            .map(DisciplineDraft::from)
            .unwrap_or_default()
    });
    let mut errors = use_signal(Vec::<String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_| {
        let record = match draft.read().validate() {
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
            match api.disciplines().save(&record).await {
                Ok(saved) => {
                    draft.set(DisciplineDraft::default());
                    toast.success("Discipline saved successfully");
                    on_saved.call(saved);
                }
                Err(e) => {
                    tracing::error!("Error saving discipline: {}", e);
                    toast.error("Failed to save discipline");
                }
            }
            saving.set(false);
        });
    };

    let d = draft();
    let editing = d.id.is_some();
    let selected_type = d.result_type.map(|t| t.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "form-card",
            h2 { if editing { "Edit Discipline" } else { "Add New Discipline" } }

            div {
                class: "form-field",
                label { r#for: "discipline-name", "Name" }
                input {
                    id: "discipline-name",
                    r#type: "text",
                    value: "{d.name}",
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "discipline-type", "Result Type" }
                select {
                    id: "discipline-type",
                    value: "{selected_type}",
                    onchange: move |evt: FormEvent| {
                        draft.write().result_type = ResultType::parse(&evt.value());
                    },
                    option { value: "", "Select Result Type" }
                    for result_type in ResultType::ALL {
                        option {
                            key: "{result_type}",
                            value: "{result_type}",
                            "{result_type.label()}"
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
                    "Save Discipline"
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
