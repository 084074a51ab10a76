use dioxus::prelude::*;
use store::validation::ProductDraft;
use store::Product;

use crate::components::{Button, ButtonVariant, FormErrors};
use crate::{use_api, use_toast};

/// Create/edit form for the product demo.
#[component]
pub fn ProductForm(
    product: Option<Product>,
    on_saved: EventHandler<Product>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut draft = use_signal(|| product.as_ref().map(ProductDraft::from).unwrap_or_default());
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
            match api.products().save(&record).await {
                Ok(saved) => {
                    draft.set(ProductDraft::default());
                    toast.success("Product saved successfully");
                    on_saved.call(saved);
                }
                Err(e) => {
                    tracing::error!("Error saving product: {}", e);
                    toast.error("Failed to save product");
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
            h2 { if editing { "Edit Product" } else { "Add New Product" } }

            div {
                class: "form-field",
                label { r#for: "product-name", "Name" }
                input {
                    id: "product-name",
                    r#type: "text",
                    value: "{d.name}",
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "product-price", "Price" }
                input {
                    id: "product-price",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{d.price}",
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        if value.trim().parse::<f64>().is_ok_and(|n| n < 0.0) {
                            return;
                        }
                        draft.write().price = value;
                    },
                }
            }

            FormErrors { errors: errors() }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: handle_submit,
                    "Save Product"
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
