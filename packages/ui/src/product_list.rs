use dioxus::prelude::*;
use store::listing::{product_rows, ProductSortField};
use store::{Product, SortState};

use crate::components::{Button, ButtonVariant, SortHeader};
use crate::icons::{FaPen, FaTrash};
use crate::{use_api, use_toast, Icon};

const COLUMNS: [(ProductSortField, &str); 2] = [
    (ProductSortField::Name, "Name"),
    (ProductSortField::Price, "Price"),
];

#[component]
pub fn ProductList(
    products: Vec<Product>,
    on_edit: EventHandler<Product>,
    on_deleted: EventHandler<u64>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut sort = use_signal(SortState::<ProductSortField>::default);

    let handle_delete = use_callback(move |product: Product| {
        let api = api.clone();
        spawn(async move {
            match api.products().remove(&product, |id| on_deleted.call(id)).await {
                Ok(true) => toast.success("Product deleted successfully"),
                Ok(false) => tracing::warn!("Product {} has no id, nothing to delete", product.name),
                Err(e) => {
                    tracing::error!("Error deleting product {:?}: {}", product.id, e);
                    toast.error("Could not delete product, something went wrong.");
                }
            }
        });
    });

    let rows: Vec<Product> = product_rows(&products, &sort.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "list-card",
            h2 { "Products" }
            if rows.is_empty() {
                p { class: "muted", "No products yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for (field, label) in COLUMNS {
                                SortHeader {
                                    key: "{label}",
                                    label: "{label}",
                                    indicator: "{sort.read().indicator(field)}",
                                    onclick: move |_| sort.write().toggle(field),
                                }
                            }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for product in rows {
                            ProductRow {
                                key: "{product.id.unwrap_or_default()}",
                                product: product.clone(),
                                on_edit: move |p| on_edit.call(p),
                                on_delete: move |p| handle_delete.call(p),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductRow(product: Product, on_edit: EventHandler<Product>, on_delete: EventHandler<Product>) -> Element {
    let for_edit = product.clone();
    let for_delete = product.clone();

    rsx! {
        tr {
            td { "{product.name}" }
            td { "{product.price:.2}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Delete",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
