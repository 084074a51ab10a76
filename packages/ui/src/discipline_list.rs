use dioxus::prelude::*;
use store::Discipline;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaPen;
use crate::Icon;

#[component]
pub fn DisciplineList(disciplines: Vec<Discipline>, on_edit: EventHandler<Discipline>) -> Element {
    rsx! {
        div {
            class: "list-card",
            h2 { "Disciplines" }
            if disciplines.is_empty() {
                p { class: "muted", "No disciplines yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Result Type" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for discipline in disciplines {
                            DisciplineRow {
                                key: "{discipline.id.unwrap_or_default()}",
                                discipline: discipline.clone(),
                                on_edit: move |d| on_edit.call(d),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DisciplineRow(discipline: Discipline, on_edit: EventHandler<Discipline>) -> Element {
    let for_edit = discipline.clone();

    rsx! {
        tr {
            td { "{discipline.name}" }
            td { "{discipline.result_type.label()}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
            }
        }
    }
}
