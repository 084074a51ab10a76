use dioxus::prelude::*;
use store::listing::{result_discipline_names, result_rows, ResultFilter, ResultSortField};
use store::models::GENDERS;
use store::{AgeGroup, Athlete, ResultOwners, ResultRecord, SortState};

use crate::components::{Button, ButtonVariant, SortHeader};
use crate::icons::{FaPen, FaTrash};
use crate::{use_api, use_toast, Icon};

const COLUMNS: [(ResultSortField, &str); 4] = [
    (ResultSortField::Discipline, "Discipline"),
    (ResultSortField::Value, "Result"),
    (ResultSortField::Date, "Date"),
    (ResultSortField::Athlete, "Athlete"),
];

/// One table row, resolved against the owner index.
#[derive(Clone, PartialEq)]
struct ResultRow {
    result: ResultRecord,
    athlete_name: String,
    owner_id: Option<u64>,
}

/// Result table, ranked best-first until a column header is clicked.
#[component]
pub fn ResultList(
    results: Vec<ResultRecord>,
    athletes: Vec<Athlete>,
    /// The result and the id of the athlete holding it.
    on_edit: EventHandler<(ResultRecord, Option<u64>)>,
    on_deleted: EventHandler<u64>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut filter = use_signal(ResultFilter::default);
    let mut sort = use_signal(SortState::<ResultSortField>::default);

    let handle_delete = use_callback(move |result: ResultRecord| {
        let api = api.clone();
        spawn(async move {
            match api.results().remove(&result, |id| on_deleted.call(id)).await {
                Ok(true) => toast.success("Result deleted successfully"),
                Ok(false) => tracing::warn!("Result has no id, nothing to delete"),
                Err(e) => {
                    tracing::error!("Error deleting result {:?}: {}", result.id, e);
                    toast.error("Could not delete result, something went wrong.");
                }
            }
        });
    });

    let owners = ResultOwners::new(&athletes);
    let rows: Vec<ResultRow> = result_rows(&results, &owners, &filter.read(), &sort.read())
        .into_iter()
        .map(|result| ResultRow {
            result: result.clone(),
            athlete_name: owners.athlete_name(result).to_string(),
            owner_id: owners.owner_id(result),
        })
        .collect();
    let discipline_names = result_discipline_names(&results);
    let f = filter();
    let discipline_value = f.discipline.clone().unwrap_or_default();
    let gender_value = f.gender.clone().unwrap_or_default();
    let age_value = f.age_group.map(|g| g.key()).unwrap_or_default();

    rsx! {
        div {
            class: "list-card",
            h2 { "Results" }

            div {
                class: "filters",
                select {
                    value: "{discipline_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        filter.write().discipline = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "All Disciplines" }
                    for name in discipline_names {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                select {
                    value: "{gender_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        filter.write().gender = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "All Genders" }
                    for gender in GENDERS {
                        option { key: "{gender}", value: "{gender}", "{gender}" }
                    }
                }
                select {
                    value: "{age_value}",
                    onchange: move |evt: FormEvent| {
                        filter.write().age_group = AgeGroup::from_key(&evt.value());
                    },
                    option { value: "", "All Age Groups" }
                    for group in AgeGroup::ALL {
                        option { key: "{group.key()}", value: "{group.key()}", "{group.label()}" }
                    }
                }
            }

            if results.is_empty() {
                p { class: "muted", "No results yet." }
            } else if rows.is_empty() {
                p { class: "muted", "No results match the filters." }
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
                        for row in rows {
                            ResultTableRow {
                                key: "{row.result.id.unwrap_or_default()}",
                                row: row.clone(),
                                on_edit: move |target| on_edit.call(target),
                                on_delete: move |r| handle_delete.call(r),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultTableRow(
    row: ResultRow,
    on_edit: EventHandler<(ResultRecord, Option<u64>)>,
    on_delete: EventHandler<ResultRecord>,
) -> Element {
    let ResultRow { result, athlete_name, owner_id } = row;
    let for_edit = result.clone();
    let for_delete = result.clone();

    rsx! {
        tr {
            td { "{result.discipline.name}" }
            td { "{result.display_value()}" }
            td { "{result.date}" }
            td { "{athlete_name}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit",
                    onclick: move |_| on_edit.call((for_edit.clone(), owner_id)),
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
