use dioxus::prelude::*;
use store::listing::{athlete_rows, AthleteFilter, AthleteSortField};
use store::models::GENDERS;
use store::{AgeGroup, Athlete, SortState};

use crate::athlete_details::AthleteDetails;
use crate::components::{Button, ButtonVariant, SortHeader};
use crate::icons::{FaCircleInfo, FaPen, FaTrash};
use crate::{use_api, use_toast, Icon};

const COLUMNS: [(AthleteSortField, &str); 5] = [
    (AthleteSortField::Name, "Name"),
    (AthleteSortField::Age, "Age"),
    (AthleteSortField::Gender, "Gender"),
    (AthleteSortField::Club, "Club"),
    (AthleteSortField::Disciplines, "Disciplines"),
];

/// Filterable, sortable athlete table.
///
/// Deletes go straight to the backend; the page is told which id went away.
#[component]
pub fn AthleteList(
    athletes: Vec<Athlete>,
    on_edit: EventHandler<Athlete>,
    on_deleted: EventHandler<u64>,
) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut filter = use_signal(AthleteFilter::default);
    let mut sort = use_signal(SortState::<AthleteSortField>::default);
    let mut details = use_signal(|| None::<Athlete>);

    let handle_delete = use_callback(move |athlete: Athlete| {
        let api = api.clone();
        spawn(async move {
            match api.athletes().remove(&athlete, |id| on_deleted.call(id)).await {
                Ok(true) => toast.success("Athlete deleted successfully"),
                Ok(false) => tracing::warn!("Athlete {} has no id, nothing to delete", athlete.name),
                Err(e) => {
                    tracing::error!("Error deleting athlete {:?}: {}", athlete.id, e);
                    toast.error("Could not delete athlete, something went wrong.");
                }
            }
        });
    });

    let rows: Vec<Athlete> = athlete_rows(&athletes, &filter.read(), &sort.read())
        .into_iter()
        .cloned()
        .collect();
    let f = filter();
    let gender_value = f.gender.clone().unwrap_or_default();
    let age_value = f.age_group.map(|g| g.key()).unwrap_or_default();

    rsx! {
        div {
            class: "list-card",
            h2 { "Athletes" }

            div {
                class: "filters",
                input {
                    r#type: "text",
                    placeholder: "Filter by name",
                    value: "{f.name}",
                    oninput: move |evt: FormEvent| filter.write().name = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Filter by club",
                    value: "{f.club}",
                    oninput: move |evt: FormEvent| filter.write().club = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Filter by discipline",
                    value: "{f.discipline}",
                    oninput: move |evt: FormEvent| filter.write().discipline = evt.value(),
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

            if athletes.is_empty() {
                p { class: "muted", "No athletes yet." }
            } else if rows.is_empty() {
                p { class: "muted", "No athletes match the filters." }
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
                        for athlete in rows {
                            AthleteRow {
                                key: "{athlete.id.unwrap_or_default()}",
                                athlete: athlete.clone(),
                                on_details: move |a| details.set(Some(a)),
                                on_edit: move |a| on_edit.call(a),
                                on_delete: move |a| handle_delete.call(a),
                            }
                        }
                    }
                }
            }

            if let Some(athlete) = details() {
                AthleteDetails {
                    athlete,
                    on_close: move |_| details.set(None),
                }
            }
        }
    }
}

#[component]
fn AthleteRow(
    athlete: Athlete,
    on_details: EventHandler<Athlete>,
    on_edit: EventHandler<Athlete>,
    on_delete: EventHandler<Athlete>,
) -> Element {
    let for_details = athlete.clone();
    let for_edit = athlete.clone();
    let for_delete = athlete.clone();

    rsx! {
        tr {
            td { "{athlete.name}" }
            td { "{athlete.age}" }
            td { "{athlete.gender}" }
            td { "{athlete.club}" }
            td { "{athlete.discipline_names()}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    title: "Details",
                    onclick: move |_| on_details.call(for_details.clone()),
                    Icon { icon: FaCircleInfo, width: 12, height: 12 }
                    " Details"
                }
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
