use dioxus::prelude::*;
use store::Athlete;

use crate::views::ModalOverlay;

/// Read-only summary of one athlete, results included.
#[component]
pub fn AthleteDetails(athlete: Athlete, on_close: EventHandler<()>) -> Element {
    let disciplines = athlete.discipline_names();

    rsx! {
        ModalOverlay {
            title: "{athlete.name}",
            on_close: move |_| on_close.call(()),
            dl {
                class: "details",
                dt { "Age" }
                dd { "{athlete.age}" }
                dt { "Gender" }
                dd { "{athlete.gender}" }
                dt { "Club" }
                dd { "{athlete.club}" }
                dt { "Disciplines" }
                dd {
                    if disciplines.is_empty() { "-" } else { "{disciplines}" }
                }
            }
            h3 { "Results" }
            if athlete.results.is_empty() {
                p { class: "muted", "No results recorded." }
            } else {
                ul {
                    class: "details-results",
                    for (i, result) in athlete.results.iter().enumerate() {
                        li {
                            key: "{i}",
                            "{result.display_value()} ({result.discipline.name})"
                        }
                    }
                }
            }
        }
    }
}
