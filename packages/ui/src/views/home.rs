use dioxus::prelude::*;

/// Landing page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            class: "page home",
            h1 { "Club Admin" }
            p { "Manage the athletes of your club, the disciplines they compete in and the results they achieve." }
            ul {
                class: "home-sections",
                li { strong { "Athletes" } " register members, their club and disciplines." }
                li { strong { "Disciplines" } " define what is measured and how: time, distance or points." }
                li { strong { "Results" } " record performances and rank them per discipline." }
                li { strong { "Products" } " keep the club shop price list." }
            }
        }
    }
}
