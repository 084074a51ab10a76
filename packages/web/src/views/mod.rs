//! Route targets. Each one renders the shared page from the `ui` crate.

use dioxus::prelude::*;
use ui::views::{AthletesView, DisciplinesView, HomeView, ProductsView, ResultsView};

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Athletes() -> Element {
    rsx! { AthletesView {} }
}

#[component]
pub fn Disciplines() -> Element {
    rsx! { DisciplinesView {} }
}

#[component]
pub fn Results() -> Element {
    rsx! { ResultsView {} }
}

#[component]
pub fn Products() -> Element {
    rsx! { ProductsView {} }
}
