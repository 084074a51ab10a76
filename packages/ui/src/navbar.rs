use dioxus::prelude::*;

const CLUB_CSS: Asset = asset!("/assets/club.css");

/// Top navigation bar. Platform packages pass their router links as children.
#[component]
pub fn Navbar(#[props(default = "Club Admin".to_string())] title: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: CLUB_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{title}" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
