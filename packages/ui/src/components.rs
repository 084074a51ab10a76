//! Small building blocks shared by the forms and tables.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Secondary => "button button--secondary",
            ButtonVariant::Outline => "button button--outline",
            ButtonVariant::Destructive => "button button--destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: "button",
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Validation messages rendered beneath a form.
#[component]
pub fn FormErrors(errors: Vec<String>) -> Element {
    if errors.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "form-errors",
            for (i, error) in errors.iter().enumerate() {
                p { key: "{i}", class: "error-message", "{error}" }
            }
        }
    }
}

/// Clickable table header showing the current sort direction.
#[component]
pub fn SortHeader(label: String, indicator: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        th {
            class: "sortable",
            onclick: move |evt| onclick.call(evt),
            "{label}"
            if !indicator.is_empty() {
                span { class: "sort-indicator", " {indicator}" }
            }
        }
    }
}
