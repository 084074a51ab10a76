//! This crate contains all shared UI for the club admin app.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod toast;
pub use toast::{use_toast, Toast, ToastApi, ToastLevel, ToastProvider};

mod api_context;
pub use api_context::{refresh_page, scroll_to_top, use_api, ApiProvider};

mod athlete_form;
pub use athlete_form::AthleteForm;

mod discipline_form;
pub use discipline_form::DisciplineForm;

mod result_form;
pub use result_form::ResultForm;

mod product_form;
pub use product_form::ProductForm;

mod athlete_details;
pub use athlete_details::AthleteDetails;

mod athlete_list;
pub use athlete_list::AthleteList;

mod discipline_list;
pub use discipline_list::DisciplineList;

mod result_list;
pub use result_list::ResultList;

mod product_list;
pub use product_list::ProductList;
