use dioxus::prelude::*;

use api::ApiClient;
use store::config::API_URL_VAR;
use store::AppConfig;
use ui::{ApiProvider, Navbar, ToastProvider};
use views::{Athletes, Disciplines, Home, Products, Results};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/athletes")]
        Athletes {},
        #[route("/disciplines")]
        Disciplines {},
        #[route("/results")]
        Results {},
        #[route("/products")]
        Products {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled defaults, see `club-admin.toml` next to this crate's manifest.
const CONFIG_TOML: &str = include_str!("../club-admin.toml");

fn main() {
    dioxus::launch(App);
}

/// Bundled config plus the API URL override.
///
/// In the browser there is no process environment, so the override is read
/// when the bundle is compiled. Native builds read `.env` and the environment.
fn load_config() -> AppConfig {
    let config = AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid bundled {}: {}", AppConfig::filename(), e);
        AppConfig::default()
    });

    #[cfg(target_arch = "wasm32")]
    {
        config.with_env_overrides(|key| {
            if key == API_URL_VAR {
                option_env!("CLUB_ADMIN_API_URL").map(str::to_string)
            } else {
                None
            }
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        config.with_env_overrides(|key| std::env::var(key).ok())
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let client = use_hook(|| {
        ApiClient::from_config(&config).map_err(|e| {
            tracing::error!("Cannot set up backend client from {}: {}", API_URL_VAR, e);
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match client {
            Ok(client) => rsx! {
                ToastProvider {
                    duration_secs: config.notifications.toast_duration_secs,
                    ApiProvider {
                        client,
                        Router::<Route> {}
                    }
                }
            },
            Err(message) => rsx! {
                div {
                    class: "startup-error",
                    h1 { "Club Admin" }
                    p { "The backend address is not usable: {message}" }
                    p { "Set {API_URL_VAR} or edit {AppConfig::filename()} and rebuild." }
                }
            },
        }
    }
}

/// Navigation header above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, active_class: "active", "Home" }
            Link { to: Route::Athletes {}, active_class: "active", "Athletes" }
            Link { to: Route::Disciplines {}, active_class: "active", "Disciplines" }
            Link { to: Route::Results {}, active_class: "active", "Results" }
            Link { to: Route::Products {}, active_class: "active", "Products" }
        }
        Outlet::<Route> {}
    }
}
