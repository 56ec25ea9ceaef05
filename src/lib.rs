use dioxus::prelude::*;

pub mod app_settings;
mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod intake;
mod md2rsx;
pub mod producer;
pub mod session;
pub mod state;
mod ui;
mod utils;

pub use app_settings::AppSettings;

use ui::home::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut settings = use_context_provider(|| Signal::new(None::<AppSettings>));
    let _ = use_resource(move || async move {
        let loaded = config::load_or_default(&config::get_config()).await;
        settings.set(Some(loaded));
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if settings.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
