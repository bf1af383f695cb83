use std::rc::Rc;

use dioxus::prelude::*;

mod components;
mod config;
mod pages;
mod platform;
mod session;

use components::toast::ToastProvider;
use config::Config;
use desa::{DemoLogin, Redirect, SessionRepository};
use pages::{Auth, Dashboard, Landing};
use platform::BrowserTimer;
use session::CurrentSession;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth")]
    Auth {},
    #[route("/dashboard")]
    Dashboard {},
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Dashboard => Route::Dashboard {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(Config::from_env);
    let login = use_context_provider(|| {
        DemoLogin::new(
            SessionRepository::new(platform::key_value_store()),
            Rc::new(BrowserTimer),
            config.login_delay,
        )
    });

    let current = use_signal(|| {
        login.sessions().load().unwrap_or_else(|e| {
            warn!("Ignoring stored session: {}", e);
            None
        })
    });
    use_context_provider(|| CurrentSession(current));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}
