use dioxus::prelude::*;

use crate::Route;
use crate::session::use_current_session;

/// Minimal dashboard; the real monitoring views live elsewhere.
#[component]
pub fn Dashboard() -> Element {
    let session = use_current_session();

    rsx! {
        div { class: "dashboard",
            h1 { "Dashboard Monitoring Data Desa" }
            match session.read().as_ref() {
                Some(current) => rsx! {
                    p { "Masuk sebagai {current.name} ({current.email})" }
                },
                None => rsx! {
                    p { class: "muted", "Anda belum masuk." }
                    Link { to: Route::Auth {}, "Login" }
                },
            }
        }
    }
}
