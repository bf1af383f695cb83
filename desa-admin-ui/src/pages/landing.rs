use dioxus::prelude::*;

use crate::Route;

/// Root route: sends every visitor straight to the dashboard.
#[component]
pub fn Landing() -> Element {
    let nav = navigator();

    use_effect(move || {
        let target = Route::from(desa::LANDING_REDIRECT);
        info!("Redirecting to {}", target);
        nav.push(target);
    });

    rsx! {
        div { class: "landing",
            div { class: "landing-content",
                h1 { "Dashboard Monitoring Data Desa" }
                p { class: "muted", "Mengalihkan ke dashboard..." }
            }
        }
    }
}
