use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};

use crate::Route;
use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::input::Input;
use crate::config::Config;
use crate::session::use_current_session;
use desa::{DemoLogin, LoginFeedback, NoticeKind};

#[component]
pub fn Auth() -> Element {
    let mut email: Signal<String> = use_signal(|| "".to_string());
    let mut password: Signal<String> = use_signal(|| "".to_string());
    let mut is_loading = use_signal(|| false);
    let mut current_session = use_current_session();
    let login = use_context::<DemoLogin>();
    let config = use_context::<Config>();
    let toaster = use_toast();
    let nav = navigator();

    let handle_login = move |event: FormEvent| {
        event.prevent_default();
        let email_val = email();
        let password_val = password();
        let login = login.clone();
        let toast_duration = config.toast_duration;

        spawn(async move {
            let result = login
                .submit(&email_val, &password_val, move |busy| is_loading.set(busy))
                .await;

            let feedback = LoginFeedback::from(&result);
            let options = ToastOptions::new()
                .duration(toast_duration)
                .permanent(false);
            match feedback.kind {
                NoticeKind::Success => {
                    toaster.success(feedback.message, options);
                }
                NoticeKind::Error => {
                    toaster.error(feedback.message, options);
                }
            }

            if let Ok(session) = result {
                current_session.set(Some(session));
            }
            if let Some(redirect) = feedback.redirect {
                nav.push(Route::from(redirect));
            }
        });
    };

    rsx! {
        div { id: "auth",
            Card {
                CardHeader {
                    CardTitle { "Login Dashboard" }
                    CardDescription { "Masuk ke sistem monitoring data desa" }
                }
                CardContent {
                    form { class: "login-form", onsubmit: handle_login,
                        div { class: "form-group",
                            label { r#for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "admin@desa.go.id",
                                value: "{email}",
                                required: true,
                                oninput: move |e: FormEvent| email.set(e.value()),
                            }
                        }

                        div { class: "form-group",
                            label { r#for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                placeholder: "Masukkan password",
                                value: "{password}",
                                required: true,
                                oninput: move |e: FormEvent| password.set(e.value()),
                            }
                        }

                        Button {
                            r#type: "submit",
                            class: "full-width",
                            disabled: is_loading(),
                            if is_loading() {
                                "Memproses..."
                            } else {
                                "Masuk"
                            }
                        }
                    }

                    div { class: "demo-hint",
                        p { "Demo credentials:" }
                        p { "Email: admin@desa.go.id" }
                        p { "Password: password123" }
                    }
                }
            }
        }
    }
}
