use dioxus::prelude::*;
use dioxus_primitives::toast;

const TOAST_CSS: Asset = asset!("/assets/toast.css");

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        toast::ToastProvider { {children} }
    }
}
