use dioxus::prelude::*;

mod api;
mod components;
mod diagnostics;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        document::Meta { name: "theme-color", content: "#8458b3" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
