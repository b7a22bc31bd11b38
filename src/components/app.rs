use crate::components::MoodFormView;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    rsx! {
        main { class: "app-shell",
            header { class: "page-header",
                h1 { class: "page-title", "Moodtune" }
                p { class: "page-subtitle",
                    "Tell us how you feel and get a playlist to match."
                }
            }

            MoodFormView {}
        }
    }
}
