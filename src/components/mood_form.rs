use crate::api::{MoodClient, MoodPlaylist, MoodRequest};
use crate::components::PlaylistResults;
use crate::diagnostics;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const ERROR_DISMISS_MS: u32 = 5_000;

const MOOD_OPTIONS: [(&str, &str); 8] = [
    ("happy", "Happy"),
    ("sad", "Sad"),
    ("energetic", "Energetic"),
    ("relaxed", "Relaxed"),
    ("romantic", "Romantic"),
    ("focused", "Focused"),
    ("nostalgic", "Nostalgic"),
    ("stressed", "Stressed"),
];

const TIME_OPTIONS: [(&str, &str); 4] = [
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
    ("night", "Night"),
];

const LANGUAGE_OPTIONS: [&str; 8] = [
    "English",
    "Spanish",
    "Hindi",
    "French",
    "German",
    "Korean",
    "Portuguese",
    "Any",
];

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A scheduled dismissal only fires while its banner is still the current
/// one; a newer error bumps the epoch and strands the older timer.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn should_dismiss(shown_epoch: u64, current_epoch: u64) -> bool {
    shown_epoch == current_epoch
}

/// Checks the four fields the backend treats as required. Submission does
/// not gate on this: the request goes out as-is and a server rejection
/// surfaces through the error banner.
#[allow(dead_code)]
pub fn validate_required(request: &MoodRequest) -> bool {
    !is_blank(&request.name)
        && !is_blank(&request.mood)
        && !is_blank(&request.time_of_day)
        && !is_blank(&request.language)
}

#[cfg(target_arch = "wasm32")]
async fn scroll_results_into_view() {
    // Let the results section render before scrolling to it.
    gloo_timers::future::TimeoutFuture::new(0).await;

    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id("results") {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn scroll_results_into_view() {}

#[component]
pub fn MoodFormView() -> Element {
    let mut name = use_signal(String::new);
    let mut mood = use_signal(String::new);
    let mut feelings = use_signal(String::new);
    let mut time_of_day = use_signal(String::new);
    let mut language = use_signal(String::new);
    let mut genres = use_signal(String::new);
    let mut artists = use_signal(String::new);

    let mut name_invalid = use_signal(|| false);
    let mut mood_invalid = use_signal(|| false);
    let mut time_invalid = use_signal(|| false);
    let mut language_invalid = use_signal(|| false);

    let mut is_loading = use_signal(|| false);
    let mut playlist = use_signal(|| None::<MoodPlaylist>);
    let mut error_message = use_signal(|| None::<String>);
    let mut error_epoch = use_signal(|| 0u64);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        is_loading.set(true);

        let request = MoodRequest {
            name: name(),
            mood: mood(),
            feelings: feelings(),
            time_of_day: time_of_day(),
            language: language(),
            genres: genres(),
            artists: artists(),
        };

        spawn(async move {
            match MoodClient::same_origin().analyze_mood(&request).await {
                Ok(result) => {
                    playlist.set(Some(result));
                    scroll_results_into_view().await;
                }
                Err(err) => {
                    if let Some(cause) = err.diagnostic() {
                        diagnostics::log_error("analyze-mood", cause);
                    }

                    // A new banner replaces the old one and cancels its
                    // pending dismissal.
                    error_message.set(Some(err.user_message()));
                    error_epoch.with_mut(|value| *value = value.saturating_add(1));
                    #[cfg(target_arch = "wasm32")]
                    {
                        use gloo_timers::future::TimeoutFuture;
                        let shown_epoch = *error_epoch.peek();
                        spawn(async move {
                            TimeoutFuture::new(ERROR_DISMISS_MS).await;
                            if should_dismiss(shown_epoch, *error_epoch.peek()) {
                                error_message.set(None);
                            }
                        });
                    }
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        form { id: "moodForm", class: "mood-form", onsubmit: on_submit,
            div { class: "form-grid",
                div { class: "form-field",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        placeholder: "What should we call you?",
                        class: if name_invalid() { "field-invalid" } else { "" },
                        value: "{name}",
                        oninput: move |e| {
                            name.set(e.value());
                            name_invalid.set(false);
                        },
                        onblur: move |_| name_invalid.set(is_blank(&name())),
                    }
                }

                div { class: "form-field",
                    label { r#for: "mood", "Current mood" }
                    select {
                        id: "mood",
                        name: "mood",
                        class: if mood_invalid() { "field-invalid" } else { "" },
                        value: "{mood}",
                        onchange: move |e| {
                            mood.set(e.value());
                            mood_invalid.set(false);
                        },
                        onblur: move |_| mood_invalid.set(is_blank(&mood())),
                        option { value: "", "Select your mood" }
                        for (value, label) in MOOD_OPTIONS {
                            option { value: value, "{label}" }
                        }
                    }
                }

                div { class: "form-field form-field-wide",
                    label { r#for: "feelings", "What's on your mind?" }
                    textarea {
                        id: "feelings",
                        name: "feelings",
                        rows: "3",
                        placeholder: "Optional: describe how you're feeling",
                        value: "{feelings}",
                        oninput: move |e| feelings.set(e.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "time_of_day", "Time of day" }
                    select {
                        id: "time_of_day",
                        name: "time_of_day",
                        class: if time_invalid() { "field-invalid" } else { "" },
                        value: "{time_of_day}",
                        onchange: move |e| {
                            time_of_day.set(e.value());
                            time_invalid.set(false);
                        },
                        onblur: move |_| time_invalid.set(is_blank(&time_of_day())),
                        option { value: "", "Select a time" }
                        for (value, label) in TIME_OPTIONS {
                            option { value: value, "{label}" }
                        }
                    }
                }

                div { class: "form-field",
                    label { r#for: "language", "Preferred language" }
                    select {
                        id: "language",
                        name: "language",
                        class: if language_invalid() { "field-invalid" } else { "" },
                        value: "{language}",
                        onchange: move |e| {
                            language.set(e.value());
                            language_invalid.set(false);
                        },
                        onblur: move |_| language_invalid.set(is_blank(&language())),
                        option { value: "", "Select a language" }
                        for value in LANGUAGE_OPTIONS {
                            option { value: value, "{value}" }
                        }
                    }
                }

                div { class: "form-field",
                    label { r#for: "genres", "Favorite genres" }
                    input {
                        id: "genres",
                        name: "genres",
                        r#type: "text",
                        placeholder: "Optional: lo-fi, indie rock, jazz...",
                        value: "{genres}",
                        oninput: move |e| genres.set(e.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "artists", "Favorite artists" }
                    input {
                        id: "artists",
                        name: "artists",
                        r#type: "text",
                        placeholder: "Optional: artists you love",
                        value: "{artists}",
                        oninput: move |e| artists.set(e.value()),
                    }
                }
            }

            button {
                r#type: "submit",
                class: "submit-btn",
                disabled: is_loading(),
                if is_loading() {
                    span { class: "loading-spinner" }
                } else {
                    span { class: "btn-text", "Build my playlist" }
                }
            }
        }

        // Error banner, directly after the form. At most one exists.
        if let Some(message) = error_message() {
            div { class: "error-message", "{message}" }
        }

        if let Some(current) = playlist() {
            PlaylistResults { playlist: current }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> MoodRequest {
        MoodRequest {
            name: "Ada".to_string(),
            mood: "happy".to_string(),
            time_of_day: "morning".to_string(),
            language: "English".to_string(),
            ..MoodRequest::default()
        }
    }

    #[test]
    fn complete_required_fields_validate() {
        assert!(validate_required(&complete_request()));
    }

    #[test]
    fn each_missing_required_field_fails_validation() {
        for field in ["name", "mood", "time_of_day", "language"] {
            let mut request = complete_request();
            match field {
                "name" => request.name.clear(),
                "mood" => request.mood.clear(),
                "time_of_day" => request.time_of_day.clear(),
                _ => request.language.clear(),
            }
            assert!(!validate_required(&request), "{field} should be required");
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut request = complete_request();
        request.name = "   ".to_string();
        assert!(!validate_required(&request));
    }

    #[test]
    fn newer_error_cancels_the_older_dismissal() {
        let mut epoch = 0u64;

        // First banner is shown.
        epoch = epoch.saturating_add(1);
        let first_shown = epoch;

        // A second error replaces it before the first timer fires.
        epoch = epoch.saturating_add(1);
        let second_shown = epoch;

        assert!(!should_dismiss(first_shown, epoch));
        assert!(should_dismiss(second_shown, epoch));
    }

    #[test]
    fn undisturbed_banner_is_dismissed() {
        let shown = 1u64;
        assert!(should_dismiss(shown, shown));
    }

    #[test]
    fn optional_fields_do_not_affect_validation() {
        let mut request = complete_request();
        request.feelings.clear();
        request.genres.clear();
        request.artists.clear();
        assert!(validate_required(&request));
    }
}
