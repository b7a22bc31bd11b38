use crate::api::MoodPlaylist;
use crate::diagnostics;
use dioxus::prelude::*;

/// Query string the Spotify embed player expects.
const EMBED_QUERY: &str = "utm_source=generator&theme=0";

const EMBED_ALLOW: &str =
    "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture";

pub fn embed_src(url: &str) -> String {
    format!("{url}?{EMBED_QUERY}")
}

/// Embed URLs come from the backend and are interpolated into iframe src
/// attributes, so only Spotify embed links are accepted.
pub fn is_trusted_embed_url(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.scheme() == "https" && parsed.host_str() == Some("open.spotify.com"),
        Err(_) => false,
    }
}

#[component]
pub fn PlaylistResults(playlist: MoodPlaylist) -> Element {
    let mut embeds = Vec::new();
    for url in &playlist.embed_urls {
        if is_trusted_embed_url(url) {
            embeds.push(embed_src(url));
        } else {
            diagnostics::log_error("playlist-embed", &format!("skipping embed url: {url}"));
        }
    }

    rsx! {
        section { id: "results", class: "results-section",
            h2 { id: "playlistName", class: "playlist-name", "{playlist.playlist_name}" }
            p { id: "moodAnalysis", class: "mood-analysis", "{playlist.mood_analysis}" }
            if playlist.total_tracks > 0 {
                p { class: "track-count", "{playlist.total_tracks} tracks" }
            }

            div { id: "playlist", class: "playlist",
                for src in embeds {
                    div { class: "spotify-embed",
                        iframe {
                            src: "{src}",
                            width: "100%",
                            height: "152",
                            "loading": "lazy",
                            allow: EMBED_ALLOW,
                            allowfullscreen: true,
                        }
                    }
                }
            }

            if !playlist.tracks.is_empty() {
                ul { class: "track-list",
                    for track in &playlist.tracks {
                        li { class: "track-row",
                            if let Some(image) = track.image.as_deref().filter(|url| url.starts_with("https://")) {
                                img { class: "track-art", src: "{image}", alt: "" }
                            }
                            div { class: "track-meta",
                                if track.external_url.starts_with("https://") {
                                    a {
                                        href: "{track.external_url}",
                                        target: "_blank",
                                        rel: "noopener",
                                        "{track.name}"
                                    }
                                } else {
                                    span { "{track.name}" }
                                }
                                span { class: "track-detail", "{track.artist} · {track.album}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_src_appends_player_parameters() {
        assert_eq!(
            embed_src("https://open.spotify.com/embed/track/1"),
            "https://open.spotify.com/embed/track/1?utm_source=generator&theme=0"
        );
    }

    #[test]
    fn spotify_embed_urls_are_trusted() {
        assert!(is_trusted_embed_url(
            "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"
        ));
    }

    #[test]
    fn other_hosts_and_schemes_are_rejected() {
        assert!(!is_trusted_embed_url("http://open.spotify.com/embed/track/1"));
        assert!(!is_trusted_embed_url("https://example.com/embed/track/1"));
        assert!(!is_trusted_embed_url("javascript:alert(1)"));
        assert!(!is_trusted_embed_url("/embed/track/1"));
        assert!(!is_trusted_embed_url(""));
    }
}
