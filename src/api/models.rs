use serde::{Deserialize, Serialize};

/// The payload posted to `/analyze_mood`. Field values are taken from the
/// form as-is; the backend treats `name`, `mood`, `time_of_day` and
/// `language` as required.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MoodRequest {
    pub name: String,
    pub mood: String,
    pub feelings: String,
    pub time_of_day: String,
    pub language: String,
    pub genres: String,
    pub artists: String,
}

/// Raw wire shape of the backend reply. Failure replies carry only `error`
/// (and sometimes not even a `success` key), so everything defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub mood_analysis: String,
    #[serde(default)]
    pub embed_urls: Vec<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub total_tracks: usize,
}

/// A successful analysis result, ready for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoodPlaylist {
    pub playlist_name: String,
    pub mood_analysis: String,
    pub embed_urls: Vec<String>,
    pub tracks: Vec<Track>,
    pub total_tracks: usize,
}

/// The slice of the backend's track objects the client renders. Unknown
/// fields on the wire (ids, URIs, preview URLs) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub external_url: String,
    #[serde(default)]
    pub image: Option<String>,
}
