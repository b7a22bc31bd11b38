use crate::api::models::{MoodPlaylist, MoodRequest, MoodResponse};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const ANALYZE_MOOD_PATH: &str = "/analyze_mood";

/// Shown when the backend rejects a request without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown for transport failures and unparseable replies.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    /// The backend answered but marked the request as failed.
    Rejected(Option<String>),
    /// The call never produced a usable reply: connection failure, aborted
    /// request, or a body that was not the expected JSON.
    Network(String),
}

impl AnalyzeError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(Some(message)) => message.clone(),
            Self::Rejected(None) => REJECTED_FALLBACK_MESSAGE.to_string(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Underlying cause for the diagnostics log. Rejections carry none: their
    /// message is already user-facing.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Network(cause) => Some(cause),
            Self::Rejected(_) => None,
        }
    }
}

impl MoodResponse {
    pub fn into_playlist(self) -> Result<MoodPlaylist, AnalyzeError> {
        if !self.success {
            return Err(AnalyzeError::Rejected(self.error));
        }
        Ok(MoodPlaylist {
            playlist_name: self.playlist_name,
            mood_analysis: self.mood_analysis,
            embed_urls: self.embed_urls,
            tracks: self.tracks,
            total_tracks: self.total_tracks,
        })
    }
}

pub struct MoodClient {
    base_url: String,
}

impl MoodClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the backend that served this page.
    #[cfg(target_arch = "wasm32")]
    pub fn same_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|win| win.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    /// Native builds have no page origin and talk to a configured backend.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn same_origin() -> Self {
        let base = std::env::var("MOODTUNE_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(base)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_MOOD_PATH)
    }

    /// Posts the form payload and interprets the reply. The HTTP status is
    /// not checked: the backend signals failure in the body, including on
    /// 500s, and that message is what the user should see.
    pub async fn analyze_mood(&self, request: &MoodRequest) -> Result<MoodPlaylist, AnalyzeError> {
        let response = HTTP_CLIENT
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        let body: MoodResponse = response
            .json()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        body.into_playlist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(error: Option<&str>) -> MoodResponse {
        serde_json::from_value(match error {
            Some(message) => serde_json::json!({ "success": false, "error": message }),
            None => serde_json::json!({ "success": false }),
        })
        .unwrap()
    }

    #[test]
    fn success_reply_becomes_playlist() {
        let response: MoodResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "playlist_name": "Chill Vibes",
            "mood_analysis": "You seem relaxed",
            "embed_urls": ["https://open.spotify.com/embed/track/1"]
        }))
        .unwrap();

        let playlist = response.into_playlist().unwrap();
        assert_eq!(playlist.playlist_name, "Chill Vibes");
        assert_eq!(playlist.mood_analysis, "You seem relaxed");
        assert_eq!(
            playlist.embed_urls,
            vec!["https://open.spotify.com/embed/track/1".to_string()]
        );
    }

    #[test]
    fn rejection_surfaces_the_server_message() {
        let err = failure(Some("Invalid mood")).into_playlist().unwrap_err();
        assert_eq!(err, AnalyzeError::Rejected(Some("Invalid mood".to_string())));
        assert_eq!(err.user_message(), "Invalid mood");
    }

    #[test]
    fn rejection_without_message_uses_the_fallback() {
        let err = failure(None).into_playlist().unwrap_err();
        assert_eq!(err, AnalyzeError::Rejected(None));
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn network_failure_hides_the_cause_from_the_user() {
        let err = AnalyzeError::Network("dns error: no such host".to_string());
        assert_eq!(
            err.user_message(),
            "Network error. Please check your connection and try again."
        );
        assert_eq!(err.diagnostic(), Some("dns error: no such host"));
    }

    #[test]
    fn rejections_carry_no_diagnostic() {
        assert_eq!(AnalyzeError::Rejected(None).diagnostic(), None);
    }

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let client = MoodClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/analyze_mood");
    }
}
