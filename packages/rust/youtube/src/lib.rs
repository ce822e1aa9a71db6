//! YouTube Data API v3 integration for ScriptForge.
//!
//! Resolves a pasted video link to an id and fetches the video's snippet
//! (title, description, tags) so the classifier can suggest niche fields.
//! Only the `videos` endpoint is used, with a caller-supplied API key.

mod link;

use reqwest::Client;
use scriptforge_shared::{Result, ScriptForgeError, VideoSnippet};
use serde::Deserialize;
use tracing::{debug, instrument};

pub use link::parse_video_id;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 3;

/// Default timeout in seconds for Data API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Public Data API base URL.
const DATA_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// User-Agent string for Data API requests.
const USER_AGENT: &str = concat!("ScriptForge/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the YouTube client.
#[derive(Debug, Clone)]
pub struct YoutubeOptions {
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
}

impl Default for YoutubeOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ---------------------------------------------------------------------------
// Response models (Data API shapes, unknown fields ignored)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    snippet: SnippetDto,
}

#[derive(Debug, Default, Deserialize)]
struct SnippetDto {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the YouTube Data API v3 `videos` endpoint.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    /// Create a client against the public Data API.
    pub fn new(api_key: impl Into<String>, opts: &YoutubeOptions) -> Result<Self> {
        Self::with_base_url(api_key, DATA_API_BASE, opts)
    }

    /// Create a client against a custom base URL. Tests point this at a
    /// local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        opts: &YoutubeOptions,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(std::time::Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| ScriptForgeError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the snippet for a video id.
    ///
    /// Missing description or tags degrade to empty values; a response with
    /// no items is a validation error.
    #[instrument(skip_all, fields(video_id = %video_id))]
    pub async fn fetch_snippet(&self, video_id: &str) -> Result<VideoSnippet> {
        let url = format!(
            "{}/videos?part=snippet,contentDetails,statistics&id={video_id}&key={}",
            self.base_url, self.api_key
        );

        debug!("requesting video snippet");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ScriptForgeError::Network(format!("videos request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScriptForgeError::Network(format!(
                "videos request: HTTP {status}"
            )));
        }

        let body: VideosResponse = response
            .json()
            .await
            .map_err(|e| ScriptForgeError::parse(format!("videos response: {e}")))?;

        let item = body.items.into_iter().next().ok_or_else(|| {
            ScriptForgeError::validation(format!("no video found for id {video_id}"))
        })?;

        debug!(
            title = %item.snippet.title,
            tag_count = item.snippet.tags.len(),
            "video snippet fetched"
        );

        Ok(VideoSnippet {
            title: item.snippet.title,
            description: item.snippet.description,
            tags: item.snippet.tags,
        })
    }
}
