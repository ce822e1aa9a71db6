//! Core domain types shared across ScriptForge crates.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ScriptRequest
// ---------------------------------------------------------------------------

/// The full set of form inputs describing a requested script.
///
/// This is the input to the prompt builder and the record the classifier
/// pre-fills (`niche` through `nanoniche`, `qualified`). All fields are
/// free text except the two derived ones at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRequest {
    /// Video topic.
    #[serde(default)]
    pub topic: String,

    /// Target duration, free text (e.g., "10 minutos").
    #[serde(default)]
    pub duration: String,

    /// Narration style, free text.
    #[serde(default)]
    pub style: String,

    /// Comma-separated style keywords.
    #[serde(default)]
    pub style_keywords: String,

    /// Output language for the generated script.
    #[serde(default)]
    pub language: String,

    /// Top-level niche label.
    #[serde(default)]
    pub niche: String,

    /// First refinement level below the niche.
    #[serde(default)]
    pub subniche: String,

    /// Second refinement level.
    #[serde(default)]
    pub microniche: String,

    /// Third refinement level.
    #[serde(default)]
    pub nanoniche: String,

    /// Target audience description.
    #[serde(default)]
    pub audience: String,

    /// Free-form extra instructions appended to the prompt.
    #[serde(default)]
    pub additional_info: String,

    /// Whether the material targets an advanced audience.
    #[serde(default)]
    pub qualified: bool,

    /// Number of main points/sections the script should cover.
    #[serde(default = "default_characteristics")]
    pub characteristics: u32,
}

impl Default for ScriptRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            duration: String::new(),
            style: String::new(),
            style_keywords: String::new(),
            language: String::new(),
            niche: String::new(),
            subniche: String::new(),
            microniche: String::new(),
            nanoniche: String::new(),
            audience: String::new(),
            additional_info: String::new(),
            qualified: false,
            characteristics: default_characteristics(),
        }
    }
}

fn default_characteristics() -> u32 {
    5
}

// ---------------------------------------------------------------------------
// VideoSnippet
// ---------------------------------------------------------------------------

/// Snippet metadata for a single YouTube video, as returned by the Data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// Video title.
    pub title: String,

    /// Full video description.
    #[serde(default)]
    pub description: String,

    /// Uploader-supplied tags. The API omits the field entirely when the
    /// uploader set none.
    #[serde(default)]
    pub tags: Vec<String>,
}
