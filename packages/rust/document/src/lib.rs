//! Script-to-document structuring for ScriptForge.
//!
//! Turns a flat generated script plus a small metadata record into an
//! ordered sequence of typed [`DocumentBlock`]s and a deterministic file
//! stem. Rendering the blocks to bytes on disk is the export crate's job;
//! this crate is pure and total over all inputs.

pub mod blocks;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub use blocks::{DocumentBlock, HeadingLevel};

/// Title used when the metadata title is empty.
pub const DEFAULT_TITLE: &str = "YouTube Script";

/// Value shown for empty duration/style fields.
const MISSING_VALUE: &str = "N/A";

/// The rule between metadata and body: forty heavy horizontal bars.
pub const SEPARATOR_RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Whitespace runs collapsed to single hyphens in file stems.
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Metadata rendered ahead of the script body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document title. When empty the title block falls back to
    /// [`DEFAULT_TITLE`], but the file stem uses the raw value.
    #[serde(default)]
    pub title: String,

    /// Target duration, free text.
    #[serde(default)]
    pub duration: String,

    /// Narration style, free text.
    #[serde(default)]
    pub style: String,

    /// Display name of the provider that generated the script.
    #[serde(default)]
    pub generator_label: String,

    /// Catalog id of the provider, appended to the file stem.
    #[serde(default)]
    pub generator_id: String,
}

/// A structured document ready for rendering, plus its derived file stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptDocument {
    /// Ordered blocks: title, three labeled rows, separator, then one block
    /// per script line.
    pub blocks: Vec<DocumentBlock>,

    /// Extensionless file stem; the export format supplies the extension.
    pub file_stem: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the full block sequence for a script.
///
/// The metadata header is always emitted: a title block (falling back to
/// [`DEFAULT_TITLE`]), "Duration" and "Style" rows (falling back to "N/A"),
/// a "Generated by" row, and a separator. An empty script contributes zero
/// line blocks; otherwise every line, including empty ones, maps to exactly
/// one block in input order.
pub fn build_document(raw_script: &str, meta: &DocumentMeta) -> ScriptDocument {
    let mut blocks = Vec::new();

    let title = if meta.title.is_empty() {
        DEFAULT_TITLE
    } else {
        &meta.title
    };
    blocks.push(DocumentBlock::Title {
        text: title.to_string(),
    });
    blocks.push(labeled("Duration", &meta.duration));
    blocks.push(labeled("Style", &meta.style));
    blocks.push(DocumentBlock::Labeled {
        label: "Generated by".into(),
        value: meta.generator_label.clone(),
    });
    blocks.push(DocumentBlock::Separator);

    if !raw_script.is_empty() {
        blocks.extend(raw_script.split('\n').map(blocks::block_for_line));
    }

    tracing::debug!(block_count = blocks.len(), "built script document");

    ScriptDocument {
        blocks,
        file_stem: file_stem(&meta.title, &meta.generator_id),
    }
}

/// Labeled row with the "N/A" fallback for empty values.
fn labeled(label: &str, value: &str) -> DocumentBlock {
    DocumentBlock::Labeled {
        label: label.to_string(),
        value: if value.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            value.to_string()
        },
    }
}

/// Derive the extensionless file stem: whitespace runs in the title become
/// single hyphens and the generator id is appended. Never contains raw
/// whitespace.
pub fn file_stem(title: &str, generator_id: &str) -> String {
    let slug = WHITESPACE_RUN_RE.replace_all(title, "-");
    format!("script-{slug}-{generator_id}")
}
