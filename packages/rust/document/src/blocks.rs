//! Typed document blocks and per-line classification.
//!
//! Each raw script line maps to exactly one block. Checks run in order:
//! blank, heading, emphasis, body. Heading detection looks at the raw line;
//! the emphasis heuristic looks at the trimmed line but the emitted block
//! keeps the raw text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Heading depth for section blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1-3), the number of `#` markers it renders with.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One rendering-ready unit of an exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentBlock {
    /// Centered document title (heading level 1).
    Title { text: String },

    /// Bold label followed by a plain value ("Duration: 12 min").
    Labeled { label: String, value: String },

    /// Horizontal rule between the metadata rows and the script body.
    Separator,

    /// Section heading derived from leading `#` markers.
    Heading { level: HeadingLevel, text: String },

    /// ALL-CAPS line rendered bold at larger size.
    Emphasis { text: String },

    /// Empty line preserving vertical spacing.
    Blank,

    /// Plain paragraph text.
    Body { text: String },
}

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Leading `#` run plus following whitespace, stripped from heading text.
static HEADING_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("heading prefix regex"));

/// Unaccented uppercase and whitespace only. Accented caps (common in
/// Portuguese) do not qualify and fall through to body.
static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").expect("emphasis regex"));

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// Map one raw script line to its block.
pub(crate) fn block_for_line(line: &str) -> DocumentBlock {
    if line.trim().is_empty() {
        return DocumentBlock::Blank;
    }

    if line.starts_with('#') {
        // Three-or-more first: the prefixes nest.
        let level = if line.starts_with("###") {
            HeadingLevel::H3
        } else if line.starts_with("##") {
            HeadingLevel::H2
        } else {
            HeadingLevel::H1
        };
        return DocumentBlock::Heading {
            level,
            text: HEADING_PREFIX_RE.replace(line, "").into_owned(),
        };
    }

    if is_emphasis(line.trim()) {
        return DocumentBlock::Emphasis {
            text: line.to_string(),
        };
    }

    DocumentBlock::Body {
        text: line.to_string(),
    }
}

/// The ALL-CAPS heuristic: longer than three characters, uppercase-equal,
/// and entirely within `[A-Z\s]`.
fn is_emphasis(trimmed: &str) -> bool {
    trimmed.len() > 3 && trimmed == trimmed.to_uppercase() && EMPHASIS_RE.is_match(trimmed)
}
