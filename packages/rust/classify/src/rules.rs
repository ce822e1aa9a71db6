//! Category rules and the advanced-audience heuristic.
//!
//! Rules are ordered: the first rule whose pattern matches decides the
//! niche, so earlier categories outrank later ones on overlapping text.
//! Short stems (`finan`, `invest`) match inflected English and Portuguese
//! forms alike.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Niche
// ---------------------------------------------------------------------------

/// The closed set of top-level niches the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Niche {
    Finance,
    Technology,
    #[serde(rename = "Health & Fitness")]
    HealthFitness,
    Marketing,
    Games,
    General,
}

impl Niche {
    /// Display label, exactly as it pre-fills the niche form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Finance => "Finance",
            Niche::Technology => "Technology",
            Niche::HealthFitness => "Health & Fitness",
            Niche::Marketing => "Marketing",
            Niche::Games => "Games",
            Niche::General => "General",
        }
    }
}

impl std::fmt::Display for Niche {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category rules (ordered, first match wins)
// ---------------------------------------------------------------------------

/// A single category rule: the niche produced when its pattern matches.
#[derive(Debug)]
pub struct CategoryRule {
    /// Niche assigned on a match.
    pub niche: Niche,
    /// Keyword-stem pattern. Case-insensitive, and applied to lower-cased
    /// text and tags on top of that.
    pub pattern: Regex,
}

fn rule(niche: Niche, pattern: &str) -> CategoryRule {
    CategoryRule {
        niche,
        pattern: Regex::new(pattern).expect("category rule regex"),
    }
}

/// The ordered rule table. Finance outranks Technology, which outranks
/// Health & Fitness, then Marketing, then Games. Anything unmatched falls
/// through to [`Niche::General`].
pub static CATEGORY_RULES: LazyLock<[CategoryRule; 5]> = LazyLock::new(|| {
    [
        rule(
            Niche::Finance,
            r"(?i)(finan|invest|ação|bolsa|etf|trader|cripto|bitcoin|cagr|dividend)",
        ),
        rule(
            Niche::Technology,
            r"(?i)(tecno|program|dev|javascript|python|ia|a[ií]|algorit|api|kubernetes|docker|cloud)",
        ),
        rule(
            Niche::HealthFitness,
            r"(?i)(saúde|saude|fitness|treino|dieta|nutri|muscula|hiit)",
        ),
        rule(
            Niche::Marketing,
            r"(?i)(marketing|venda|tráfego|trafego|anúncio|anuncio|copy|roi|funil)",
        ),
        rule(
            Niche::Games,
            r"(?i)(game|jogo|gamer|stream|fortnite|minecraft|valorant)",
        ),
    ]
});

// ---------------------------------------------------------------------------
// Advanced-audience heuristic
// ---------------------------------------------------------------------------

/// Signals that the material targets an intermediate or advanced audience.
/// Case-insensitive, applied to the raw (non-lowered) text.
pub static ADVANCED_AUDIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(avançad|intermediár|framework|api|derivad|cagr|roi|backtest|regress|estatístic|neural|kubernetes|docker|otimiza|quantitativo|hedge|opções|futuros|fine-?tune|prompt engineering|llm)",
    )
    .expect("advanced audience regex")
});

/// Tag count at which material is presumed advanced regardless of wording.
/// Heavy tagging correlates with specialist content.
pub const QUALIFIED_TAG_THRESHOLD: usize = 8;
