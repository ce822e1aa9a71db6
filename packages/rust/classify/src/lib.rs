//! Niche classification for ScriptForge.
//!
//! Maps free text (typically a video title + description) and uploader tags
//! onto a fixed niche taxonomy, plus an advanced-audience flag. The
//! classifier is a pure function: no I/O, no state, total over all inputs.

pub mod rules;

use scriptforge_shared::{ScriptRequest, VideoSnippet};
use serde::{Deserialize, Serialize};

pub use rules::{
    ADVANCED_AUDIENCE_RE, CATEGORY_RULES, CategoryRule, Niche, QUALIFIED_TAG_THRESHOLD,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input to the classifier: free text plus uploader tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationInput {
    /// Free text to scan for category stems (title, description, or both).
    pub text: String,

    /// Uploader tags. The first three become the positional niches.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The classifier's verdict, shaped to pre-fill the request form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Top-level niche from the ordered rule table.
    pub niche: Niche,
    /// First tag, verbatim, or empty.
    pub subniche: String,
    /// Second tag, verbatim, or empty.
    pub microniche: String,
    /// Third tag, verbatim, or empty.
    pub nanoniche: String,
    /// Whether the material reads as advanced/intermediate.
    pub qualified: bool,
}

impl Classification {
    /// Copy the verdict into a request's niche and audience fields.
    pub fn apply_to(&self, request: &mut ScriptRequest) {
        request.niche = self.niche.as_str().to_string();
        request.subniche = self.subniche.clone();
        request.microniche = self.microniche.clone();
        request.nanoniche = self.nanoniche.clone();
        request.qualified = self.qualified;
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify free text and tags into a [`Classification`].
///
/// The niche comes from the first rule in [`CATEGORY_RULES`] whose pattern
/// matches the lower-cased text or any lower-cased tag. The positional
/// niches are the first three tags verbatim. The qualified flag is set when
/// the raw text matches [`ADVANCED_AUDIENCE_RE`] or the tag count reaches
/// [`QUALIFIED_TAG_THRESHOLD`].
pub fn classify(input: &ClassificationInput) -> Classification {
    let lowered = input.text.to_lowercase();

    let mut niche = Niche::General;
    for rule in CATEGORY_RULES.iter() {
        let tag_hit = input
            .tags
            .iter()
            .any(|tag| rule.pattern.is_match(&tag.to_lowercase()));
        if rule.pattern.is_match(&lowered) || tag_hit {
            niche = rule.niche;
            break;
        }
    }

    let qualified = ADVANCED_AUDIENCE_RE.is_match(&input.text)
        || input.tags.len() >= QUALIFIED_TAG_THRESHOLD;

    tracing::debug!(%niche, qualified, tag_count = input.tags.len(), "classified input");

    Classification {
        niche,
        subniche: input.tags.first().cloned().unwrap_or_default(),
        microniche: input.tags.get(1).cloned().unwrap_or_default(),
        nanoniche: input.tags.get(2).cloned().unwrap_or_default(),
        qualified,
    }
}

/// Classify a fetched video: title and description joined by a newline form
/// the text, the uploader tags feed the positional niches.
pub fn classify_snippet(snippet: &VideoSnippet) -> Classification {
    let input = ClassificationInput {
        text: format!("{}\n{}", snippet.title, snippet.description),
        tags: snippet.tags.clone(),
    };
    classify(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, tags: &[&str]) -> ClassificationInput {
        ClassificationInput {
            text: text.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn empty_input_yields_general_defaults() {
        let result = classify(&input("", &[]));
        assert_eq!(result.niche, Niche::General);
        assert_eq!(result.subniche, "");
        assert_eq!(result.microniche, "");
        assert_eq!(result.nanoniche, "");
        assert!(!result.qualified);
    }

    #[test]
    fn unmatched_text_falls_back_to_general() {
        let result = classify(&input("Vlog do fim de semana", &[]));
        assert_eq!(result.niche, Niche::General);
    }

    #[test]
    fn finance_outranks_games() {
        // Both stems present; the earlier rule must win.
        let result = classify(&input("investindo em jogos retrô", &[]));
        assert_eq!(result.niche, Niche::Finance);
    }

    #[test]
    fn technology_outranks_marketing() {
        let result = classify(&input("marketing automation com python", &[]));
        assert_eq!(result.niche, Niche::Technology);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let result = classify(&input("BITCOIN explicado", &[]));
        assert_eq!(result.niche, Niche::Finance);
    }

    #[test]
    fn accented_stems_match() {
        let result = classify(&input("Saúde em primeiro lugar", &[]));
        assert_eq!(result.niche, Niche::HealthFitness);

        let result = classify(&input("Tráfego pago do zero", &[]));
        assert_eq!(result.niche, Niche::Marketing);
    }

    #[test]
    fn tag_match_selects_niche_when_text_is_neutral() {
        let result = classify(&input("Melhores momentos do fim de semana", &["FITNESS"]));
        assert_eq!(result.niche, Niche::HealthFitness);
    }

    #[test]
    fn first_three_tags_become_positional_niches() {
        let result = classify(&input("", &["crypto", "defi", "web3", "nft"]));
        assert_eq!(result.subniche, "crypto");
        assert_eq!(result.microniche, "defi");
        assert_eq!(result.nanoniche, "web3");
    }

    #[test]
    fn missing_tags_leave_positions_empty() {
        let result = classify(&input("treino em casa", &["hiit"]));
        assert_eq!(result.subniche, "hiit");
        assert_eq!(result.microniche, "");
        assert_eq!(result.nanoniche, "");
    }

    #[test]
    fn advanced_wording_sets_qualified() {
        let result = classify(&input("Curso avançado de tricô", &[]));
        assert!(result.qualified);

        let result = classify(&input("Introdução leve ao tema", &[]));
        assert!(!result.qualified);
    }

    #[test]
    fn eight_tags_set_qualified_without_advanced_wording() {
        let tags = ["um", "dois", "tres", "quatro", "cinco", "seis", "sete", "oito"];
        let result = classify(&input("fotos do churrasco", &tags));
        assert!(result.qualified);

        let seven = &tags[..7];
        let result = classify(&input("fotos do churrasco", seven));
        assert!(!result.qualified);
    }

    #[test]
    fn snippet_classification_joins_title_and_description() {
        let snippet = VideoSnippet {
            title: "Meu setup".into(),
            description: "Como montei minha carteira de dividendos".into(),
            tags: vec!["renda passiva".into()],
        };
        let result = classify_snippet(&snippet);
        assert_eq!(result.niche, Niche::Finance);
        assert_eq!(result.subniche, "renda passiva");
    }

    #[test]
    fn apply_to_fills_request_fields() {
        let mut request = ScriptRequest::default();
        let result = classify(&input("ETF de baixo custo", &["etfs", "b3"]));
        result.apply_to(&mut request);
        assert_eq!(request.niche, "Finance");
        assert_eq!(request.subniche, "etfs");
        assert_eq!(request.microniche, "b3");
        assert_eq!(request.nanoniche, "");
    }
}
