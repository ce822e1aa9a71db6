//! Pure renderers from a [`ScriptDocument`] to each output format.
//!
//! Renderers take the export timestamp as a caller-supplied argument so
//! identical documents always render to identical strings.

use scriptforge_document::{DocumentBlock, SEPARATOR_RULE, ScriptDocument};
use scriptforge_shared::{Result, ScriptForgeError};
use serde::Serialize;

/// Render the document as Markdown with a YAML frontmatter block.
pub fn render_markdown(doc: &ScriptDocument, exported_at: Option<&str>) -> String {
    let mut out = build_frontmatter(document_title(doc), exported_at);
    out.push('\n');

    for block in &doc.blocks {
        match block {
            DocumentBlock::Title { text } => {
                out.push_str(&format!("# {text}\n\n"));
            }
            DocumentBlock::Labeled { label, value } => {
                out.push_str(&format!("**{label}:** {value}\n\n"));
            }
            DocumentBlock::Separator => {
                out.push_str("---\n\n");
            }
            DocumentBlock::Heading { level, text } => {
                out.push_str(&format!(
                    "{} {text}\n",
                    "#".repeat(level.depth() as usize)
                ));
            }
            // Markdown bold markers must hug the text to parse.
            DocumentBlock::Emphasis { text } => {
                out.push_str(&format!("**{}**\n", text.trim()));
            }
            DocumentBlock::Blank => out.push('\n'),
            DocumentBlock::Body { text } => {
                out.push_str(text);
                out.push('\n');
            }
        }
    }

    out
}

/// Render the document as plain text matching the layout the blocks carry.
pub fn render_text(doc: &ScriptDocument) -> String {
    let mut out = String::new();

    for block in &doc.blocks {
        match block {
            DocumentBlock::Title { text } => {
                out.push_str(&format!("{text}\n\n"));
            }
            DocumentBlock::Labeled { label, value } => {
                out.push_str(&format!("{label}: {value}\n"));
            }
            DocumentBlock::Separator => {
                out.push_str(SEPARATOR_RULE);
                out.push_str("\n\n");
            }
            DocumentBlock::Heading { text, .. } => {
                out.push_str(&format!("{text}\n"));
            }
            DocumentBlock::Emphasis { text } | DocumentBlock::Body { text } => {
                out.push_str(&format!("{text}\n"));
            }
            DocumentBlock::Blank => out.push('\n'),
        }
    }

    out
}

#[derive(Serialize)]
struct JsonExport<'a> {
    file_stem: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_at: Option<&'a str>,
    blocks: &'a [DocumentBlock],
}

/// Render the document as pretty-printed JSON.
pub fn render_json(doc: &ScriptDocument, exported_at: Option<&str>) -> Result<String> {
    let export = JsonExport {
        file_stem: &doc.file_stem,
        exported_at,
        blocks: &doc.blocks,
    };
    serde_json::to_string_pretty(&export)
        .map_err(|e| ScriptForgeError::Export(format!("JSON serialization failed: {e}")))
}

/// First title block's text, or empty.
fn document_title(doc: &ScriptDocument) -> &str {
    doc.blocks
        .iter()
        .find_map(|b| match b {
            DocumentBlock::Title { text } => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or("")
}

/// Build a YAML frontmatter block.
fn build_frontmatter(title: &str, exported_at: Option<&str>) -> String {
    let mut fm = String::from("---\n");
    fm.push_str(&format!("title: \"{}\"\n", escape_yaml_string(title)));
    if let Some(ts) = exported_at {
        fm.push_str(&format!("exported_at: \"{ts}\"\n"));
    }
    fm.push_str("---\n");
    fm
}

/// Escape special characters in a YAML string value.
fn escape_yaml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptforge_document::{DocumentMeta, build_document};

    fn sample_doc() -> ScriptDocument {
        let meta = DocumentMeta {
            title: "My Video".into(),
            duration: "12 min".into(),
            style: "Documentary".into(),
            generator_label: "Google Gemini".into(),
            generator_id: "gemini".into(),
        };
        build_document("## Hook\n\nOpening line\nBIG REVEAL", &meta)
    }

    #[test]
    fn markdown_includes_frontmatter_and_blocks() {
        let md = render_markdown(&sample_doc(), Some("2025-08-26T12:00:00Z"));

        assert!(md.starts_with("---\ntitle: \"My Video\"\n"));
        assert!(md.contains("exported_at: \"2025-08-26T12:00:00Z\""));
        assert!(md.contains("# My Video\n"));
        assert!(md.contains("**Duration:** 12 min\n"));
        assert!(md.contains("**Generated by:** Google Gemini\n"));
        assert!(md.contains("\n---\n\n## Hook\n"));
        assert!(md.contains("**BIG REVEAL**\n"));
        assert!(md.contains("Opening line\n"));
    }

    #[test]
    fn markdown_without_timestamp_is_deterministic() {
        let first = render_markdown(&sample_doc(), None);
        let second = render_markdown(&sample_doc(), None);
        assert_eq!(first, second);
        assert!(!first.contains("exported_at"));
    }

    #[test]
    fn markdown_escapes_title_quotes() {
        let meta = DocumentMeta {
            title: "The \"Best\" Video".into(),
            ..DocumentMeta::default()
        };
        let md = render_markdown(&build_document("", &meta), None);
        assert!(md.contains(r#"title: "The \"Best\" Video""#));
    }

    #[test]
    fn text_renders_labels_and_separator() {
        let txt = render_text(&sample_doc());

        assert!(txt.starts_with("My Video\n\n"));
        assert!(txt.contains("Duration: 12 min\n"));
        assert!(txt.contains("Style: Documentary\n"));
        assert!(txt.contains(SEPARATOR_RULE));
        // Heading text appears without markers.
        assert!(txt.contains("\nHook\n"));
        assert!(!txt.contains("## Hook"));
        assert!(txt.contains("BIG REVEAL\n"));
    }

    #[test]
    fn json_round_trips_blocks() {
        let doc = sample_doc();
        let json = render_json(&doc, Some("2025-08-26T12:00:00Z")).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["file_stem"], "script-My-Video-gemini");
        assert_eq!(value["exported_at"], "2025-08-26T12:00:00Z");
        let blocks = value["blocks"].as_array().expect("blocks array");
        assert_eq!(blocks.len(), doc.blocks.len());
        assert_eq!(blocks[0]["kind"], "title");
        assert_eq!(blocks[4]["kind"], "separator");
    }

    #[test]
    fn json_omits_missing_timestamp() {
        let json = render_json(&sample_doc(), None).expect("render json");
        assert!(!json.contains("exported_at"));
    }
}
