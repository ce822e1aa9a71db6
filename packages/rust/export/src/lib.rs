//! Document export for ScriptForge.
//!
//! Renders a [`scriptforge_document::ScriptDocument`] to Markdown, plain
//! text, or JSON and writes it to disk atomically with a checksum receipt.
//! The file name is the document's stem plus the format's extension.

pub mod render;

use std::path::{Path, PathBuf};

use scriptforge_document::ScriptDocument;
use scriptforge_shared::{Result, ScriptForgeError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

pub use render::{render_json, render_markdown, render_text};

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Output format for an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Render a document to a string in the given format.
pub fn render(
    doc: &ScriptDocument,
    format: ExportFormat,
    exported_at: Option<&str>,
) -> Result<String> {
    Ok(match format {
        ExportFormat::Markdown => render::render_markdown(doc, exported_at),
        ExportFormat::Text => render::render_text(doc),
        ExportFormat::Json => render::render_json(doc, exported_at)?,
    })
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Receipt for a written export file.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    /// Path of the written file.
    pub path: PathBuf,
    /// SHA-256 of the file content.
    pub sha256: String,
    /// Content size in bytes.
    pub size_bytes: usize,
}

/// Render a document and write it atomically (temp file, then rename).
///
/// Creates `output_dir` if needed. An existing file with the same name is
/// replaced.
#[instrument(skip_all, fields(stem = %doc.file_stem, format = ?format))]
pub fn write_export(
    doc: &ScriptDocument,
    format: ExportFormat,
    output_dir: &Path,
    exported_at: Option<&str>,
) -> Result<ExportReceipt> {
    let content = render(doc, format, exported_at)?;

    std::fs::create_dir_all(output_dir).map_err(|e| ScriptForgeError::io(output_dir, e))?;

    let filename = format!("{}.{}", doc.file_stem, format.extension());
    let target = output_dir.join(&filename);
    let temp = output_dir.join(format!(".{filename}.tmp"));

    // Write to temp file first, then atomic rename
    std::fs::write(&temp, &content).map_err(|e| ScriptForgeError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| ScriptForgeError::io(&target, e))?;

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let sha256 = format!("{:x}", hasher.finalize());

    debug!(path = %target.display(), size = content.len(), "wrote export");

    Ok(ExportReceipt {
        path: target,
        sha256,
        size_bytes: content.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptforge_document::{DocumentMeta, build_document};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sf-export-{tag}-{}-{nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_doc() -> ScriptDocument {
        let meta = DocumentMeta {
            title: "Export Me".into(),
            duration: "5 min".into(),
            style: "Vlog".into(),
            generator_label: "OpenAI ChatGPT".into(),
            generator_id: "openai".into(),
        };
        build_document("# Intro\n\nFirst line", &meta)
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn write_export_creates_named_file() {
        let tmp = temp_dir("named");
        let receipt = write_export(&sample_doc(), ExportFormat::Markdown, &tmp, None)
            .expect("write export");

        assert_eq!(receipt.path, tmp.join("script-Export-Me-openai.md"));
        assert!(receipt.path.exists());
        assert_eq!(receipt.sha256.len(), 64);

        let on_disk = std::fs::read_to_string(&receipt.path).unwrap();
        assert_eq!(on_disk.len(), receipt.size_bytes);
        assert!(on_disk.contains("# Export Me"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_export_leaves_no_temp_files() {
        let tmp = temp_dir("atomic");
        write_export(&sample_doc(), ExportFormat::Text, &tmp, None).expect("write export");

        for entry in std::fs::read_dir(&tmp).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_export_creates_missing_output_dir() {
        let tmp = temp_dir("nested");
        let nested = tmp.join("a/b/c");
        let receipt = write_export(&sample_doc(), ExportFormat::Json, &nested, None)
            .expect("write export");

        assert!(receipt.path.starts_with(&nested));
        assert!(receipt.path.exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_export_overwrites_existing_file() {
        let tmp = temp_dir("overwrite");
        let first = write_export(&sample_doc(), ExportFormat::Text, &tmp, None).unwrap();
        let second = write_export(&sample_doc(), ExportFormat::Text, &tmp, None).unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.sha256, second.sha256);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn all_formats_export_the_same_document() {
        let tmp = temp_dir("formats");
        let doc = sample_doc();

        for format in [ExportFormat::Markdown, ExportFormat::Text, ExportFormat::Json] {
            let receipt = write_export(&doc, format, &tmp, Some("2025-08-26T12:00:00Z"))
                .expect("write export");
            assert!(receipt.path.exists());
            assert!(receipt.size_bytes > 0);
        }

        assert_eq!(std::fs::read_dir(&tmp).unwrap().count(), 3);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
