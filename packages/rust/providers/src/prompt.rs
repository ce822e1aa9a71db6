//! Deterministic prompt assembly for script generation.
//!
//! The prompt is plain text the caller forwards to whichever provider they
//! use; this crate never performs the call. Required fields mirror the
//! generation form: topic, duration, and style must be present, everything
//! else is appended only when filled in. Identical requests always produce
//! identical prompts.

use scriptforge_shared::{Result, ScriptForgeError, ScriptRequest};

/// Build the provider-ready prompt for a request.
pub fn build_prompt(request: &ScriptRequest) -> Result<String> {
    if request.topic.is_empty() || request.duration.is_empty() || request.style.is_empty() {
        return Err(ScriptForgeError::validation(
            "topic, duration, and style are required to build a prompt",
        ));
    }

    let mut prompt = String::new();
    prompt.push_str("You are an experienced YouTube scriptwriter.\n");
    prompt.push_str(&format!(
        "Write a complete narration script for a video about \"{}\".\n\n",
        request.topic
    ));

    prompt.push_str("Requirements:\n");
    prompt.push_str(&format!("- Target duration: {}\n", request.duration));
    prompt.push_str(&format!("- Narration style: {}\n", request.style));
    if !request.style_keywords.is_empty() {
        prompt.push_str(&format!("- Style keywords: {}\n", request.style_keywords));
    }
    if !request.language.is_empty() {
        prompt.push_str(&format!("- Write the script in {}\n", request.language));
    }
    if !request.audience.is_empty() {
        prompt.push_str(&format!("- Target audience: {}\n", request.audience));
    }
    if request.qualified {
        prompt.push_str("- Assume an advanced audience; skip beginner explanations\n");
    }
    prompt.push_str(&format!(
        "- Cover exactly {} main points, each under its own heading\n",
        request.characteristics
    ));

    let niche_path: Vec<&str> = [
        request.niche.as_str(),
        request.subniche.as_str(),
        request.microniche.as_str(),
        request.nanoniche.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
    if !niche_path.is_empty() {
        prompt.push_str(&format!("- Niche: {}\n", niche_path.join(" > ")));
    }

    prompt.push_str(
        "\nFormat:\n\
         - Mark section headings with leading `#` characters (`#`, `##`, `###`)\n\
         - Put shouted hook lines in ALL CAPS on their own line\n\
         - Separate paragraphs with blank lines\n",
    );

    if !request.additional_info.is_empty() {
        prompt.push_str(&format!("\nAdditional notes:\n{}\n", request.additional_info));
    }

    tracing::debug!(chars = prompt.len(), "built prompt");
    Ok(prompt)
}
