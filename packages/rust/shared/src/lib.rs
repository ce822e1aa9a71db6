//! Shared types, error model, and configuration for ScriptForge.
//!
//! This crate is the foundation depended on by all other ScriptForge crates.
//! It provides:
//! - [`ScriptForgeError`] and the crate-wide [`Result`] alias
//! - Domain types ([`ScriptRequest`], [`VideoSnippet`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, YoutubeConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from, resolve_output_dir, youtube_api_key,
};
pub use error::{Result, ScriptForgeError};
pub use types::{ScriptRequest, VideoSnippet};
