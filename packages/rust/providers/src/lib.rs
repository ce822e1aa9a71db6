//! Provider catalog and prompt building for ScriptForge.
//!
//! Knows *about* the supported AI providers (ids, endpoints, key env vars,
//! cost notes, models) and how to assemble the generation prompt from a
//! [`scriptforge_shared::ScriptRequest`]. Calling the providers is the
//! caller's business, not this crate's.

pub mod catalog;
pub mod prompt;

pub use catalog::{CATALOG, Provider, all, default_provider, find};
pub use prompt::build_prompt;
