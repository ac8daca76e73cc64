//! Template placeholder substitution.
//!
//! Templates reference configuration values with literal `{{key}}` tokens.
//! Substitution is a plain text replacement over the merged namespace, with
//! one special case: when the peer-address value decodes as a JSON array,
//! the single-element array literal `["{{source_peer_addresses}}"]` a
//! template author wrote is replaced with the real array, so a one-element
//! placeholder becomes a true multi-element array.
//!
//! A placeholder with no matching key is left in place untouched; detecting
//! those gaps is the drift validator's job, not this module's.

use crate::config::PEER_ADDRESSES_KEY;
use clap::ValueEnum;
use std::collections::BTreeMap;

/// What kind of text is being rendered.
///
/// Bodies get a JSON pretty-print pass after substitution; URLs are
/// returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Request URL: substituted text returned unchanged.
    Url,
    /// Request body: re-serialized as 2-space-indented JSON when the result
    /// parses, returned raw otherwise.
    Body,
}

/// Replace every `{{key}}` occurrence with its value from `merged_vars`.
pub fn substitute(template: &str, merged_vars: &BTreeMap<String, String>, mode: RenderMode) -> String {
    let mut rendered = template.to_string();

    for (key, value) in merged_vars {
        let token = format!("{{{{{key}}}}}");
        if key == PEER_ADDRESSES_KEY && rendered.contains(&token) {
            rendered = substitute_peer_addresses(&rendered, &token, value);
        } else {
            rendered = rendered.replace(&token, value);
        }
    }

    match mode {
        RenderMode::Body => match serde_json::from_str::<serde_json::Value>(&rendered) {
            Ok(parsed) => {
                serde_json::to_string_pretty(&parsed).unwrap_or(rendered)
            }
            Err(_) => rendered,
        },
        RenderMode::Url => rendered,
    }
}

/// Expand the peer-address placeholder.
///
/// A JSON-array value replaces the already-array-wrapped placeholder
/// `["{{source_peer_addresses}}"]` with the raw array text; a scalar value
/// (or one that fails to decode) falls back to plain replacement.
fn substitute_peer_addresses(template: &str, token: &str, value: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(parsed @ serde_json::Value::Array(_)) => {
            let wrapped = format!("[\"{token}\"]");
            template.replace(&wrapped, &parsed.to_string())
        }
        _ => template.replace(token, value),
    }
}
