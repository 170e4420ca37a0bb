use serde::Deserialize;

use super::variant::Variant;
use super::{GlyphClass, GlyphEntry};

pub const DEFAULT_TOML: &str = include_str!("default_glyphs.toml");

/// Raw table definition as written in TOML, before semantic validation.
#[derive(Debug, Deserialize)]
pub struct GlyphConfig {
    pub vowel_killer: String,
    pub glyph: Vec<GlyphEntry>,
    #[serde(default)]
    pub variant: Vec<VariantForm>,
}

/// A regional letterform for an existing canonical entry.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantForm {
    pub name: Variant,
    pub latin: String,
    pub class: GlyphClass,
    pub script: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[glyph]] list is empty")]
    Empty,
    #[error("invalid latin key {0:?}: expected 1-4 lower-case ASCII letters")]
    InvalidLatin(String),
    #[error("invalid script for {latin:?}: {reason}")]
    InvalidScript { latin: String, reason: &'static str },
    #[error("consonant {0:?} must end with the inherent vowel")]
    MissingInherentVowel(String),
    #[error("duplicate {class} entry for latin {latin:?}")]
    DuplicateLatin { latin: String, class: GlyphClass },
    #[error("script {script:?} is claimed by both {first:?} and {second:?}")]
    DuplicateScript {
        script: String,
        first: String,
        second: String,
    },
    #[error("vowel killer must be a single Batak sign, got {0:?}")]
    InvalidVowelKiller(String),
    #[error("{variant} form for {latin:?} has no canonical {class} entry")]
    UnknownCanonical {
        variant: Variant,
        latin: String,
        class: GlyphClass,
    },
}

/// Parse TOML text into an unvalidated `GlyphConfig`.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphConfig, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;

    if config.glyph.is_empty() {
        return Err(GlyphConfigError::Empty);
    }

    Ok(config)
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
