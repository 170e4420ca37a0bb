//! Bidirectional Batak script <-> Latin transliteration.
//!
//! Every function here works against the process-wide glyph table, built on
//! first use from the embedded definition. Calls are synchronous, allocate
//! their own output and may run on any number of threads.

mod trace_init;


pub use batak_core::glyph::{
    default_toml, GlyphClass, GlyphConfigError, GlyphEntry, GlyphTable, UnknownVariant, Variant,
};
pub use batak_core::translit::{latin_to_script, script_to_latin};
pub use trace_init::init_tracing;

use tracing::debug_span;

use batak_core::translit::validate_pair;

/// Version of this crate.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Read Batak script as Latin. Unknown characters pass through.
pub fn to_latin(native_text: &str) -> String {
    let _span = debug_span!("to_latin").entered();
    script_to_latin(GlyphTable::global(), &normalize(native_text))
}

/// Write Latin text in canonical (Toba) Batak script.
pub fn to_native(latin_text: &str) -> String {
    to_native_variant(latin_text, Variant::Toba)
}

/// Write Latin text using a regional variant's letterforms where it has them.
pub fn to_native_variant(latin_text: &str, variant: Variant) -> String {
    let _span = debug_span!("to_native", %variant).entered();
    latin_to_script(GlyphTable::global(), &normalize(latin_text), variant)
}

/// Whether `ch` lies in the Batak Unicode block.
pub fn is_script_codepoint(ch: char) -> bool {
    batak_core::unicode::is_script_codepoint(ch)
}

/// Collapse whitespace runs to one space and trim.
pub fn normalize(text: &str) -> String {
    batak_core::normalize::normalize(text)
}

/// True when `native_text` reads back as `latin_text`, ignoring case and
/// whitespace layout.
pub fn validate_roundtrip(native_text: &str, latin_text: &str) -> bool {
    validate_pair(GlyphTable::global(), native_text, latin_text)
}
