//! Forward (script → Latin) and reverse (Latin → script) matchers.
//!
//! Both are pure functions of a `GlyphTable` and the input; they never fail
//! and copy unknown characters through. Callers normalize whitespace first.

mod forward;
mod reverse;

pub use forward::script_to_latin;
pub use reverse::latin_to_script;

use crate::glyph::GlyphTable;
use crate::normalize::normalize;

/// Check that `native` reads back as `latin`, ignoring case and layout.
pub fn validate_pair(table: &GlyphTable, native: &str, latin: &str) -> bool {
    let reading = script_to_latin(table, &normalize(native));
    reading.to_lowercase() == normalize(latin).to_lowercase()
}
