use tracing::{debug, debug_span};

use crate::glyph::{GlyphClass, GlyphTable, INHERENT_VOWEL};

/// Drop the inherent vowel the last consonant wrote into `out`.
fn drop_inherent_vowel(out: &mut String) {
    if out.ends_with(INHERENT_VOWEL) {
        out.truncate(out.len() - INHERENT_VOWEL.len());
    }
}

/// Convert Batak script to its Latin reading.
///
/// Greedy longest match, left to right. A vowel sign or the vowel killer
/// directly after a consonant replaces that consonant's inherent "a";
/// anything the table does not know is copied through unchanged.
pub fn script_to_latin(table: &GlyphTable, text: &str) -> String {
    let _span = debug_span!("script_to_latin", len = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    // Last unit was a consonant still carrying its inherent vowel.
    let mut open_consonant = false;
    let mut passthrough = 0usize;
    let mut i = 0;

    while i < chars.len() {
        if let Some((len, entry)) = table.match_script(&chars[i..]) {
            if entry.class == GlyphClass::VowelDiacritic && open_consonant {
                drop_inherent_vowel(&mut out);
            }
            out.push_str(&entry.latin);
            open_consonant = entry.class == GlyphClass::Consonant;
            i += len;
            continue;
        }

        let c = chars[i];
        if c == table.vowel_killer() && open_consonant {
            drop_inherent_vowel(&mut out);
        } else {
            out.push(c);
            passthrough += 1;
        }
        open_consonant = false;
        i += 1;
    }

    debug!(passthrough_count = passthrough);
    out
}
