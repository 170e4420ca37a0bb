use tracing::{debug, debug_span};

use crate::glyph::{GlyphTable, Variant};

/// A consonant written from its bare onset whose vowel is still undecided.
struct OpenConsonant {
    /// Byte offset in the output where the consonant sign starts.
    start: usize,
    coda: Option<usize>,
    after_vowel: bool,
}

/// Convert Latin text to Batak script in the given variant.
///
/// The input is lower-cased, then scanned once, left to right, taking the
/// longest Latin key at each position. A consonant reached through its onset
/// (`h` in `ho`) takes the next vowel as a diacritic on the same sign; one that
/// is followed by no vowel is closed with its coda sign or the vowel killer.
pub fn latin_to_script(table: &GlyphTable, text: &str, variant: Variant) -> String {
    let _span = debug_span!("latin_to_script", len = text.len(), %variant).entered();

    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(lowered.len() * 3);
    let mut open: Option<OpenConsonant> = None;
    // Last unit written ends in a vowel (needed before a coda sign).
    let mut voiced = false;
    let mut passthrough = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let Some((len, slot)) = table.match_latin(&chars[i..]) else {
            close_dead(table, variant, &mut out, open.take());
            out.push(chars[i]);
            passthrough += 1;
            voiced = false;
            i += 1;
            continue;
        };

        if let Some(idx) = slot.diacritic.filter(|_| open.is_some()) {
            // Overlay the vowel on the open consonant.
            open = None;
            out.push_str(table.script_for(idx, variant));
            voiced = true;
        } else if let Some(idx) = slot.syllable.or(slot.standalone) {
            close_dead(table, variant, &mut out, open.take());
            out.push_str(table.script_for(idx, variant));
            voiced = true;
        } else if let Some(idx) = slot.onset {
            close_dead(table, variant, &mut out, open.take());
            open = Some(OpenConsonant {
                start: out.len(),
                coda: slot.coda,
                after_vowel: voiced,
            });
            out.push_str(table.script_for(idx, variant));
            voiced = false;
        } else if let Some(idx) = slot.coda.or(slot.diacritic) {
            close_dead(table, variant, &mut out, open.take());
            out.push_str(table.script_for(idx, variant));
            voiced = false;
        }
        i += len;
    }
    close_dead(table, variant, &mut out, open.take());

    debug!(passthrough_count = passthrough);
    out
}

/// Finish a consonant that never received a vowel.
fn close_dead(
    table: &GlyphTable,
    variant: Variant,
    out: &mut String,
    open: Option<OpenConsonant>,
) {
    let Some(open) = open else {
        return;
    };
    match open.coda {
        Some(coda) if open.after_vowel => {
            out.truncate(open.start);
            out.push_str(table.script_for(coda, variant));
        }
        _ => out.push(table.vowel_killer()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(text: &str) -> String {
        latin_to_script(GlyphTable::global(), text, Variant::Toba)
    }

    #[test]
    fn test_full_syllable() {
        assert_eq!(native("ha"), "ᯂ");
        assert_eq!(native("nga"), "ᯝ");
        assert_eq!(native("nya"), "ᯠ");
    }

    #[test]
    fn test_longest_match_ca() {
        assert_eq!(native("ca"), "\u{1BE1}");
        assert_eq!(native("ca").chars().count(), 1);
    }

    #[test]
    fn test_onset_plus_diacritic() {
        assert_eq!(native("ho"), "ᯂᯬ");
        assert_eq!(native("ngi"), "ᯝᯪ");
        assert_eq!(native("ku"), "ᯂ᯦ᯮ");
        assert_eq!(native("nyanyi"), "ᯠᯠᯪ");
    }

    #[test]
    fn test_syllable_keeps_vowel_before_standalone() {
        // "hai" is HA followed by the letter I, not HI.
        assert_eq!(native("hai"), "ᯂᯤ");
        assert_eq!(native("hi"), "ᯂᯪ");
    }

    #[test]
    fn test_standalone_vowels() {
        assert_eq!(native("a"), "ᯀ");
        assert_eq!(native("o"), "ᯀᯬ");
        assert_eq!(native("ia"), "ᯤᯀ");
    }

    #[test]
    fn test_dead_consonant_gets_vowel_killer() {
        assert_eq!(native("s"), "ᯘ᯲");
        assert_eq!(native("tanpa"), "ᯖᯉ᯲ᯇ");
        assert_eq!(native("horas"), "ᯂᯬᯒᯘ᯲");
    }

    #[test]
    fn test_coda_after_vowel() {
        assert_eq!(native("tangga"), "ᯖᯰᯎ");
        assert_eq!(native("bah"), "ᯅᯱ");
        assert_eq!(native("bang"), "ᯅᯰ");
    }

    #[test]
    fn test_coda_needs_preceding_vowel() {
        assert_eq!(native("h"), "ᯂ᯲");
        assert_eq!(native("ng"), "ᯝ᯲");
        assert_eq!(native("tanghi"), "ᯖᯰᯂᯪ");
    }

    #[test]
    fn test_space_splits_onset_from_vowel() {
        assert_eq!(native("ng a"), "ᯝ᯲ ᯀ");
    }

    #[test]
    fn test_horas_ma() {
        assert_eq!(
            native("horas ma"),
            "\u{1BC2}\u{1BEC}\u{1BD2}\u{1BD8}\u{1BF2} \u{1BD4}"
        );
    }

    #[test]
    fn test_lowercases_input() {
        assert_eq!(native("HORAS Ma"), native("horas ma"));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(native("123"), "123");
        assert_eq!(native("x"), "x");
        assert_eq!(native("ma, ma!"), "ᯔ, ᯔ!");
        assert_eq!(native(""), "");
    }

    #[test]
    fn test_passthrough_closes_open_consonant() {
        assert_eq!(native("s1"), "ᯘ᯲1");
        assert_eq!(native("bah."), "ᯅᯱ.");
    }

    #[test]
    fn test_variant_letterforms() {
        let table = GlyphTable::global();
        assert_eq!(latin_to_script(table, "ba", Variant::Karo), "ᯆ");
        assert_eq!(latin_to_script(table, "bi", Variant::Karo), "ᯆᯫ");
        assert_eq!(latin_to_script(table, "sa", Variant::Mandailing), "ᯚ");
        assert_eq!(latin_to_script(table, "te", Variant::Pakpak), "ᯗᯨ");
        // No karo form for "ma": canonical sign.
        assert_eq!(latin_to_script(table, "ma", Variant::Karo), "ᯔ");
    }
}
