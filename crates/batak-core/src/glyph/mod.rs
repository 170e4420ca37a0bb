//! Batak glyph table.
//!
//! Holds the Latin <-> script correspondences and indexes them in two
//! char tries, one per direction. The process-wide table is built once from
//! the embedded `default_glyphs.toml` and shared by `&'static` reference.

mod config;
mod trie;
mod variant;

pub use config::{default_toml, parse_glyph_toml, GlyphConfig, GlyphConfigError, VariantForm};
pub use variant::{UnknownVariant, Variant};

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::unicode::{is_batak_letter, is_combining_sign, is_script_codepoint};
use config::DEFAULT_TOML;
use trie::CharTrie;

/// The vowel every consonant sign carries until a diacritic or the vowel
/// killer overrides it.
pub const INHERENT_VOWEL: &str = "a";

const MAX_LATIN_LEN: usize = 4;
const MAX_SCRIPT_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphClass {
    Consonant,
    VowelDiacritic,
    StandaloneVowel,
    Coda,
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GlyphClass::Consonant => "consonant",
            GlyphClass::VowelDiacritic => "vowel-diacritic",
            GlyphClass::StandaloneVowel => "standalone-vowel",
            GlyphClass::Coda => "coda",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlyphEntry {
    pub latin: String,
    pub script: String,
    pub class: GlyphClass,
}

/// Everything a Latin key can stand for, one entry index per role.
///
/// A consonant's `onset` is its Latin spelling without the inherent vowel
/// (`"ng"` for `"nga"`); it is derived, not defined in the table.
#[derive(Debug, Default)]
pub(crate) struct LatinSlot {
    pub syllable: Option<usize>,
    pub onset: Option<usize>,
    pub standalone: Option<usize>,
    pub diacritic: Option<usize>,
    pub coda: Option<usize>,
}

impl LatinSlot {
    fn role_mut(&mut self, class: GlyphClass) -> &mut Option<usize> {
        match class {
            GlyphClass::Consonant => &mut self.syllable,
            GlyphClass::VowelDiacritic => &mut self.diacritic,
            GlyphClass::StandaloneVowel => &mut self.standalone,
            GlyphClass::Coda => &mut self.coda,
        }
    }

    fn role(&self, class: GlyphClass) -> Option<usize> {
        match class {
            GlyphClass::Consonant => self.syllable,
            GlyphClass::VowelDiacritic => self.diacritic,
            GlyphClass::StandaloneVowel => self.standalone,
            GlyphClass::Coda => self.coda,
        }
    }

    /// First-defined entry spelled with this key.
    fn first_entry(&self) -> Option<usize> {
        [self.syllable, self.standalone, self.diacritic, self.coda]
            .into_iter()
            .flatten()
            .min()
    }
}

#[derive(Debug)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
    by_script: CharTrie<usize>,
    by_latin: CharTrie<LatinSlot>,
    variant_forms: HashMap<(Variant, usize), String>,
    variant_form_count: usize,
    vowel_killer: char,
    max_script_key_len: usize,
    max_latin_key_len: usize,
}

impl GlyphTable {
    /// Get or initialize the global table built from the embedded definition.
    pub fn global() -> &'static GlyphTable {
        static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            GlyphTable::from_toml(DEFAULT_TOML).expect("glyph table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlyphConfigError> {
        Self::from_config(parse_glyph_toml(toml_str)?)
    }

    /// Validate a parsed definition and build both indices.
    pub fn from_config(config: GlyphConfig) -> Result<Self, GlyphConfigError> {
        let GlyphConfig {
            vowel_killer,
            glyph: entries,
            variant,
        } = config;

        if entries.is_empty() {
            return Err(GlyphConfigError::Empty);
        }
        let vowel_killer = parse_vowel_killer(&vowel_killer)?;

        let mut by_script = CharTrie::new();
        let mut by_latin: CharTrie<LatinSlot> = CharTrie::new();

        for (idx, entry) in entries.iter().enumerate() {
            check_entry(entry)?;

            let slot = by_latin
                .slot_mut(&entry.latin)
                .get_or_insert_with(LatinSlot::default);
            let role = slot.role_mut(entry.class);
            if let Some(prev) = *role {
                // An exact repeat defines nothing new.
                if entries[prev].script == entry.script {
                    continue;
                }
                return Err(GlyphConfigError::DuplicateLatin {
                    latin: entry.latin.clone(),
                    class: entry.class,
                });
            }
            *role = Some(idx);

            claim_script(&mut by_script, &entries, &entry.script, idx, &entry.latin)?;
        }

        // Onsets go in after every full key so a derived onset can never
        // shadow a defined entry.
        for (idx, entry) in entries.iter().enumerate() {
            if entry.class != GlyphClass::Consonant {
                continue;
            }
            if let Some(onset) = entry.latin.strip_suffix(INHERENT_VOWEL) {
                let slot = by_latin
                    .slot_mut(onset)
                    .get_or_insert_with(LatinSlot::default);
                slot.onset.get_or_insert(idx);
            }
        }

        let mut variant_forms = HashMap::new();
        for form in &variant {
            let idx = by_latin
                .get(&form.latin)
                .and_then(|slot| slot.role(form.class))
                .ok_or_else(|| GlyphConfigError::UnknownCanonical {
                    variant: form.name,
                    latin: form.latin.clone(),
                    class: form.class,
                })?;
            check_script(&form.script, form.class, &form.latin)?;
            claim_script(&mut by_script, &entries, &form.script, idx, &form.latin)?;
            variant_forms.insert((form.name, idx), form.script.clone());
        }

        let max_latin_key_len = entries
            .iter()
            .map(|e| e.latin.chars().count())
            .max()
            .unwrap_or(0);
        let max_script_key_len = by_script.max_depth();

        debug!(
            entries = entries.len(),
            variant_forms = variant_forms.len(),
            max_latin_key_len,
            max_script_key_len,
            "glyph table built"
        );

        Ok(GlyphTable {
            entries,
            by_script,
            by_latin,
            variant_form_count: variant.len(),
            variant_forms,
            vowel_killer,
            max_script_key_len,
            max_latin_key_len,
        })
    }

    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn variant_form_count(&self) -> usize {
        self.variant_form_count
    }

    pub fn vowel_killer(&self) -> char {
        self.vowel_killer
    }

    pub fn max_script_key_len(&self) -> usize {
        self.max_script_key_len
    }

    pub fn max_latin_key_len(&self) -> usize {
        self.max_latin_key_len
    }

    /// Latin reading of an exact script key, canonical or variant.
    pub fn lookup_by_script(&self, script: &str) -> Option<&str> {
        self.by_script
            .get(script)
            .map(|&idx| self.entries[idx].latin.as_str())
    }

    /// Canonical script of the first-defined entry spelled `latin`.
    pub fn lookup_by_latin(&self, latin: &str) -> Option<&str> {
        self.by_latin
            .get(latin)
            .and_then(LatinSlot::first_entry)
            .map(|idx| self.entries[idx].script.as_str())
    }

    /// Script form of an entry in the given variant, falling back to the
    /// canonical form.
    pub fn script_for(&self, idx: usize, variant: Variant) -> &str {
        self.variant_forms
            .get(&(variant, idx))
            .map(String::as_str)
            .unwrap_or(&self.entries[idx].script)
    }

    pub(crate) fn match_script(&self, input: &[char]) -> Option<(usize, &GlyphEntry)> {
        self.by_script
            .longest_match(input, self.max_script_key_len)
            .map(|(len, &idx)| (len, &self.entries[idx]))
    }

    pub(crate) fn match_latin(&self, input: &[char]) -> Option<(usize, &LatinSlot)> {
        self.by_latin.longest_match(input, self.max_latin_key_len)
    }
}

fn parse_vowel_killer(s: &str) -> Result<char, GlyphConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_combining_sign(c) => Ok(c),
        _ => Err(GlyphConfigError::InvalidVowelKiller(s.to_string())),
    }
}

fn check_entry(entry: &GlyphEntry) -> Result<(), GlyphConfigError> {
    let latin = &entry.latin;
    if latin.is_empty()
        || latin.len() > MAX_LATIN_LEN
        || !latin.bytes().all(|b| b.is_ascii_lowercase())
    {
        return Err(GlyphConfigError::InvalidLatin(latin.clone()));
    }
    if entry.class == GlyphClass::Consonant
        && (latin == INHERENT_VOWEL || !latin.ends_with(INHERENT_VOWEL))
    {
        return Err(GlyphConfigError::MissingInherentVowel(latin.clone()));
    }
    check_script(&entry.script, entry.class, latin)
}

fn check_script(script: &str, class: GlyphClass, latin: &str) -> Result<(), GlyphConfigError> {
    let invalid = |reason| GlyphConfigError::InvalidScript {
        latin: latin.to_string(),
        reason,
    };
    let chars: Vec<char> = script.chars().collect();
    let Some(&base) = chars.first() else {
        return Err(invalid("empty"));
    };
    if chars.len() > MAX_SCRIPT_LEN {
        return Err(invalid("more than 2 code points"));
    }
    if !is_script_codepoint(base) {
        return Err(invalid("base sign outside the Batak block"));
    }
    match class {
        GlyphClass::Consonant | GlyphClass::StandaloneVowel if !is_batak_letter(base) => {
            return Err(invalid("base is not a Batak letter"));
        }
        GlyphClass::VowelDiacritic | GlyphClass::Coda if !is_combining_sign(base) => {
            return Err(invalid("base is not a Batak sign"));
        }
        _ => {}
    }
    if chars[1..].iter().any(|&c| !is_combining_sign(c)) {
        return Err(invalid("second code point is not a Batak sign"));
    }
    Ok(())
}

/// Register `script` as a key for entry `idx`. Re-registering the same
/// reading is harmless; a script claimed by a different reading is not.
fn claim_script(
    by_script: &mut CharTrie<usize>,
    entries: &[GlyphEntry],
    script: &str,
    idx: usize,
    latin: &str,
) -> Result<(), GlyphConfigError> {
    if let Some(&prev) = by_script.get(script) {
        let first = &entries[prev];
        if first.latin != latin || first.class != entries[idx].class {
            return Err(GlyphConfigError::DuplicateScript {
                script: script.to_string(),
                first: first.latin.clone(),
                second: latin.to_string(),
            });
        }
        return Ok(());
    }
    by_script.insert(script, idx);
    Ok(())
}
