//! Character-level Unicode classification for the Batak block.

/// Check the full Batak block (U+1BC0..U+1BFF). This includes the four
/// unassigned codepoints U+1BF4..U+1BFB; callers use it to pick a script font,
/// so the block-level check is preferred over an exact assigned-range test.
pub fn is_script_codepoint(c: char) -> bool {
    ('\u{1BC0}'..='\u{1BFF}').contains(&c)
}

/// Independent letters: consonants and the vowel letters A, I, U.
pub fn is_batak_letter(c: char) -> bool {
    ('\u{1BC0}'..='\u{1BE5}').contains(&c)
}

/// Signs that attach to a preceding letter: tompi, vowel signs, the final
/// consonant signs and the two vowel killers.
pub fn is_combining_sign(c: char) -> bool {
    ('\u{1BE6}'..='\u{1BF3}').contains(&c)
}
