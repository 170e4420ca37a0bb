use std::fs;
use std::io;
use std::path::Path;
use std::process;

use serde::Serialize;

use batak_engine::{
    default_toml, latin_to_script, script_to_latin, GlyphClass, GlyphConfigError, GlyphTable,
    Variant,
};

#[derive(Debug, thiserror::Error)]
pub enum TableFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] GlyphConfigError),
}

/// Read and validate a glyph table definition.
pub fn load_table(path: &Path) -> Result<GlyphTable, TableFileError> {
    let content = fs::read_to_string(path)?;
    Ok(GlyphTable::from_toml(&content)?)
}

/// Entry counts per class, in the order they are printed.
pub fn class_counts(table: &GlyphTable) -> [(GlyphClass, usize); 4] {
    let mut counts = [
        (GlyphClass::Consonant, 0),
        (GlyphClass::VowelDiacritic, 0),
        (GlyphClass::StandaloneVowel, 0),
        (GlyphClass::Coda, 0),
    ];
    for entry in table.entries() {
        if let Some((_, n)) = counts.iter_mut().find(|(class, _)| *class == entry.class) {
            *n += 1;
        }
    }
    counts
}

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let table = die!(load_table(Path::new(file)), "Error in {file}: {}");
    let counts = class_counts(&table)
        .iter()
        .map(|(class, n)| format!("{class}={n}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "OK: {} glyphs ({counts}), {} variant forms",
        table.entries().len(),
        table.variant_form_count()
    );
}

#[derive(Debug, Serialize)]
pub struct SelftestFailure {
    pub latin: String,
    pub script: String,
    pub class: String,
    pub direction: &'static str,
    pub actual: String,
}

#[derive(Debug, Serialize)]
pub struct SelftestReport {
    pub entries: usize,
    pub variants_checked: usize,
    pub failures: Vec<SelftestFailure>,
}

impl SelftestReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Round-trip every entry of `table`.
///
/// Each script form must read back as its Latin. Consonants and standalone
/// vowels must also be written back from their Latin, in every variant.
pub fn run_selftest(table: &GlyphTable) -> SelftestReport {
    let mut failures = Vec::new();
    let mut variants_checked = 0;

    for (idx, entry) in table.entries().iter().enumerate() {
        let mut fail = |direction, script: &str, actual: String| {
            failures.push(SelftestFailure {
                latin: entry.latin.clone(),
                script: script.to_string(),
                class: entry.class.to_string(),
                direction,
                actual,
            });
        };

        let reading = script_to_latin(table, &entry.script);
        if reading != entry.latin {
            fail("script-to-latin", &entry.script, reading);
        }

        if !matches!(
            entry.class,
            GlyphClass::Consonant | GlyphClass::StandaloneVowel
        ) {
            continue;
        }
        for variant in Variant::ALL {
            let expected = table.script_for(idx, variant);
            if variant != Variant::Toba && expected != entry.script {
                variants_checked += 1;
                let reading = script_to_latin(table, expected);
                if reading != entry.latin {
                    fail("script-to-latin", expected, reading);
                }
            }
            let written = latin_to_script(table, &entry.latin, variant);
            if written != expected {
                fail("latin-to-script", expected, written);
            }
        }
    }

    SelftestReport {
        entries: table.entries().len(),
        variants_checked,
        failures,
    }
}

pub fn selftest(json: bool) {
    let report = run_selftest(GlyphTable::global());

    if json {
        let text = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{text}");
    } else {
        for f in &report.failures {
            println!(
                "FAIL {} {} ({}): {:?} -> {:?}",
                f.direction, f.latin, f.class, f.script, f.actual
            );
        }
        println!(
            "{} entries, {} variant forms checked, {} failures",
            report.entries,
            report.variants_checked,
            report.failures.len()
        );
    }

    if !report.passed() {
        process::exit(1);
    }
}
