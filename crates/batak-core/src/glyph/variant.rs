use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Regional writing tradition. Toba is the canonical form of the table;
/// the others substitute their own letterforms where they differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Toba,
    Karo,
    Simalungun,
    Mandailing,
    Pakpak,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown script variant: {0}")]
pub struct UnknownVariant(pub String);

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Toba,
        Variant::Karo,
        Variant::Simalungun,
        Variant::Mandailing,
        Variant::Pakpak,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Toba => "toba",
            Variant::Karo => "karo",
            Variant::Simalungun => "simalungun",
            Variant::Mandailing => "mandailing",
            Variant::Pakpak => "pakpak",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == lowered)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
