#![forbid(unsafe_code)]

//! Display-language normalization.
//!
//! The content exists in exactly two languages, so any language tag the
//! host reports (`it`, `it-IT`, `it_CH`, `en-US`, `fr`, garbage) is
//! collapsed to one of two values: tags beginning with `it`
//! (case-insensitive) become Italian, everything else becomes English.
//! The binary partition is deliberate; no other language is ever
//! resolved differently.

/// One of the two display languages.
///
/// With the `serde` feature, serializes as the two-letter locale code
/// (`"en"` / `"it"`), matching catalog locale keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Lang {
    /// English, the default for any non-Italian tag.
    #[default]
    En,
    /// Italian, for any tag beginning with `it`.
    It,
}

impl Lang {
    /// Collapse an arbitrary language tag to a display language.
    ///
    /// Total: accepts any string, never fails.
    #[must_use]
    pub fn normalize(tag: &str) -> Self {
        let lowered = tag.trim().to_ascii_lowercase();
        if lowered.starts_with("it") {
            Self::It
        } else {
            Self::En
        }
    }

    /// The two-letter code used as a catalog locale key.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
