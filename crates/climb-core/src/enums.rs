//! Climb type, attempt style, and attempt performance.
//!
//! Every enum carries two string forms:
//! - a canonical tag (upper case, at most 8 bytes) used both for display and
//!   as the on-disk encoding, and
//! - a set of short/long input aliases matched case-insensitively.
//!
//! [`Tagged`] ties the two together so the codec and the prompt layer can
//! treat all three enums uniformly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Longest tag any enum may carry. Matches the on-disk tag slot.
pub const TAG_MAX_BYTES: usize = 8;

/// An enum with a fixed canonical tag and case-insensitive input aliases.
pub trait Tagged: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Human-readable name of the field, used in diagnostics.
    const FIELD: &'static str;

    /// Canonical tag. Also the display string and the disk encoding.
    fn tag(self) -> &'static str;

    /// Accepted input spellings, compared case-insensitively.
    fn aliases(self) -> &'static [&'static str];

    /// Exact inverse of [`Tagged::tag`].
    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.tag() == tag)
    }

    /// Resolve user input against every variant's aliases.
    fn from_alias(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.iter().copied().find(|variant| {
            variant
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(input))
        })
    }
}

fn parse_alias<T: Tagged>(input: &str) -> Result<T, CoreError> {
    T::from_alias(input).ok_or_else(|| {
        CoreError::validation(format!("unrecognized {}: `{}`", T::FIELD, input.trim()))
    })
}

// ---------------------------------------------------------------------------
// ClimbType
// ---------------------------------------------------------------------------

/// Discipline of a climb. Decides which grade table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimbType {
    Boulder,
    Sport,
    TopRope,
    Trad,
}

impl ClimbType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boulder => "BOULDER",
            Self::Sport => "SPORT",
            Self::TopRope => "TOP ROPE",
            Self::Trad => "TRAD",
        }
    }
}

impl Tagged for ClimbType {
    const ALL: &'static [Self] = &[Self::Boulder, Self::Sport, Self::TopRope, Self::Trad];
    const FIELD: &'static str = "climb type";

    fn tag(self) -> &'static str {
        self.as_str()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Boulder => &["b", "boulder"],
            Self::Sport => &["s", "sport"],
            Self::TopRope => &["tr", "top rope"],
            Self::Trad => &["t", "trad"],
        }
    }
}

impl fmt::Display for ClimbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimbType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alias(s)
    }
}

// ---------------------------------------------------------------------------
// AttemptStyle
// ---------------------------------------------------------------------------

/// How the rope (or lack of one) was used on an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStyle {
    Lead,
    TopRope,
    Solo,
}

impl AttemptStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "LEAD",
            Self::TopRope => "TR",
            Self::Solo => "SOLO",
        }
    }
}

impl Tagged for AttemptStyle {
    const ALL: &'static [Self] = &[Self::Lead, Self::TopRope, Self::Solo];
    const FIELD: &'static str = "style";

    fn tag(self) -> &'static str {
        self.as_str()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Lead => &["l", "lead"],
            Self::TopRope => &["t", "tr", "top rope"],
            Self::Solo => &["s", "solo"],
        }
    }
}

impl fmt::Display for AttemptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttemptStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alias(s)
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

/// Outcome of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Fell,
    Flash,
    Hung,
    Onsight,
    Redpoint,
    Send,
}

impl Performance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fell => "FELL",
            Self::Flash => "FLASH",
            Self::Hung => "HUNG",
            Self::Onsight => "ONSIGHT",
            Self::Redpoint => "REDPOINT",
            Self::Send => "SEND",
        }
    }
}

impl Tagged for Performance {
    const ALL: &'static [Self] = &[
        Self::Fell,
        Self::Flash,
        Self::Hung,
        Self::Onsight,
        Self::Redpoint,
        Self::Send,
    ];
    const FIELD: &'static str = "performance";

    fn tag(self) -> &'static str {
        self.as_str()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Fell => &["fe", "fell"],
            Self::Flash => &["fl", "flash"],
            Self::Hung => &["h", "hung"],
            Self::Onsight => &["o", "onsight"],
            Self::Redpoint => &["r", "redpoint"],
            Self::Send => &["s", "send"],
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Performance {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alias(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_tags_roundtrip<T: Tagged + PartialEq + fmt::Debug>() {
        for variant in T::ALL {
            let tag = variant.tag();
            assert!(tag.len() <= TAG_MAX_BYTES, "{tag} does not fit a tag slot");
            assert_eq!(T::from_tag(tag), Some(*variant));
        }
    }

    fn assert_aliases_unambiguous<T: Tagged + PartialEq + fmt::Debug>() {
        for variant in T::ALL {
            for alias in variant.aliases() {
                assert_eq!(T::from_alias(alias), Some(*variant), "alias {alias}");
            }
        }
    }

    #[test]
    fn tags_roundtrip_and_fit_slot() {
        assert_tags_roundtrip::<ClimbType>();
        assert_tags_roundtrip::<AttemptStyle>();
        assert_tags_roundtrip::<Performance>();
    }

    #[test]
    fn aliases_resolve_to_their_own_variant() {
        assert_aliases_unambiguous::<ClimbType>();
        assert_aliases_unambiguous::<AttemptStyle>();
        assert_aliases_unambiguous::<Performance>();
    }

    #[rstest]
    #[case("b", ClimbType::Boulder)]
    #[case("BOULDER", ClimbType::Boulder)]
    #[case("Sport", ClimbType::Sport)]
    #[case("tr", ClimbType::TopRope)]
    #[case("Top Rope", ClimbType::TopRope)]
    #[case("  t  ", ClimbType::Trad)]
    fn climb_type_parses_aliases(#[case] input: &str, #[case] expected: ClimbType) {
        assert_eq!(input.parse::<ClimbType>(), Ok(expected));
    }

    #[rstest]
    #[case("l", AttemptStyle::Lead)]
    #[case("t", AttemptStyle::TopRope)]
    #[case("TR", AttemptStyle::TopRope)]
    #[case("solo", AttemptStyle::Solo)]
    fn style_parses_aliases(#[case] input: &str, #[case] expected: AttemptStyle) {
        assert_eq!(input.parse::<AttemptStyle>(), Ok(expected));
    }

    #[rstest]
    #[case("fe", Performance::Fell)]
    #[case("FL", Performance::Flash)]
    #[case("hung", Performance::Hung)]
    #[case("o", Performance::Onsight)]
    #[case("redpoint", Performance::Redpoint)]
    #[case("s", Performance::Send)]
    fn performance_parses_aliases(#[case] input: &str, #[case] expected: Performance) {
        assert_eq!(input.parse::<Performance>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("bouldering")]
    #[case("x")]
    fn unknown_input_is_a_validation_error(#[case] input: &str) {
        let err = input.parse::<ClimbType>().unwrap_err();
        assert!(err.is_validation());
        assert!(input.parse::<Performance>().is_err());
    }

    #[test]
    fn from_tag_is_case_sensitive() {
        assert_eq!(ClimbType::from_tag("boulder"), None);
        assert_eq!(AttemptStyle::from_tag("TOP ROPE"), None);
        assert_eq!(Performance::from_tag("SENT"), None);
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(ClimbType::TopRope.to_string(), "TOP ROPE");
        assert_eq!(AttemptStyle::TopRope.to_string(), "TR");
        assert_eq!(Performance::Redpoint.to_string(), "REDPOINT");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ClimbType::TopRope).unwrap();
        assert_eq!(json, "\"top_rope\"");
        let recovered: Performance = serde_json::from_str("\"onsight\"").unwrap();
        assert_eq!(recovered, Performance::Onsight);
    }
}
