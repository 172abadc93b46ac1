//! Grade tables for bouldering (V-scale) and roped climbing (YDS).
//!
//! Grades are stored by their position in the table, so the order here is
//! part of the on-disk format. Tables run from easiest to hardest and must
//! only ever be extended at the end.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::ClimbType;

/// V-scale labels, easiest first.
pub const V_SCALE: &[&str] = &[
    "VB", //
    "V0-", "V0", "V0+", //
    "V1-", "V1", "V1+", //
    "V2-", "V2", "V2+", //
    "V3-", "V3", "V3+", //
    "V4-", "V4", "V4+", //
    "V5-", "V5", "V5+", //
    "V6-", "V6", "V6+", //
    "V7-", "V7", "V7+", //
    "V8-", "V8", "V8+", //
    "V9-", "V9", "V9+", //
    "V10-", "V10", "V10+", //
    "V11-", "V11", "V11+", //
    "V12-", "V12", "V12+", //
    "V13-", "V13", "V13+", //
    "V14-", "V14", "V14+", //
    "V15-", "V15", "V15+", //
    "V16-", "V16", "V16+", //
    "V17-", "V17", "V17+",
];

/// Yosemite Decimal System labels, easiest first.
pub const YDS: &[&str] = &[
    "5.4", //
    "5.5", //
    "5.6", //
    "5.7-", "5.7", "5.7+", //
    "5.8-", "5.8", "5.8+", //
    "5.9-", "5.9", "5.9+", //
    "5.10-", "5.10a", "5.10b", "5.10c", "5.10d", "5.10+", //
    "5.11-", "5.11a", "5.11b", "5.11c", "5.11d", "5.11+", //
    "5.12-", "5.12a", "5.12b", "5.12c", "5.12d", "5.12+", //
    "5.13-", "5.13a", "5.13b", "5.13c", "5.13d", "5.13+", //
    "5.14-", "5.14a", "5.14b", "5.14c", "5.14d", "5.14+", //
    "5.15-", "5.15a", "5.15b", "5.15c", "5.15d", "5.15+",
];

/// Which grade table a climb's grade index points into.
///
/// Never stored: always derived from the climb type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeScale {
    VScale,
    Yds,
}

impl GradeScale {
    /// Boulders use the V-scale; every roped type uses YDS.
    #[must_use]
    pub const fn for_type(climb_type: ClimbType) -> Self {
        match climb_type {
            ClimbType::Boulder => Self::VScale,
            ClimbType::Sport | ClimbType::TopRope | ClimbType::Trad => Self::Yds,
        }
    }

    /// The ordered label table for this scale.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::VScale => V_SCALE,
            Self::Yds => YDS,
        }
    }

    /// Position of `label` in the table. Exact, case-sensitive match.
    #[must_use]
    pub fn lookup(self, label: &str) -> Option<usize> {
        self.labels().iter().position(|candidate| *candidate == label)
    }

    /// Label at `index`, or `None` past the end of the table.
    #[must_use]
    pub fn label(self, index: usize) -> Option<&'static str> {
        self.labels().get(index).copied()
    }

    /// Whether `index` addresses a label in this table.
    #[must_use]
    pub const fn contains_index(self, index: usize) -> bool {
        index < self.labels().len()
    }

    /// Short hint describing accepted labels, used in prompts.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::VScale => "V[B-17][-/+]",
            Self::Yds => "5.[4-15][a-d][-/+]",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VScale => "v_scale",
            Self::Yds => "yds",
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_label_roundtrips_through_its_index() {
        for scale in [GradeScale::VScale, GradeScale::Yds] {
            for label in scale.labels() {
                let index = scale.lookup(label).expect("label should be in its table");
                assert_eq!(scale.label(index), Some(*label));
            }
        }
    }

    #[test]
    fn tables_have_no_duplicate_labels() {
        for scale in [GradeScale::VScale, GradeScale::Yds] {
            let labels = scale.labels();
            for (i, label) in labels.iter().enumerate() {
                assert_eq!(scale.lookup(label), Some(i), "{label} appears twice");
            }
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(V_SCALE.len(), 55);
        assert_eq!(YDS.len(), 48);
    }

    #[rstest]
    #[case(GradeScale::VScale, "v8")]
    #[case(GradeScale::VScale, "V18")]
    #[case(GradeScale::VScale, "5.10a")]
    #[case(GradeScale::VScale, "")]
    #[case(GradeScale::Yds, "5.10A")]
    #[case(GradeScale::Yds, "5.16")]
    #[case(GradeScale::Yds, "V3")]
    #[case(GradeScale::Yds, " 5.9")]
    fn lookup_rejects_labels_outside_the_table(#[case] scale: GradeScale, #[case] label: &str) {
        assert_eq!(scale.lookup(label), None);
    }

    #[test]
    fn order_runs_easiest_to_hardest() {
        let v = GradeScale::VScale;
        assert_eq!(v.lookup("VB"), Some(0));
        assert!(v.lookup("V3-") < v.lookup("V3"));
        assert!(v.lookup("V3") < v.lookup("V3+"));
        assert_eq!(v.lookup("V8"), Some(26));

        let yds = GradeScale::Yds;
        assert_eq!(yds.lookup("5.4"), Some(0));
        assert!(yds.lookup("5.10a") < yds.lookup("5.10d"));
        assert_eq!(yds.label(yds.labels().len() - 1), Some("5.15+"));
    }

    #[test]
    fn label_past_the_end_is_none() {
        assert_eq!(GradeScale::VScale.label(V_SCALE.len()), None);
        assert!(!GradeScale::Yds.contains_index(YDS.len()));
        assert!(GradeScale::Yds.contains_index(YDS.len() - 1));
    }

    #[rstest]
    #[case(ClimbType::Boulder, GradeScale::VScale)]
    #[case(ClimbType::Sport, GradeScale::Yds)]
    #[case(ClimbType::TopRope, GradeScale::Yds)]
    #[case(ClimbType::Trad, GradeScale::Yds)]
    fn scale_follows_climb_type(#[case] climb_type: ClimbType, #[case] expected: GradeScale) {
        assert_eq!(GradeScale::for_type(climb_type), expected);
    }
}
