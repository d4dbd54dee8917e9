// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
#![warn(clippy::pedantic)]
#![allow(
    clippy::unreadable_literal,
    clippy::doc_markdown,
    clippy::similar_names
)]
#![warn(missing_docs)]
#![warn(clippy::ptr_as_ptr)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::cast_lossless)]
//! Metadata table of the `CPUID` feature flags referenced by instruction-set
//! metadata tooling.
//!
//! The table is fixed at compile time: `build.rs` expands the declarative list
//! in `data/cpuid_features.json` into the [`CpuidFeature`] enum, the
//! [`FEATURES`] metadata table and the name lookup map, so the enumeration and
//! its metadata cannot drift apart.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

pub use errors::{CpuidFeatureSetNotSupported, UnknownCpuidFeatureName, UnknownCpuidFeatureValue};
pub use features::{CpuidFeature, FEATURES};
pub use set::CpuidFeatureSet;

/// Errors associated with feature lookup and feature set comparison.
pub mod errors;
/// Auto-generated feature enum and metadata table.
mod features;
/// Fixed-capacity set of CPUID features.
pub mod set;

/// Metadata describing one declared CPUID feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CpuidFeatureInfo {
    /// The feature itself. Its discriminant is the entry's stable numeric
    /// value.
    pub feature: CpuidFeature,
    /// Symbolic name, spelled exactly as in external interfaces (e.g.
    /// `"AVX512_VBMI2"`).
    pub name: &'static str,
    /// Description of the CPUID leaf/register/bit that activates the feature,
    /// or of the combination of other features implying it.
    pub docs: &'static str,
}

impl CpuidFeatureInfo {
    /// Returns the stable numeric value of this entry.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.feature as u16
    }
}

impl CpuidFeature {
    /// Returns an iterator over all declared features in declaration order.
    pub fn values() -> impl Iterator<Item = CpuidFeature> {
        FEATURES.iter().map(|info| info.feature)
    }

    /// Returns the metadata entry for `self`.
    #[must_use]
    pub fn info(self) -> &'static CpuidFeatureInfo {
        &FEATURES[usize::from(self as u16)]
    }

    /// Returns the symbolic name of `self` (e.g. `"AVX2"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the documentation text of `self`.
    #[must_use]
    pub fn docs(self) -> &'static str {
        self.info().docs
    }
}

impl fmt::Display for CpuidFeature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for CpuidFeature {
    type Error = UnknownCpuidFeatureValue;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        FEATURES
            .get(usize::from(value))
            .map(|info| info.feature)
            .ok_or(UnknownCpuidFeatureValue(value))
    }
}

impl FromStr for CpuidFeature {
    type Err = UnknownCpuidFeatureName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        features::BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| UnknownCpuidFeatureName(s.to_string()))
    }
}

/// Trait defining if a group of features supports another.
pub trait Supports {
    /// Error type.
    type Error;
    /// Returns `Ok(())` if `self` supports `other` or `Err(reason)` if it does
    /// not.
    ///
    /// # Errors
    ///
    /// When `self` does not support `other`.
    fn supports(&self, other: &Self) -> Result<(), Self::Error>;
}

/// Describes the feature support between 2 sets.
#[derive(Debug, PartialEq, Eq)]
pub enum FeatureRelation {
    /// Feature support is a superset.
    Superset,
    /// Feature support is equal.
    Equal,
    /// Feature support is a subset.
    Subset,
}

impl From<Ordering> for FeatureRelation {
    fn from(cmp: Ordering) -> Self {
        match cmp {
            Ordering::Less => FeatureRelation::Subset,
            Ordering::Equal => FeatureRelation::Equal,
            Ordering::Greater => FeatureRelation::Superset,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::convert::TryFrom;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn count() {
        assert_eq!(CpuidFeature::COUNT, 133);
        assert_eq!(FEATURES.len(), CpuidFeature::COUNT);
        assert_eq!(CpuidFeature::values().count(), CpuidFeature::COUNT);
    }

    #[test]
    fn values_match_declaration_order() {
        for (i, info) in FEATURES.iter().enumerate() {
            assert_eq!(usize::from(info.value()), i);
        }
    }

    #[test]
    fn names_unique() {
        let names = FEATURES
            .iter()
            .map(|info| info.name)
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), CpuidFeature::COUNT);
    }

    #[test]
    fn docs_non_empty() {
        for info in &FEATURES {
            assert!(!info.docs.is_empty(), "{} has empty docs", info.name);
        }
    }

    #[test]
    fn value_roundtrip() {
        for info in &FEATURES {
            let feature = CpuidFeature::try_from(info.value()).unwrap();
            assert_eq!(feature, info.feature);
            assert_eq!(feature.name(), info.name);
        }
    }

    #[test]
    fn name_roundtrip() {
        for info in &FEATURES {
            let feature = CpuidFeature::from_str(info.name).unwrap();
            assert_eq!(feature, info.feature);
            assert_eq!(feature.info().value(), info.value());
        }
    }

    #[test]
    fn unknown_value() {
        #[allow(clippy::cast_possible_truncation)]
        let out_of_range = CpuidFeature::COUNT as u16;
        assert_eq!(
            CpuidFeature::try_from(out_of_range),
            Err(UnknownCpuidFeatureValue(out_of_range))
        );
        assert_eq!(
            CpuidFeature::try_from(u16::MAX),
            Err(UnknownCpuidFeatureValue(u16::MAX))
        );
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            CpuidFeature::from_str("AVX1024"),
            Err(UnknownCpuidFeatureName(String::from("AVX1024")))
        );
        // Lookup is case sensitive.
        assert_eq!(
            CpuidFeature::from_str("avx2"),
            Err(UnknownCpuidFeatureName(String::from("avx2")))
        );
    }

    #[test]
    fn display() {
        assert_eq!(CpuidFeature::SSE4_2.to_string(), "SSE4_2");
        assert_eq!(CpuidFeature::HLE_or_RTM.to_string(), "HLE_or_RTM");
    }

    #[test]
    fn docs_accessor() {
        assert_eq!(CpuidFeature::INTEL8086.docs(), "8086 or later");
        assert_eq!(
            CpuidFeature::AVX2.docs(),
            "CPUID.(EAX=07H, ECX=0H):EBX.AVX2[bit 5]"
        );
        assert_eq!(CpuidFeature::HLE_or_RTM.docs(), "`HLE` or `RTM`");
    }

    #[test]
    fn serde_json_by_name() {
        assert_eq!(
            serde_json::to_string(&CpuidFeature::AVX512_VBMI2).unwrap(),
            "\"AVX512_VBMI2\""
        );
        assert_eq!(
            serde_json::from_str::<CpuidFeature>("\"BMI1\"").unwrap(),
            CpuidFeature::BMI1
        );
    }

    #[test]
    fn bincode_roundtrip() {
        let bytes = bincode::serialize(&CpuidFeature::RDSEED).unwrap();
        assert_eq!(
            bincode::deserialize::<CpuidFeature>(&bytes).unwrap(),
            CpuidFeature::RDSEED
        );
    }
}
