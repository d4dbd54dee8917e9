// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CpuidFeatureSetNotSupported;
use crate::{CpuidFeature, FeatureRelation, Supports, FEATURES};

/// Number of `u64` words backing the bit set.
const WORDS: usize = (CpuidFeature::COUNT + 63) / 64;

/// A fixed-capacity set of [`CpuidFeature`]s backed by a bit set.
///
/// Instruction metadata uses this to describe the features an instruction
/// requires, and feature detection uses it to describe the features an
/// environment offers.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuidFeatureSet {
    bits: [u64; WORDS],
}

/// Word index and mask of `feature` within the bit set.
const fn locate(feature: CpuidFeature) -> (usize, u64) {
    let bit = feature as usize;
    (bit / 64, 1 << (bit % 64))
}

impl CpuidFeatureSet {
    /// Returns an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Inserts `feature`, returning `true` if it was not already present.
    pub fn insert(&mut self, feature: CpuidFeature) -> bool {
        let (word, mask) = locate(feature);
        let absent = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        absent
    }

    /// Removes `feature`, returning `true` if it was present.
    pub fn remove(&mut self, feature: CpuidFeature) -> bool {
        let (word, mask) = locate(feature);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    /// Returns `true` if `feature` is present.
    #[must_use]
    pub fn contains(&self, feature: CpuidFeature) -> bool {
        let (word, mask) = locate(feature);
        self.bits[word] & mask != 0
    }

    /// Returns the number of features present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Returns `true` if no feature is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|word| *word == 0)
    }

    /// Returns an iterator over the present features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = CpuidFeature> + '_ {
        FEATURES
            .iter()
            .map(|info| info.feature)
            .filter(move |feature| self.contains(*feature))
    }

    /// Compares the features of `self` to `other` returning `Ordering::Greater`
    /// when `self` is a strict superset, `Ordering::Less` when a strict subset
    /// and `None` when the sets are incomparable.
    #[must_use]
    pub fn cmp_flags(&self, other: &Self) -> Option<Ordering> {
        let mut superset = true;
        let mut subset = true;
        for (a, b) in self.bits.iter().zip(other.bits.iter()) {
            superset &= (a | b) == *a;
            subset &= (a | b) == *b;
        }
        match (superset, subset) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => None,
        }
    }

    /// Returns the [`FeatureRelation`] between `self` and `other`, or `None`
    /// when the sets are incomparable.
    #[must_use]
    pub fn relation(&self, other: &Self) -> Option<FeatureRelation> {
        self.cmp_flags(other).map(FeatureRelation::from)
    }
}

impl Supports for CpuidFeatureSet {
    type Error = CpuidFeatureSetNotSupported;
    /// Compare support of `self` to support of `other`.
    ///
    /// For checking if an environment offering the features `self` can run an
    /// instruction requiring the features `other`.
    fn supports(&self, other: &Self) -> Result<(), Self::Error> {
        match other.iter().find(|feature| !self.contains(*feature)) {
            Some(missing) => Err(CpuidFeatureSetNotSupported(missing)),
            None => Ok(()),
        }
    }
}

impl FromIterator<CpuidFeature> for CpuidFeatureSet {
    fn from_iter<T: IntoIterator<Item = CpuidFeature>>(iter: T) -> Self {
        let mut set = Self::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl Extend<CpuidFeature> for CpuidFeatureSet {
    fn extend<T: IntoIterator<Item = CpuidFeature>>(&mut self, iter: T) {
        for feature in iter {
            self.insert(feature);
        }
    }
}

impl fmt::Debug for CpuidFeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(CpuidFeature::name))
            .finish()
    }
}

impl Serialize for CpuidFeatureSet {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut seq = ser.serialize_seq(Some(self.len()))?;
        for feature in self.iter() {
            seq.serialize_element(&feature)?;
        }
        seq.end()
    }
}

impl<'a> Deserialize<'a> for CpuidFeatureSet {
    fn deserialize<D: Deserializer<'a>>(des: D) -> Result<Self, D::Error> {
        struct SetVisitor;
        impl<'a> Visitor<'a> for SetVisitor {
            type Value = CpuidFeatureSet;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sequence of CPUID feature names")
            }
            fn visit_seq<A: SeqAccess<'a>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = CpuidFeatureSet::new();
                while let Some(feature) = seq.next_element::<CpuidFeature>()? {
                    set.insert(feature);
                }
                Ok(set)
            }
        }
        des.deserialize_seq(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = CpuidFeatureSet::new();
        assert!(set.is_empty());
        assert!(set.insert(CpuidFeature::AVX2));
        assert!(!set.insert(CpuidFeature::AVX2));
        assert!(set.contains(CpuidFeature::AVX2));
        assert!(!set.contains(CpuidFeature::BMI1));
        assert_eq!(set.len(), 1);
        assert!(set.remove(CpuidFeature::AVX2));
        assert!(!set.remove(CpuidFeature::AVX2));
        assert!(set.is_empty());
    }

    #[test]
    fn iter_declaration_order() {
        let set = [
            CpuidFeature::SSE2,
            CpuidFeature::AVX,
            CpuidFeature::INTEL8086,
        ]
        .iter()
        .copied()
        .collect::<CpuidFeatureSet>();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![
                CpuidFeature::INTEL8086,
                CpuidFeature::AVX,
                CpuidFeature::SSE2
            ]
        );
    }

    #[test]
    fn relations() {
        let wide = [CpuidFeature::AVX, CpuidFeature::AVX2, CpuidFeature::FMA]
            .iter()
            .copied()
            .collect::<CpuidFeatureSet>();
        let narrow = [CpuidFeature::AVX, CpuidFeature::AVX2]
            .iter()
            .copied()
            .collect::<CpuidFeatureSet>();
        let disjoint = [CpuidFeature::SSE, CpuidFeature::AVX2]
            .iter()
            .copied()
            .collect::<CpuidFeatureSet>();

        assert_eq!(wide.cmp_flags(&narrow), Some(Ordering::Greater));
        assert_eq!(narrow.cmp_flags(&wide), Some(Ordering::Less));
        assert_eq!(wide.cmp_flags(&wide), Some(Ordering::Equal));
        assert_eq!(wide.cmp_flags(&disjoint), None);

        assert_eq!(wide.relation(&narrow), Some(FeatureRelation::Superset));
        assert_eq!(narrow.relation(&wide), Some(FeatureRelation::Subset));
        assert_eq!(narrow.relation(&narrow), Some(FeatureRelation::Equal));
        assert_eq!(narrow.relation(&disjoint), None);
    }

    #[test]
    fn supports() {
        let host = [
            CpuidFeature::AVX,
            CpuidFeature::AVX2,
            CpuidFeature::BMI1,
            CpuidFeature::BMI2,
        ]
        .iter()
        .copied()
        .collect::<CpuidFeatureSet>();
        let required = [CpuidFeature::AVX2, CpuidFeature::BMI2]
            .iter()
            .copied()
            .collect::<CpuidFeatureSet>();
        assert_eq!(host.supports(&required), Ok(()));
        // The missing feature reported is the first in declaration order.
        let wanting = [
            CpuidFeature::AVX512F,
            CpuidFeature::AVX512DQ,
            CpuidFeature::AVX2,
        ]
        .iter()
        .copied()
        .collect::<CpuidFeatureSet>();
        assert_eq!(
            host.supports(&wanting),
            Err(CpuidFeatureSetNotSupported(CpuidFeature::AVX512DQ))
        );
    }

    #[test]
    fn serde_roundtrip() {
        let set = [CpuidFeature::AVX, CpuidFeature::XSAVE]
            .iter()
            .copied()
            .collect::<CpuidFeatureSet>();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"AVX\",\"XSAVE\"]");
        assert_eq!(serde_json::from_str::<CpuidFeatureSet>(&json).unwrap(), set);
    }

    #[test]
    fn debug_prints_names() {
        let mut set = CpuidFeatureSet::new();
        set.extend([CpuidFeature::MMX].iter().copied());
        assert_eq!(format!("{:?}", set), "{\"MMX\"}");
    }
}
