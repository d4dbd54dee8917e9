// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::CpuidFeature;

/// Error type for [`<CpuidFeature as std::convert::TryFrom<u16>>::try_from`].
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error(
    "Unknown CPUID feature value: {value} (valid values are 0..{count}).",
    value = .0,
    count = CpuidFeature::COUNT
)]
pub struct UnknownCpuidFeatureValue(pub u16);

/// Error type for [`<CpuidFeature as std::str::FromStr>::from_str`].
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Unknown CPUID feature name: \"{0}\".")]
pub struct UnknownCpuidFeatureName(pub String);

/// Error type for [`<CpuidFeatureSet as Supports>::supports`].
///
/// Carries the first feature, in declaration order, required by the compared
/// set but absent from this one.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Missing CPUID feature: {0}.")]
pub struct CpuidFeatureSetNotSupported(pub CpuidFeature);
