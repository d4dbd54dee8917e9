// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Path of the declarative feature list this build script expands.
const DATA_PATH: &str = "./data/cpuid_features.json";

/// License to write into auto-generated `features.rs`.
const LICENSE: &str = "// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights \
                       Reserved.\n// SPDX-License-Identifier: Apache-2.0\n\n";

/// One record of the declarative feature list.
#[derive(serde::Deserialize)]
struct FeatureRecord {
    /// Symbolic name, e.g. `AVX2`. Used verbatim as the enum variant identifier
    /// and as the string form on the wire.
    name: String,
    /// Description of the CPUID bit that activates the feature.
    docs: String,
}

fn main() {
    // Re-build if the feature list changed.
    println!("cargo:rerun-if-changed={}", DATA_PATH);

    // Deserialize the json feature list.
    let string = std::fs::read_to_string(DATA_PATH).unwrap();
    let records = serde_json::from_str::<Vec<FeatureRecord>>(&string).unwrap();
    let count = records.len();

    let variants = records
        .iter()
        .map(|record| {
            let ident = format_ident!("{}", record.name);
            let docs = &record.docs;
            quote! {
                #[doc = #docs]
                #ident,
            }
        })
        .collect::<TokenStream>();

    let entries = records
        .iter()
        .map(|record| {
            let ident = format_ident!("{}", record.name);
            let name = &record.name;
            let docs = &record.docs;
            quote! {
                CpuidFeatureInfo {
                    feature: CpuidFeature::#ident,
                    name: #name,
                    docs: #docs,
                },
            }
        })
        .collect::<TokenStream>();

    let map_entries = records
        .iter()
        .map(|record| {
            let ident = format_ident!("{}", record.name);
            let name = &record.name;
            quote! {
                #name => CpuidFeature::#ident,
            }
        })
        .collect::<TokenStream>();

    let generated = quote! {
        //! Auto-generated from `data/cpuid_features.json` by `build.rs`. Do not edit.

        use crate::CpuidFeatureInfo;

        /// `CPUID` feature flags.
        ///
        /// Discriminants are assigned by declaration order and are stable: the
        /// feature list is append-only, so a raw value persisted by a consumer
        /// keeps naming the same feature across releases.
        #[allow(non_camel_case_types)]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(u16)]
        pub enum CpuidFeature {
            #variants
        }

        impl CpuidFeature {
            /// The number of declared features.
            pub const COUNT: usize = #count;
        }

        /// Metadata for every declared feature, in declaration order.
        ///
        /// `FEATURES[feature as usize]` is the entry for `feature`.
        pub static FEATURES: [CpuidFeatureInfo; #count] = [
            #entries
        ];

        /// Feature name to feature map.
        pub(crate) static BY_NAME: phf::Map<&'static str, CpuidFeature> = phf::phf_map! {
            #map_entries
        };
    };

    // Create `features.rs` file under `src/`.
    let mut features_file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("./src/features.rs")
        .unwrap();
    features_file.write_all(LICENSE.as_bytes()).unwrap();
    features_file
        .write_all(generated.to_string().as_bytes())
        .unwrap();

    // Format features.rs
    std::process::Command::new("cargo")
        .arg("fmt")
        .output()
        .unwrap();
}
