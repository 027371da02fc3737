// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for the TypeId registry and namespace classifier
//!
//! Both must be total over arbitrary i32 input: no panic, no
//! misclassification, free function and enum predicate always in agreement.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xwire_types::{is_namespaced_type, TypeId};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let value = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    // Classifier is total and deterministic
    let namespaced = is_namespaced_type(value);
    assert_eq!(namespaced, is_namespaced_type(value));

    match TypeId::from_i32(value) {
        Some(id) => {
            // Round-trip and predicate agreement for defined tags
            assert_eq!(id.to_i32(), value);
            assert_eq!(id.is_namespaced(), namespaced);
            assert_eq!(TypeId::try_from(value), Ok(id));
        }
        None => {
            // Unknown ids classify as not namespaced and fail TryFrom
            assert!(!namespaced);
            assert!(TypeId::try_from(value).is_err());
        }
    }
});
