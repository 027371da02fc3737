// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # xwire-types - Wire type identifiers for the xwire format
//!
//! Foundational crate of the xwire cross-language binary serialization
//! format: the closed registry of wire-level type tags, plus the predicate
//! deciding which tags carry a namespace/name pair in their wire header.
//!
//! Every encoder, decoder, and schema tool in every target language must
//! reproduce these integers bit-for-bit; a mismatch silently corrupts
//! cross-language data exchange. The values are therefore append-only:
//! published integers are never reassigned or removed.
//!
//! ## Quick Start
//!
//! ```rust
//! use xwire_types::{is_namespaced_type, TypeId};
//!
//! // Symbolic tag -> wire integer (what an encoder writes)
//! assert_eq!(TypeId::STRING.to_i32(), 12);
//!
//! // Wire integer -> symbolic tag (what a decoder dispatches on)
//! assert_eq!(TypeId::from_i32(29), Some(TypeId::MAP));
//!
//! // Does this tag's wire header carry a namespace string?
//! assert!(is_namespaced_type(TypeId::NS_STRUCT.to_i32()));
//! assert!(!is_namespaced_type(TypeId::STRUCT.to_i32()));
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeId`] | Closed `#[repr(i32)]` enum of wire type tags, explicit discriminants |
//! | [`is_namespaced_type`] | Total classifier: does the header carry a namespace field? |
//! | [`UnknownTypeId`] | Lookup miss, surfaced by `TypeId::try_from` for decoders |
//!
//! ## What lives elsewhere
//!
//! The byte-level encoder/decoder, the registry mapping application types
//! to tags, and the runtime object model consume this crate through the
//! integer contract above; none of them live here. This crate performs no
//! I/O, holds no state, and is safe for unsynchronized concurrent use.

mod error;
mod type_id;

pub use error::UnknownTypeId;
pub use type_id::{is_namespaced_type, TypeId};
