// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire type identifiers for the xwire serialization format
//!
//! Every encoder and decoder, in every target language, must agree on these
//! integers bit-for-bit: they are the type discriminants written into
//! serialized streams and schema descriptors.

use std::convert::TryFrom;
use std::fmt;

use crate::error::UnknownTypeId;

/// TypeId identifies the wire representation of a serialized value
///
/// Values are part of the wire contract and are fixed forever. The set is
/// append-only across format versions: a new tag gets a new integer, and no
/// integer is ever reassigned or removed. Discriminants are always written
/// explicitly, never derived from variant order.
///
/// TypeId values are used to:
/// - Tag values in the serialized stream and in schema descriptors
/// - Dispatch decoders on the concrete wire representation
/// - Decide whether a struct/enum/ext header carries a namespace field
///   (see [`is_namespaced_type`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[allow(non_camel_case_types)]
pub enum TypeId {
    // --- Scalar primitives (1-11) ---
    /// Boolean (1 byte)
    BOOL = 1,

    /// Signed 8-bit integer
    INT8 = 2,

    /// Signed 16-bit integer
    INT16 = 3,

    /// Signed 32-bit integer, fixed width
    INT32 = 4,

    /// Signed 32-bit integer, variable-length encoding
    VAR_INT32 = 5,

    /// Signed 64-bit integer, fixed width
    INT64 = 6,

    /// Signed 64-bit integer, variable-length encoding
    VAR_INT64 = 7,

    /// Signed 64-bit integer, "small long" encoding: values that fit are
    /// written compactly, the rest fall back to the full width
    SLI_INT64 = 8,

    /// 16-bit IEEE floating point (half precision)
    FLOAT16 = 9,

    /// 32-bit IEEE floating point
    FLOAT32 = 10,

    /// 64-bit IEEE floating point
    FLOAT64 = 11,

    // --- Text ---
    /// UTF-8 character string
    STRING = 12,

    // --- Named/structured types ---
    //
    // Struct and enum tags come in {plain, polymorphic, compatible,
    // polymorphic+compatible} x {unnamespaced, namespaced} forms.
    // "Compatible" tolerates added/removed fields between writer and reader
    // schema versions; "polymorphic" means the concrete runtime type may
    // differ from the declared one and is resolved during decode. The NS_*
    // forms additionally carry a namespace string in their wire header.
    /// Enumeration, name only
    ENUM = 13,

    /// Enumeration, namespace + name
    NS_ENUM = 14,

    /// Struct, final schema
    STRUCT = 15,

    /// Struct, dynamically resolved concrete type
    POLYMORPHIC_STRUCT = 16,

    /// Struct, schema-evolution tolerant encoding
    COMPATIBLE_STRUCT = 17,

    /// Struct, polymorphic and schema-evolution tolerant
    POLYMORPHIC_COMPATIBLE_STRUCT = 18,

    /// Namespaced form of [`TypeId::STRUCT`]
    NS_STRUCT = 19,

    /// Namespaced form of [`TypeId::POLYMORPHIC_STRUCT`]
    NS_POLYMORPHIC_STRUCT = 20,

    /// Namespaced form of [`TypeId::COMPATIBLE_STRUCT`]
    NS_COMPATIBLE_STRUCT = 21,

    /// Namespaced form of [`TypeId::POLYMORPHIC_COMPATIBLE_STRUCT`]
    NS_POLYMORPHIC_COMPATIBLE_STRUCT = 22,

    // --- Extension types ---
    /// User-defined opaque extension type
    EXT = 23,

    /// Extension type, dynamically resolved concrete type
    POLYMORPHIC_EXT = 24,

    /// Namespaced form of [`TypeId::EXT`]
    NS_EXT = 25,

    /// Namespaced form of [`TypeId::POLYMORPHIC_EXT`]
    NS_POLYMORPHIC_EXT = 26,

    // --- Containers (element types described out-of-band) ---
    /// Ordered homogeneous collection
    LIST = 27,

    /// Unordered unique-element collection
    SET = 28,

    /// Key-value collection
    MAP = 29,

    // --- Temporal types ---
    /// Elapsed time span
    DURATION = 30,

    /// Point on the absolute time line
    TIMESTAMP = 31,

    /// Calendar date without time zone
    LOCAL_DATE = 32,

    // --- Exact-precision numeric ---
    /// Arbitrary-precision decimal
    DECIMAL = 33,

    // --- Binary ---
    /// Raw byte blob
    BINARY = 34,

    // --- Fixed-width arrays (dense homogeneous buffers) ---
    /// Generic array, element type described out-of-band
    ARRAY = 35,

    /// Dense boolean buffer
    BOOL_ARRAY = 36,

    /// Dense int8 buffer
    INT8_ARRAY = 37,

    /// Dense int16 buffer
    INT16_ARRAY = 38,

    /// Dense int32 buffer
    INT32_ARRAY = 39,

    /// Dense int64 buffer
    INT64_ARRAY = 40,

    /// Dense float16 buffer
    FLOAT16_ARRAY = 41,

    /// Dense float32 buffer
    FLOAT32_ARRAY = 42,

    /// Dense float64 buffer
    FLOAT64_ARRAY = 43,

    // --- Columnar interop (externally-defined representations) ---
    /// Arrow record batch, opaque to this crate
    ARROW_RECORD_BATCH = 44,

    /// Arrow table, opaque to this crate
    ARROW_TABLE = 45,
}

impl TypeId {
    /// Returns true if this is a scalar primitive type
    ///
    /// Covers the fixed-width and variable-width integer encodings and the
    /// floating point widths, plus boolean
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            TypeId::BOOL
                | TypeId::INT8
                | TypeId::INT16
                | TypeId::INT32
                | TypeId::VAR_INT32
                | TypeId::INT64
                | TypeId::VAR_INT64
                | TypeId::SLI_INT64
                | TypeId::FLOAT16
                | TypeId::FLOAT32
                | TypeId::FLOAT64
        )
    }

    /// Returns true if this is a container type (list, set, map)
    ///
    /// Container element types are described out-of-band, not by a distinct
    /// tag per element type
    pub const fn is_container(self) -> bool {
        matches!(self, TypeId::LIST | TypeId::SET | TypeId::MAP)
    }

    /// Returns true if this is a fixed-width primitive array tag
    ///
    /// The generic [`TypeId::ARRAY`] tag is not included; its element type
    /// is described out-of-band
    pub const fn is_primitive_array(self) -> bool {
        matches!(
            self,
            TypeId::BOOL_ARRAY
                | TypeId::INT8_ARRAY
                | TypeId::INT16_ARRAY
                | TypeId::INT32_ARRAY
                | TypeId::INT64_ARRAY
                | TypeId::FLOAT16_ARRAY
                | TypeId::FLOAT32_ARRAY
                | TypeId::FLOAT64_ARRAY
        )
    }

    /// Returns true if this is any of the eight struct tags
    pub const fn is_struct_type(self) -> bool {
        matches!(
            self,
            TypeId::STRUCT
                | TypeId::POLYMORPHIC_STRUCT
                | TypeId::COMPATIBLE_STRUCT
                | TypeId::POLYMORPHIC_COMPATIBLE_STRUCT
                | TypeId::NS_STRUCT
                | TypeId::NS_POLYMORPHIC_STRUCT
                | TypeId::NS_COMPATIBLE_STRUCT
                | TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT
        )
    }

    /// Returns true if this is an enum tag (namespaced or not)
    pub const fn is_enum_type(self) -> bool {
        matches!(self, TypeId::ENUM | TypeId::NS_ENUM)
    }

    /// Returns true if this is an extension tag (namespaced or not)
    pub const fn is_ext_type(self) -> bool {
        matches!(
            self,
            TypeId::EXT | TypeId::POLYMORPHIC_EXT | TypeId::NS_EXT | TypeId::NS_POLYMORPHIC_EXT
        )
    }

    /// Returns true if the concrete runtime type behind this tag must be
    /// resolved dynamically during decode
    pub const fn is_polymorphic(self) -> bool {
        matches!(
            self,
            TypeId::POLYMORPHIC_STRUCT
                | TypeId::POLYMORPHIC_COMPATIBLE_STRUCT
                | TypeId::NS_POLYMORPHIC_STRUCT
                | TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT
                | TypeId::POLYMORPHIC_EXT
                | TypeId::NS_POLYMORPHIC_EXT
        )
    }

    /// Returns true if this tag's wire header carries a namespace string
    /// alongside the type name
    ///
    /// Exhaustive on purpose: a new namespaced tag family must update this
    /// match (and [`is_namespaced_type`] through it) in the same change, and
    /// a missing arm is a compile error rather than a silent
    /// misclassification.
    pub const fn is_namespaced(self) -> bool {
        match self {
            TypeId::NS_ENUM
            | TypeId::NS_STRUCT
            | TypeId::NS_POLYMORPHIC_STRUCT
            | TypeId::NS_COMPATIBLE_STRUCT
            | TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT
            | TypeId::NS_EXT
            | TypeId::NS_POLYMORPHIC_EXT => true,

            TypeId::BOOL
            | TypeId::INT8
            | TypeId::INT16
            | TypeId::INT32
            | TypeId::VAR_INT32
            | TypeId::INT64
            | TypeId::VAR_INT64
            | TypeId::SLI_INT64
            | TypeId::FLOAT16
            | TypeId::FLOAT32
            | TypeId::FLOAT64
            | TypeId::STRING
            | TypeId::ENUM
            | TypeId::STRUCT
            | TypeId::POLYMORPHIC_STRUCT
            | TypeId::COMPATIBLE_STRUCT
            | TypeId::POLYMORPHIC_COMPATIBLE_STRUCT
            | TypeId::EXT
            | TypeId::POLYMORPHIC_EXT
            | TypeId::LIST
            | TypeId::SET
            | TypeId::MAP
            | TypeId::DURATION
            | TypeId::TIMESTAMP
            | TypeId::LOCAL_DATE
            | TypeId::DECIMAL
            | TypeId::BINARY
            | TypeId::ARRAY
            | TypeId::BOOL_ARRAY
            | TypeId::INT8_ARRAY
            | TypeId::INT16_ARRAY
            | TypeId::INT32_ARRAY
            | TypeId::INT64_ARRAY
            | TypeId::FLOAT16_ARRAY
            | TypeId::FLOAT32_ARRAY
            | TypeId::FLOAT64_ARRAY
            | TypeId::ARROW_RECORD_BATCH
            | TypeId::ARROW_TABLE => false,
        }
    }

    /// Returns the encoded size in bytes for fixed-width scalars, None for
    /// variable-length encodings and everything non-scalar
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            TypeId::BOOL | TypeId::INT8 => Some(1),
            TypeId::INT16 | TypeId::FLOAT16 => Some(2),
            TypeId::INT32 | TypeId::FLOAT32 => Some(4),
            TypeId::INT64 | TypeId::FLOAT64 => Some(8),
            _ => None,
        }
    }

    /// Return the canonical wire integer for this TypeId.
    ///
    /// This avoids unchecked casts and keeps the mapping explicit.
    pub const fn to_i32(self) -> i32 {
        match self {
            TypeId::BOOL => 1,
            TypeId::INT8 => 2,
            TypeId::INT16 => 3,
            TypeId::INT32 => 4,
            TypeId::VAR_INT32 => 5,
            TypeId::INT64 => 6,
            TypeId::VAR_INT64 => 7,
            TypeId::SLI_INT64 => 8,
            TypeId::FLOAT16 => 9,
            TypeId::FLOAT32 => 10,
            TypeId::FLOAT64 => 11,
            TypeId::STRING => 12,
            TypeId::ENUM => 13,
            TypeId::NS_ENUM => 14,
            TypeId::STRUCT => 15,
            TypeId::POLYMORPHIC_STRUCT => 16,
            TypeId::COMPATIBLE_STRUCT => 17,
            TypeId::POLYMORPHIC_COMPATIBLE_STRUCT => 18,
            TypeId::NS_STRUCT => 19,
            TypeId::NS_POLYMORPHIC_STRUCT => 20,
            TypeId::NS_COMPATIBLE_STRUCT => 21,
            TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT => 22,
            TypeId::EXT => 23,
            TypeId::POLYMORPHIC_EXT => 24,
            TypeId::NS_EXT => 25,
            TypeId::NS_POLYMORPHIC_EXT => 26,
            TypeId::LIST => 27,
            TypeId::SET => 28,
            TypeId::MAP => 29,
            TypeId::DURATION => 30,
            TypeId::TIMESTAMP => 31,
            TypeId::LOCAL_DATE => 32,
            TypeId::DECIMAL => 33,
            TypeId::BINARY => 34,
            TypeId::ARRAY => 35,
            TypeId::BOOL_ARRAY => 36,
            TypeId::INT8_ARRAY => 37,
            TypeId::INT16_ARRAY => 38,
            TypeId::INT32_ARRAY => 39,
            TypeId::INT64_ARRAY => 40,
            TypeId::FLOAT16_ARRAY => 41,
            TypeId::FLOAT32_ARRAY => 42,
            TypeId::FLOAT64_ARRAY => 43,
            TypeId::ARROW_RECORD_BATCH => 44,
            TypeId::ARROW_TABLE => 45,
        }
    }

    /// Convert from a wire integer
    ///
    /// Returns None for integers with no registry entry. Decoders treat that
    /// as a message-level failure; this crate only reports the miss.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(TypeId::BOOL),
            2 => Some(TypeId::INT8),
            3 => Some(TypeId::INT16),
            4 => Some(TypeId::INT32),
            5 => Some(TypeId::VAR_INT32),
            6 => Some(TypeId::INT64),
            7 => Some(TypeId::VAR_INT64),
            8 => Some(TypeId::SLI_INT64),
            9 => Some(TypeId::FLOAT16),
            10 => Some(TypeId::FLOAT32),
            11 => Some(TypeId::FLOAT64),
            12 => Some(TypeId::STRING),
            13 => Some(TypeId::ENUM),
            14 => Some(TypeId::NS_ENUM),
            15 => Some(TypeId::STRUCT),
            16 => Some(TypeId::POLYMORPHIC_STRUCT),
            17 => Some(TypeId::COMPATIBLE_STRUCT),
            18 => Some(TypeId::POLYMORPHIC_COMPATIBLE_STRUCT),
            19 => Some(TypeId::NS_STRUCT),
            20 => Some(TypeId::NS_POLYMORPHIC_STRUCT),
            21 => Some(TypeId::NS_COMPATIBLE_STRUCT),
            22 => Some(TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT),
            23 => Some(TypeId::EXT),
            24 => Some(TypeId::POLYMORPHIC_EXT),
            25 => Some(TypeId::NS_EXT),
            26 => Some(TypeId::NS_POLYMORPHIC_EXT),
            27 => Some(TypeId::LIST),
            28 => Some(TypeId::SET),
            29 => Some(TypeId::MAP),
            30 => Some(TypeId::DURATION),
            31 => Some(TypeId::TIMESTAMP),
            32 => Some(TypeId::LOCAL_DATE),
            33 => Some(TypeId::DECIMAL),
            34 => Some(TypeId::BINARY),
            35 => Some(TypeId::ARRAY),
            36 => Some(TypeId::BOOL_ARRAY),
            37 => Some(TypeId::INT8_ARRAY),
            38 => Some(TypeId::INT16_ARRAY),
            39 => Some(TypeId::INT32_ARRAY),
            40 => Some(TypeId::INT64_ARRAY),
            41 => Some(TypeId::FLOAT16_ARRAY),
            42 => Some(TypeId::FLOAT32_ARRAY),
            43 => Some(TypeId::FLOAT64_ARRAY),
            44 => Some(TypeId::ARROW_RECORD_BATCH),
            45 => Some(TypeId::ARROW_TABLE),
            _ => None,
        }
    }
}

impl TryFrom<i32> for TypeId {
    type Error = UnknownTypeId;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        TypeId::from_i32(value).ok_or(UnknownTypeId(value))
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Returns true if the wire header for this type id carries a namespace
/// string alongside the type name
///
/// Total over all of `i32`: integers with no registry entry classify as not
/// namespaced. That default is part of the wire contract, not a shortcut:
/// new non-namespaced tags may be published without touching this predicate,
/// so unknown values here are a normal case, never an error.
pub const fn is_namespaced_type(type_id: i32) -> bool {
    match TypeId::from_i32(type_id) {
        Some(id) => id.is_namespaced(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_primitives() {
        assert!(TypeId::BOOL.is_primitive());
        assert!(TypeId::VAR_INT64.is_primitive());
        assert!(TypeId::FLOAT16.is_primitive());
        assert!(!TypeId::STRING.is_primitive());
        assert!(!TypeId::INT32_ARRAY.is_primitive());
    }

    #[test]
    fn test_type_id_containers() {
        assert!(TypeId::LIST.is_container());
        assert!(TypeId::SET.is_container());
        assert!(TypeId::MAP.is_container());
        assert!(!TypeId::ARRAY.is_container());
        assert!(!TypeId::STRUCT.is_container());
    }

    #[test]
    fn test_type_id_primitive_arrays() {
        assert!(TypeId::BOOL_ARRAY.is_primitive_array());
        assert!(TypeId::FLOAT64_ARRAY.is_primitive_array());
        assert!(!TypeId::ARRAY.is_primitive_array());
        assert!(!TypeId::ARROW_TABLE.is_primitive_array());
    }

    #[test]
    fn test_type_id_struct_enum_ext_groups() {
        assert!(TypeId::STRUCT.is_struct_type());
        assert!(TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT.is_struct_type());
        assert!(!TypeId::ENUM.is_struct_type());

        assert!(TypeId::ENUM.is_enum_type());
        assert!(TypeId::NS_ENUM.is_enum_type());
        assert!(!TypeId::NS_STRUCT.is_enum_type());

        assert!(TypeId::EXT.is_ext_type());
        assert!(TypeId::NS_POLYMORPHIC_EXT.is_ext_type());
        assert!(!TypeId::STRUCT.is_ext_type());
    }

    #[test]
    fn test_type_id_polymorphic() {
        assert!(TypeId::POLYMORPHIC_STRUCT.is_polymorphic());
        assert!(TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT.is_polymorphic());
        assert!(TypeId::POLYMORPHIC_EXT.is_polymorphic());
        assert!(!TypeId::STRUCT.is_polymorphic());
        assert!(!TypeId::NS_COMPATIBLE_STRUCT.is_polymorphic());
    }

    #[test]
    fn test_type_id_fixed_size() {
        assert_eq!(TypeId::BOOL.fixed_size(), Some(1));
        assert_eq!(TypeId::FLOAT16.fixed_size(), Some(2));
        assert_eq!(TypeId::INT32.fixed_size(), Some(4));
        assert_eq!(TypeId::FLOAT64.fixed_size(), Some(8));
        // Variable-length encodings have no fixed width
        assert_eq!(TypeId::VAR_INT32.fixed_size(), None);
        assert_eq!(TypeId::SLI_INT64.fixed_size(), None);
        assert_eq!(TypeId::STRING.fixed_size(), None);
    }

    #[test]
    fn test_type_id_from_i32() {
        assert_eq!(TypeId::from_i32(1), Some(TypeId::BOOL));
        assert_eq!(TypeId::from_i32(12), Some(TypeId::STRING));
        assert_eq!(TypeId::from_i32(29), Some(TypeId::MAP));
        assert_eq!(TypeId::from_i32(45), Some(TypeId::ARROW_TABLE));
        assert_eq!(TypeId::from_i32(0), None);
        assert_eq!(TypeId::from_i32(46), None);
        assert_eq!(TypeId::from_i32(-1), None);
    }

    #[test]
    fn test_type_id_try_from() {
        assert_eq!(TypeId::try_from(15), Ok(TypeId::STRUCT));
        let err = TypeId::try_from(1000).unwrap_err();
        assert_eq!(err.0, 1000);
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_type_id_repr() {
        assert_eq!(TypeId::BOOL.to_i32(), 1);
        assert_eq!(TypeId::STRING.to_i32(), 12);
        assert_eq!(TypeId::STRUCT.to_i32(), 15);
        assert_eq!(TypeId::MAP.to_i32(), 29);
        assert_eq!(TypeId::DURATION.to_i32(), 30);
        assert_eq!(TypeId::ARRAY.to_i32(), 35);
        assert_eq!(TypeId::ARROW_TABLE.to_i32(), 45);
        // repr(i32) discriminant and explicit mapping must agree
        assert_eq!(TypeId::NS_ENUM as i32, TypeId::NS_ENUM.to_i32());
    }

    #[test]
    fn test_is_namespaced_type() {
        for id in [14, 19, 20, 21, 22, 25, 26] {
            assert!(is_namespaced_type(id), "id {id} must be namespaced");
        }
        for id in 1..=45 {
            let expected = matches!(id, 14 | 19 | 20 | 21 | 22 | 25 | 26);
            assert_eq!(is_namespaced_type(id), expected, "id {id}");
        }
    }

    #[test]
    fn test_is_namespaced_type_unknown_ids() {
        // Unknown ids are the normal "not namespaced" case, never an error
        assert!(!is_namespaced_type(0));
        assert!(!is_namespaced_type(-1));
        assert!(!is_namespaced_type(46));
        assert!(!is_namespaced_type(1000));
        assert!(!is_namespaced_type(i32::MIN));
        assert!(!is_namespaced_type(i32::MAX));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TypeId::BOOL.to_string(), "BOOL");
        assert_eq!(
            TypeId::NS_POLYMORPHIC_COMPATIBLE_STRUCT.to_string(),
            "NS_POLYMORPHIC_COMPATIBLE_STRUCT"
        );
    }
}
