//! Error type produced by lazy field access.
//!
//! Kept hand-rolled rather than pulled from a crate, matching the
//! reader's `no_std` story: a dependency on `thiserror` would still
//! require `std` (or at least `alloc`) to format nicely, and this crate
//! needs neither to decode a single field.

use core::fmt;

use crate::types::WireType;

/// Everything that can go wrong while reading a field under a
/// bounds-checked parser mode (`Permissive` or `Strict`).
///
/// Under `Trusted`, none of these conditions are checked at all: the
/// caller has promised the input is well-formed, and malformed input is
/// undefined behavior by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor ran out of bytes before a value could be fully read.
    Truncated,
    /// The wire type read from the tag does not match the wire type
    /// implied by the field's declared type.
    WireTypeMismatch { expected: WireType, found: WireType },
    /// A `StartGroup`/`EndGroup` wire type was encountered. Groups are
    /// not supported.
    UnsupportedWireType(u8),
    /// A varint carried more continuation bytes than any protobuf value
    /// can legally encode (10 bytes for 64-bit, 5 for 32-bit reads of a
    /// shorter value). This is distinct from silently truncating the
    /// high bits of an overlong-but-terminated encoding, which is
    /// tolerated per the wire format.
    MalformedVarint,
    /// A `string` field's bytes were not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Truncated => write!(f, "reached end of buffer before the value was fully read"),
            Error::WireTypeMismatch { expected, found } => write!(
                f,
                "wire type mismatch: expected {expected:?}, found {found:?}"
            ),
            Error::UnsupportedWireType(t) => write!(f, "unsupported wire type {t} (groups are not supported)"),
            Error::MalformedVarint => write!(f, "varint continues past its maximum legal length"),
            Error::InvalidUtf8 => write!(f, "string field did not contain valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
