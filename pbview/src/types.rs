//! Declared types: the compile-time descriptors a field is read as (C3).
//!
//! Each marker type names the in-memory value it produces and the
//! serialization discipline that determines its expected wire type. The
//! typed extractor lives on [`FieldType::extract`] so it is reusable by
//! both singular reads (`View::get`) and sequence iteration ([`crate::repeated`]).

use crate::errors::{Error, Result};
use crate::mode::{Mode, Strict};
use crate::view::View;
use crate::wire::Cursor;

/// One of the six low-level wire encodings a tag's low three bits select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Bits64 = 1,
    Len = 2,
    SGroup = 3,
    EGroup = 4,
    Bits32 = 5,
}

impl TryFrom<u32> for WireType {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Bits64),
            2 => Ok(WireType::Len),
            3 => Ok(WireType::SGroup),
            4 => Ok(WireType::EGroup),
            5 => Ok(WireType::Bits32),
            other => Err(Error::UnsupportedWireType(other as u8)),
        }
    }
}

/// The serialization discipline a declared type follows. Informational —
/// [`FieldType::WIRE_TYPE`] is what callers compare against, but this is
/// exposed because the code generator's type-mapping table (§4.6) is
/// keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Serialization {
    Fixed,
    Varint,
    VarintZigZag,
    Len,
}

/// A compile-time declared field type: names the value it produces and
/// how to read one from a cursor.
///
/// Implemented by the scalar marker types in this module and by
/// [`Enum`]/[`EnumUntyped`]. Submessage fields don't go through this
/// trait at all — [`crate::view::View::get_submessage`] and
/// [`crate::view::View::get_repeated_submessage`] construct a nested
/// view directly under a caller-chosen mode, which is how generated
/// accessor classes read their own submessage fields (see
/// [`Message`]/[`MessageStrict`] for the two fixed-mode conveniences
/// this trait does expose, for ad hoc non-generated use).
pub trait FieldType {
    /// The value type this field produces, borrowing from the buffer
    /// backing the cursor it was read from.
    type Value<'a>;
    const SERIALIZATION: Serialization;
    const WIRE_TYPE: WireType;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<Self::Value<'a>>;
}

macro_rules! varint_type {
    ($name:ident, $value:ty, $read:ident $(as $cast:ty)?) => {
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl FieldType for $name {
            type Value<'a> = $value;
            const SERIALIZATION: Serialization = Serialization::Varint;
            const WIRE_TYPE: WireType = WireType::Varint;

            fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<$value> {
                let raw = cursor.$read()?;
                Ok(varint_type!(@cast raw $(, $cast)?))
            }
        }
    };
    (@cast $raw:expr) => { $raw };
    (@cast $raw:expr, $cast:ty) => { $raw as $cast };
}

macro_rules! zigzag_type {
    ($name:ident, $value:ty, $read:ident, $decode:path) => {
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl FieldType for $name {
            type Value<'a> = $value;
            const SERIALIZATION: Serialization = Serialization::VarintZigZag;
            const WIRE_TYPE: WireType = WireType::Varint;

            fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<$value> {
                let raw = cursor.$read()?;
                Ok($decode(raw))
            }
        }
    };
}

macro_rules! fixed_type {
    ($name:ident, $value:ty, $wire:expr, $read:ident $(as $cast:ty)?) => {
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl FieldType for $name {
            type Value<'a> = $value;
            const SERIALIZATION: Serialization = Serialization::Fixed;
            const WIRE_TYPE: WireType = $wire;

            fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<$value> {
                let raw = cursor.$read()?;
                Ok(fixed_type!(@cast raw $(, $cast)?))
            }
        }
    };
    (@cast $raw:expr) => { $raw };
    (@cast $raw:expr, $cast:ty) => { $raw as $cast };
}

varint_type!(Int32, i32, read_varint32 as i32);
varint_type!(Int64, i64, read_varint64 as i64);
varint_type!(Uint32, u32, read_varint32);
varint_type!(Uint64, u64, read_varint64);

#[derive(Debug, Clone, Copy)]
pub enum Bool {}

impl FieldType for Bool {
    type Value<'a> = bool;
    const SERIALIZATION: Serialization = Serialization::Varint;
    const WIRE_TYPE: WireType = WireType::Varint;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<bool> {
        Ok(cursor.read_varint32()? != 0)
    }
}

zigzag_type!(Sint32, i32, read_varint32, crate::wire::zigzag_decode_32);
zigzag_type!(Sint64, i64, read_varint64, crate::wire::zigzag_decode_64);

fixed_type!(Fixed32, u32, WireType::Bits32, read_fixed32);
fixed_type!(Fixed64, u64, WireType::Bits64, read_fixed64);
fixed_type!(Sfixed32, i32, WireType::Bits32, read_fixed32 as i32);
fixed_type!(Sfixed64, i64, WireType::Bits64, read_fixed64 as i64);

#[derive(Debug, Clone, Copy)]
pub enum Double {}

impl FieldType for Double {
    type Value<'a> = f64;
    const SERIALIZATION: Serialization = Serialization::Fixed;
    const WIRE_TYPE: WireType = WireType::Bits64;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<f64> {
        Ok(f64::from_bits(cursor.read_fixed64()?))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Float {}

impl FieldType for Float {
    type Value<'a> = f32;
    const SERIALIZATION: Serialization = Serialization::Fixed;
    const WIRE_TYPE: WireType = WireType::Bits32;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<f32> {
        Ok(f32::from_bits(cursor.read_fixed32()?))
    }
}

/// A UTF-8 `string` field. Borrows from the backing buffer.
#[derive(Debug, Clone, Copy)]
pub enum Str {}

impl FieldType for Str {
    type Value<'a> = &'a str;
    const SERIALIZATION: Serialization = Serialization::Len;
    const WIRE_TYPE: WireType = WireType::Len;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<&'a str> {
        let raw = cursor.read_length_delimited()?;
        if M::CHECKED {
            core::str::from_utf8(raw).map_err(|_| Error::InvalidUtf8)
        } else {
            // SAFETY: Trusted mode's contract is a well-formed buffer.
            unsafe { Ok(core::str::from_utf8_unchecked(raw)) }
        }
    }
}

/// A `bytes` field. Borrows from the backing buffer.
#[derive(Debug, Clone, Copy)]
pub enum Bytes {}

impl FieldType for Bytes {
    type Value<'a> = &'a [u8];
    const SERIALIZATION: Serialization = Serialization::Len;
    const WIRE_TYPE: WireType = WireType::Len;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<&'a [u8]> {
        cursor.read_length_delimited()
    }
}

/// A typed enum field. `E` keeps the raw `i32` payload, matching protobuf's
/// own rule that unrecognized enum values round-trip rather than error.
pub struct Enum<E>(core::marker::PhantomData<fn() -> E>);

impl<E: From<i32>> FieldType for Enum<E> {
    type Value<'a> = E;
    const SERIALIZATION: Serialization = Serialization::Varint;
    const WIRE_TYPE: WireType = WireType::Varint;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<E> {
        Ok((cursor.read_varint32()? as i32).into())
    }
}

/// An untyped enum field: the raw `i32` payload, with no target enum type.
/// Used for repeated enum fields, where packed iteration needs a single
/// uniform decoding discipline across elements regardless of which enum
/// type the schema names.
#[derive(Debug, Clone, Copy)]
pub enum EnumUntyped {}

impl FieldType for EnumUntyped {
    type Value<'a> = i32;
    const SERIALIZATION: Serialization = Serialization::Varint;
    const WIRE_TYPE: WireType = WireType::Varint;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<i32> {
        Ok(cursor.read_varint32()? as i32)
    }
}

/// A submessage field read with the default parser mode ([`crate::mode::Permissive`]).
#[derive(Debug, Clone, Copy)]
pub enum Message {}

impl FieldType for Message {
    type Value<'a> = View<'a, crate::mode::Permissive>;
    const SERIALIZATION: Serialization = Serialization::Len;
    const WIRE_TYPE: WireType = WireType::Len;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<Self::Value<'a>> {
        Ok(View::new(cursor.read_length_delimited_clamped()?))
    }
}

/// A submessage field that is always read with [`Strict`] parser
/// semantics regardless of the enclosing view's mode — for submessages
/// whose encoder is known to emit fields out of order or with legitimate
/// duplicates that must resolve last-wins.
#[derive(Debug, Clone, Copy)]
pub enum MessageStrict {}

impl FieldType for MessageStrict {
    type Value<'a> = View<'a, Strict>;
    const SERIALIZATION: Serialization = Serialization::Len;
    const WIRE_TYPE: WireType = WireType::Len;

    fn extract<'a, M: Mode>(cursor: &mut Cursor<'a, M>) -> Result<Self::Value<'a>> {
        Ok(View::new(cursor.read_length_delimited_clamped()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Permissive;
    use crate::wire::Cursor;

    #[test]
    fn int32_extracts_varint() {
        let mut c = Cursor::<Permissive>::new(&[0x96, 0x01]);
        assert_eq!(Int32::extract(&mut c).unwrap(), 150);
    }

    #[test]
    fn sint32_zigzags() {
        let mut c = Cursor::<Permissive>::new(&[0x03]);
        assert_eq!(Sint32::extract(&mut c).unwrap(), -2);
    }

    #[test]
    fn str_extracts_utf8() {
        let mut c = Cursor::<Permissive>::new(b"\x07testing");
        assert_eq!(Str::extract(&mut c).unwrap(), "testing");
    }

    #[test]
    fn str_rejects_invalid_utf8() {
        let mut c = Cursor::<Permissive>::new(&[0x01, 0xff]);
        assert_eq!(Str::extract(&mut c), Err(Error::InvalidUtf8));
    }
}
