//! Wire primitives: varint, ZigZag, fixed32/64, length-delimited, tag
//! decoding (C1), over a [`Cursor`] — a `Copy` cursor into a caller-owned
//! buffer, mirroring the teacher's `BytesReader` but holding the slice
//! directly rather than a separately-threaded `(start, end)` index pair
//! (see `SPEC_FULL.md` §5.3 for why: a Rust slice already re-slices in
//! O(1), so the index pair buys nothing once the mode is a type parameter
//! rather than a runtime enum).

use core::marker::PhantomData;

use byteorder_lite::{ByteOrder, LE};

use crate::errors::{Error, Result};
use crate::mode::Mode;
use crate::types::WireType;

/// A tag: the field number and wire type encoded in a field's leading
/// varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tag {
    pub(crate) field_no: u32,
    pub(crate) wire_type: WireType,
}

/// A `Copy` cursor into a borrowed byte slice. Advancing a cursor never
/// revisits bytes and never mutates the slice it points into; it only
/// narrows the subslice it holds.
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'a, M> {
    bytes: &'a [u8],
    _mode: PhantomData<M>,
}

impl<'a, M: Mode> Cursor<'a, M> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, _mode: PhantomData }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        self.bytes
    }

    fn read_u8(&mut self) -> Result<u8> {
        if M::CHECKED {
            let (b, rest) = self.bytes.split_first().ok_or(Error::Truncated)?;
            self.bytes = rest;
            Ok(*b)
        } else {
            // SAFETY: Trusted mode is a contract that the input is
            // well-formed; reading past `bytes` here is the documented UB.
            unsafe {
                let b = *self.bytes.get_unchecked(0);
                self.bytes = self.bytes.get_unchecked(1..);
                Ok(b)
            }
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if M::CHECKED {
            if self.bytes.len() < len {
                return Err(Error::Truncated);
            }
            let (head, rest) = self.bytes.split_at(len);
            self.bytes = rest;
            Ok(head)
        } else {
            // SAFETY: same contract as `read_u8`.
            unsafe {
                let head = self.bytes.get_unchecked(..len);
                self.bytes = self.bytes.get_unchecked(len..);
                Ok(head)
            }
        }
    }

    /// Reads a varint of up to 5 bytes, producing a `u32`. Bits beyond the
    /// 32nd are silently discarded (tolerated `OVERFLOW`, never surfaced),
    /// matching the five-byte cap protobuf uses for 32-bit varint fields.
    pub(crate) fn read_varint32(&mut self) -> Result<u32> {
        let mut result: u32 = 0;
        for i in 0..5u32 {
            let b = self.read_u8()?;
            result |= ((b & 0x7f) as u32) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(Error::MalformedVarint)
    }

    /// Reads a varint of up to 10 bytes, producing a `u64`.
    pub(crate) fn read_varint64(&mut self) -> Result<u64> {
        let mut result: u64 = 0;
        for i in 0..10u32 {
            let b = self.read_u8()?;
            result |= ((b & 0x7f) as u64) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(result);
            }
        }
        Err(Error::MalformedVarint)
    }

    pub(crate) fn read_fixed32(&mut self) -> Result<u32> {
        Ok(LE::read_u32(self.take(4)?))
    }

    pub(crate) fn read_fixed64(&mut self) -> Result<u64> {
        Ok(LE::read_u64(self.take(8)?))
    }

    /// Reads a varint length, then that many bytes as a subrange.
    pub(crate) fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint32()? as usize;
        self.take(len)
    }

    /// Reads a varint length, then takes up to that many bytes — clamped
    /// to whatever actually remains instead of erroring when the declared
    /// length overruns the buffer. Used for submessage framing: a
    /// truncated submessage must surface `Truncated` from the inner field
    /// read that runs out of bytes, not from constructing the outer view,
    /// so the outer framing step itself is never validated against the
    /// buffer length — only against the varint length prefix itself.
    pub(crate) fn read_length_delimited_clamped(&mut self) -> Result<&'a [u8]> {
        let len = self.read_varint32()? as usize;
        if M::CHECKED {
            let available = self.bytes.len().min(len);
            let (head, rest) = self.bytes.split_at(available);
            self.bytes = rest;
            Ok(head)
        } else {
            // SAFETY: same contract as `take` — Trusted input is well-formed.
            unsafe {
                let head = self.bytes.get_unchecked(..len);
                self.bytes = self.bytes.get_unchecked(len..);
                Ok(head)
            }
        }
    }

    /// Reads the next tag, or `None` once the cursor is exhausted — the
    /// sentinel that terminates iteration, distinct from a decode failure.
    pub(crate) fn read_tag(&mut self) -> Result<Option<Tag>> {
        if self.is_eof() {
            return Ok(None);
        }
        let raw = self.read_varint32()?;
        let wire_type = WireType::try_from(raw & 0x7)?;
        Ok(Some(Tag { field_no: raw >> 3, wire_type }))
    }

    /// Advances past one value of the given wire type without decoding it.
    pub(crate) fn skip_value(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => {
                self.read_varint64()?;
                Ok(())
            }
            WireType::Bits32 => self.take(4).map(|_| ()),
            WireType::Bits64 => self.take(8).map(|_| ()),
            WireType::Len => self.read_length_delimited().map(|_| ()),
            WireType::SGroup | WireType::EGroup => {
                Err(Error::UnsupportedWireType(wire_type as u8))
            }
        }
    }
}

/// ZigZag-decodes an unsigned varint result into its signed value.
pub(crate) fn zigzag_decode_32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

pub(crate) fn zigzag_decode_64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Permissive;

    #[test]
    fn varint32_single_byte() {
        let mut c = Cursor::<Permissive>::new(&[0x96, 0x01]);
        assert_eq!(c.read_varint32().unwrap(), 150);
        assert!(c.is_eof());
    }

    #[test]
    fn varint_truncated() {
        let mut c = Cursor::<Permissive>::new(&[0x96]);
        assert_eq!(c.read_varint32(), Err(Error::Truncated));
    }

    #[test]
    fn zigzag_round_trip_small_values() {
        assert_eq!(zigzag_decode_32(0), 0);
        assert_eq!(zigzag_decode_32(1), -1);
        assert_eq!(zigzag_decode_32(2), 1);
        assert_eq!(zigzag_decode_32(3), -2);
        assert_eq!(zigzag_decode_64(6), 3);
    }

    #[test]
    fn tag_decoding() {
        let mut c = Cursor::<Permissive>::new(&[0x08, 0x96, 0x01]);
        let tag = c.read_tag().unwrap().unwrap();
        assert_eq!(tag.field_no, 1);
        assert_eq!(tag.wire_type, WireType::Varint);
    }

    #[test]
    fn read_tag_on_empty_is_sentinel_not_error() {
        let mut c = Cursor::<Permissive>::new(&[]);
        assert_eq!(c.read_tag().unwrap(), None);
    }

    #[test]
    fn skip_group_is_unsupported() {
        let mut c = Cursor::<Permissive>::new(&[]);
        assert_eq!(
            c.skip_value(WireType::SGroup),
            Err(Error::UnsupportedWireType(3))
        );
    }
}
