//! Repeated cursors (C5): lazy, forward-only, finite sequences over
//! non-packed and packed repeated fields.
//!
//! Both cursors are `Copy`, so forking iteration (peek-ahead, `nth`, a
//! saved restart point) is just cloning the cursor — each fork holds its
//! own working range and advances independently, never revisiting bytes
//! the other has already consumed.

use core::marker::PhantomData;

use crate::errors::{Error, Result};
use crate::mode::Mode;
use crate::seek;
use crate::types::{FieldType, WireType};
use crate::view::View;
use crate::wire::Cursor;

/// A lazy sequence over a non-packed repeated field: walks the entire
/// message, yielding a decoded value for every tag matching the target
/// field number.
#[derive(Clone, Copy)]
pub struct Repeated<'a, M, T> {
    bytes: &'a [u8],
    field_no: u32,
    done: bool,
    _mode: PhantomData<M>,
    _ty: PhantomData<T>,
}

impl<'a, M: Mode, T: FieldType> Repeated<'a, M, T> {
    pub(crate) fn new(bytes: &'a [u8], field_no: u32) -> Self {
        Repeated { bytes, field_no, done: false, _mode: PhantomData, _ty: PhantomData }
    }
}

impl<'a, M: Mode, T: FieldType> Iterator for Repeated<'a, M, T> {
    type Item = Result<T::Value<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut cursor = Cursor::<M>::new(self.bytes);
        match seek::seek_next(&mut cursor, self.field_no) {
            Ok(None) => {
                self.done = true;
                None
            }
            Ok(Some(wire_type)) => {
                if M::CHECKED && wire_type != T::WIRE_TYPE {
                    self.done = true;
                    return Some(Err(Error::WireTypeMismatch { expected: T::WIRE_TYPE, found: wire_type }));
                }
                match T::extract(&mut cursor) {
                    Ok(value) => {
                        self.bytes = cursor.remaining();
                        Some(Ok(value))
                    }
                    Err(e) => {
                        self.done = true;
                        Some(Err(e))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// A lazy sequence over a repeated submessage field: like [`Repeated`],
/// but wraps each occurrence in a [`View`] under an independently chosen
/// mode `N` rather than decoding it through [`FieldType`] — submessage
/// fields don't have a `FieldType` marker (see [`crate::types`]'s module
/// doc), since the value they need to produce (a view parameterized by
/// an arbitrary mode `N`) doesn't fit `FieldType`'s single-mode-per-type
/// shape.
#[derive(Clone, Copy)]
pub struct RepeatedSubmessage<'a, M, N> {
    bytes: &'a [u8],
    field_no: u32,
    done: bool,
    _mode: PhantomData<M>,
    _target: PhantomData<N>,
}

impl<'a, M: Mode, N: Mode> RepeatedSubmessage<'a, M, N> {
    pub(crate) fn new(bytes: &'a [u8], field_no: u32) -> Self {
        RepeatedSubmessage { bytes, field_no, done: false, _mode: PhantomData, _target: PhantomData }
    }
}

impl<'a, M: Mode, N: Mode> Iterator for RepeatedSubmessage<'a, M, N> {
    type Item = Result<View<'a, N>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut cursor = Cursor::<M>::new(self.bytes);
        match seek::seek_next(&mut cursor, self.field_no) {
            Ok(None) => {
                self.done = true;
                None
            }
            Ok(Some(wire_type)) => {
                if M::CHECKED && wire_type != WireType::Len {
                    self.done = true;
                    return Some(Err(Error::WireTypeMismatch { expected: WireType::Len, found: wire_type }));
                }
                match cursor.read_length_delimited_clamped() {
                    Ok(bytes) => {
                        self.bytes = cursor.remaining();
                        Some(Ok(View::new(bytes)))
                    }
                    Err(e) => {
                        self.done = true;
                        Some(Err(e))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// A lazy sequence over a packed repeated field: walks only the interior
/// of one length-delimited payload.
#[derive(Clone, Copy)]
pub struct PackedRepeated<'a, M, T> {
    bytes: &'a [u8],
    _mode: PhantomData<M>,
    _ty: PhantomData<T>,
}

impl<'a, M: Mode, T: FieldType> PackedRepeated<'a, M, T> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        PackedRepeated { bytes, _mode: PhantomData, _ty: PhantomData }
    }

    pub(crate) fn empty() -> Self {
        PackedRepeated { bytes: &[], _mode: PhantomData, _ty: PhantomData }
    }
}

impl<'a, M: Mode, T: FieldType> Iterator for PackedRepeated<'a, M, T> {
    type Item = Result<T::Value<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }

        let mut cursor = Cursor::<M>::new(self.bytes);
        match T::extract(&mut cursor) {
            Ok(value) => {
                self.bytes = cursor.remaining();
                Some(Ok(value))
            }
            Err(e) => {
                self.bytes = &[];
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Permissive;
    use crate::types::Int32;

    #[test]
    fn non_packed_repeated_yields_every_occurrence_in_order() {
        // three occurrences of field 3, varint-encoded: 1, 2, 3
        let bytes: &[u8] = &[0x18, 0x01, 0x18, 0x02, 0x18, 0x03];
        let values: Result<Vec<i32>> = Repeated::<Permissive, Int32>::new(bytes, 3).collect();
        assert_eq!(values.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn non_packed_repeated_skips_other_fields_interleaved_between_occurrences() {
        // field 3 = 1, field 1 = 9 (ignored), field 3 = 2
        let bytes: &[u8] = &[0x18, 0x01, 0x08, 0x09, 0x18, 0x02];
        let values: Result<Vec<i32>> = Repeated::<Permissive, Int32>::new(bytes, 3).collect();
        assert_eq!(values.unwrap(), vec![1, 2]);
    }

    #[test]
    fn repeated_submessage_yields_a_view_per_occurrence() {
        // two occurrences of field 4, each a 2-byte submessage `{ id = N }`
        let bytes: &[u8] = &[0x22, 0x02, 0x08, 0x01, 0x22, 0x02, 0x08, 0x02];
        let ids: Result<Vec<i32>> = RepeatedSubmessage::<Permissive, Permissive>::new(bytes, 4)
            .map(|r| r.and_then(|v| v.get::<Int32>(1).map(|opt| opt.unwrap_or_default())))
            .collect();
        assert_eq!(ids.unwrap(), vec![1, 2]);
    }

    #[test]
    fn repeated_submessage_is_empty_when_the_field_never_occurs() {
        let bytes: &[u8] = &[0x08, 0x01];
        assert_eq!(RepeatedSubmessage::<Permissive, Permissive>::new(bytes, 4).count(), 0);
    }
}
