//! The message view (C4): the public lazy-access surface over a borrowed
//! byte range.

use core::marker::PhantomData;

use crate::errors::{Error, Result};
use crate::mode::Mode;
use crate::repeated::{PackedRepeated, Repeated};
use crate::seek;
use crate::types::{FieldType, WireType};
use crate::wire::Cursor;

/// An immutable, borrowed `(byte-range, parser-mode)` pair over bytes not
/// owned by the view. Copying a `View` copies this pair, never the bytes.
///
/// `M` is a zero-sized type parameter (see [`crate::mode`]) rather than a
/// runtime field, so mode dispatch in `has`/`get`/`get_repeated` resolves
/// at compile time with no branch — `View<'a, Trusted>` and
/// `View<'a, Strict>` are different monomorphizations of the same code.
#[derive(Clone, Copy)]
pub struct View<'a, M> {
    bytes: &'a [u8],
    _mode: PhantomData<M>,
}

impl<'a, M: Mode> Default for View<'a, M> {
    /// The "zero view": an empty byte range, under which every field
    /// reads as absent. Generated accessor classes fall back to this for
    /// an absent singular submessage field, matching a default-constructed
    /// message's all-fields-unset state.
    fn default() -> Self {
        View::new(&[])
    }
}

impl<'a, M: Mode> View<'a, M> {
    /// Wraps `bytes` as a view. Does not parse or validate anything —
    /// validation, if any, happens lazily per field access.
    pub fn new(bytes: &'a [u8]) -> Self {
        View { bytes, _mode: PhantomData }
    }

    /// The view's backing bytes, unparsed.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Whether `field_no` occurs at least once in this message. `O(message
    /// size)` worst case.
    pub fn has(&self, field_no: u32) -> bool {
        let mut cursor = Cursor::<M>::new(self.bytes);
        matches!(seek::seek_next(&mut cursor, field_no), Ok(Some(_)))
    }

    /// Reads a singular field of declared type `T`. `None` if absent.
    ///
    /// Under [`crate::mode::Strict`] a duplicate field resolves to its
    /// *last* occurrence; under every other mode, its *first*.
    pub fn get<T: FieldType>(&self, field_no: u32) -> Result<Option<T::Value<'a>>> {
        let mut cursor = Cursor::<M>::new(self.bytes);
        match seek::seek_final(&mut cursor, field_no)? {
            None => Ok(None),
            Some(wire_type) => {
                if M::CHECKED && wire_type != T::WIRE_TYPE {
                    return Err(Error::WireTypeMismatch { expected: T::WIRE_TYPE, found: wire_type });
                }
                T::extract(&mut cursor).map(Some)
            }
        }
    }

    /// Reads a singular submessage field, wrapping the nested bytes in a
    /// view under an explicitly chosen parser mode `N` — independent of
    /// this view's own mode `M`.
    ///
    /// [`Self::get::<Message>`]/[`Self::get::<MessageStrict>`] are the two
    /// fixed-mode conveniences for ad hoc use; generated accessor code
    /// parameterizing a submessage field by "the same backend" as its
    /// enclosing message calls this directly with `N = M`.
    ///
    /// A submessage whose declared length overruns the buffer is not
    /// rejected here: the nested view is constructed over whatever bytes
    /// actually remain, and a field read inside it that runs past the end
    /// of that (possibly short) range is what surfaces `Truncated` — not
    /// this call.
    pub fn get_submessage<N: Mode>(&self, field_no: u32) -> Result<Option<View<'a, N>>> {
        let mut cursor = Cursor::<M>::new(self.bytes);
        match seek::seek_final(&mut cursor, field_no)? {
            None => Ok(None),
            Some(wire_type) => {
                if M::CHECKED && wire_type != WireType::Len {
                    return Err(Error::WireTypeMismatch { expected: WireType::Len, found: wire_type });
                }
                Ok(Some(View::new(cursor.read_length_delimited_clamped()?)))
            }
        }
    }

    /// A lazy sequence over every occurrence of a non-packed repeated
    /// field `field_no`, decoded as `T`.
    pub fn get_repeated<T: FieldType>(&self, field_no: u32) -> Repeated<'a, M, T> {
        Repeated::new(self.bytes, field_no)
    }

    /// A lazy sequence over every occurrence of a repeated submessage
    /// field `field_no`, each wrapped in a view under mode `N` —
    /// independent of this view's own mode `M`, for the same reason as
    /// [`Self::get_submessage`].
    pub fn get_repeated_submessage<N: Mode>(&self, field_no: u32) -> crate::repeated::RepeatedSubmessage<'a, M, N> {
        crate::repeated::RepeatedSubmessage::new(self.bytes, field_no)
    }

    /// A lazy sequence over the elements of a packed repeated field
    /// `field_no`, decoded as `T`. An absent field yields an empty
    /// sequence, not an error.
    pub fn get_packed_repeated<T: FieldType>(&self, field_no: u32) -> Result<PackedRepeated<'a, M, T>> {
        let mut cursor = Cursor::<M>::new(self.bytes);
        match seek::seek_next(&mut cursor, field_no)? {
            None => Ok(PackedRepeated::empty()),
            Some(wire_type) => {
                if M::CHECKED && wire_type != WireType::Len {
                    return Err(Error::WireTypeMismatch { expected: WireType::Len, found: wire_type });
                }
                let payload = cursor.read_length_delimited()?;
                Ok(PackedRepeated::new(payload))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Permissive, Strict};
    use crate::types::{Int32, Sint32, Str};

    // { a = 150 }  ->  field 1, varint 150
    const SEED_1: &[u8] = &[0x08, 0x96, 0x01];
    // { b = "testing" }  ->  field 2, len-delimited
    const SEED_2: &[u8] = &[0x12, 0x07, b't', b'e', b's', b't', b'i', b'n', b'g'];
    // { c = [1, -2, 3] } packed sint32  ->  field 3, len-delimited zigzag payload
    const SEED_3: &[u8] = &[0x1A, 0x03, 0x02, 0x03, 0x06];

    #[test]
    fn seed_scenario_1_singular_varint() {
        let view = View::<Permissive>::new(SEED_1);
        assert_eq!(view.get::<Int32>(1).unwrap(), Some(150));
        assert!(!view.has(2));
        assert_eq!(view.get_repeated::<Int32>(3).count(), 0);
    }

    #[test]
    fn seed_scenario_2_singular_string() {
        let view = View::<Permissive>::new(SEED_2);
        assert_eq!(view.get::<Str>(2).unwrap(), Some("testing"));
    }

    #[test]
    fn seed_scenario_3_packed_sint32() {
        let view = View::<Permissive>::new(SEED_3);
        let values: Result<Vec<i32>> = view.get_packed_repeated::<Sint32>(3).unwrap().collect();
        assert_eq!(values.unwrap(), vec![1, -2, 3]);
    }

    #[test]
    fn empty_message_has_no_fields_and_zero_bytes() {
        let view = View::<Permissive>::new(&[]);
        assert!(!view.has(1));
        assert_eq!(view.get::<Int32>(1).unwrap(), None);
    }

    #[test]
    fn zero_length_value_is_valid() {
        // field 2, length-delimited, length 0
        let bytes: &[u8] = &[0x12, 0x00];
        let view = View::<Permissive>::new(bytes);
        assert_eq!(view.get::<Str>(2).unwrap(), Some(""));
        assert!(view.has(2));
    }

    #[test]
    fn wire_type_mismatch_is_rejected_under_checked_modes() {
        // field 1 encoded as a varint, read back as a fixed32
        let view = View::<Permissive>::new(SEED_1);
        assert_eq!(
            view.get::<crate::types::Fixed32>(1),
            Err(Error::WireTypeMismatch { expected: WireType::Bits32, found: WireType::Varint })
        );
    }

    #[test]
    fn duplicate_field_permissive_vs_strict() {
        let bytes: &[u8] = &[0x08, 0x01, 0x08, 0x02];
        let permissive = View::<Permissive>::new(bytes);
        let strict = View::<Strict>::new(bytes);
        assert_eq!(permissive.get::<Int32>(1).unwrap(), Some(1));
        assert_eq!(strict.get::<Int32>(1).unwrap(), Some(2));
    }

    #[test]
    fn truncated_buffer_errors_under_both_checked_modes() {
        let bytes: &[u8] = &[0x12, 0x07, b't', b'e']; // claims len 7, has 2
        assert_eq!(View::<Permissive>::new(bytes).get::<Str>(2), Err(Error::Truncated));
        assert_eq!(View::<Strict>::new(bytes).get::<Str>(2), Err(Error::Truncated));
    }

    #[test]
    fn seed_scenario_4_singular_submessage_access() {
        // { d = { id=42, v="x" } }  ->  field 4, len-delimited
        let bytes: &[u8] = &[0x22, 0x05, 0x08, 0x2A, 0x12, 0x01, 0x78];
        let view = View::<Permissive>::new(bytes);
        let sub = view.get_submessage::<Permissive>(4).unwrap().unwrap();
        assert_eq!(sub.get::<Int32>(1).unwrap(), Some(42));
        assert_eq!(sub.get::<Str>(2).unwrap(), Some("x"));
    }

    #[test]
    fn seed_scenario_6_truncated_submessage_surfaces_on_the_inner_read() {
        // Scenario 4's bytes with `v`'s payload byte dropped: the outer
        // length still claims 5 bytes, but only 4 remain. The outer
        // submessage read itself still succeeds (clamped to what's
        // actually there); `id` is still readable, but reading `v` runs
        // out of bytes.
        let bytes: &[u8] = &[0x22, 0x05, 0x08, 0x2A, 0x12, 0x01];

        let permissive = View::<Permissive>::new(bytes);
        let sub = permissive.get_submessage::<Permissive>(4).unwrap().unwrap();
        assert_eq!(sub.get::<Int32>(1).unwrap(), Some(42));
        assert_eq!(sub.get::<Str>(2), Err(Error::Truncated));

        let strict = View::<Strict>::new(bytes);
        let sub = strict.get_submessage::<Strict>(4).unwrap().unwrap();
        assert_eq!(sub.get::<Str>(2), Err(Error::Truncated));
    }
}
