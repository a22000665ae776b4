//! The field seeker (C2): advances a cursor to a target field number under
//! the mode's duplicate-field policy.

use crate::errors::Result;
use crate::mode::Mode;
use crate::types::WireType;
use crate::wire::Cursor;

/// Advances `cursor` until a tag for `target` is found (returning its wire
/// type) or the cursor is exhausted (returning `None`).
///
/// Under any mode but [`crate::mode::Strict`], a tag whose field number
/// exceeds `target` ends the scan immediately: real encoders write fields
/// in ascending field-number order, so once we've passed the target it
/// cannot appear later. The scratch cursor this runs against is always a
/// caller-local copy discarded on a miss (see `has`/`get` in
/// [`crate::view`]), so whether that over-shooting tag is left consumed in
/// the discarded cursor is not observable — we consume it, matching the
/// reference implementation this was ported from.
pub(crate) fn seek_next<'a, M: Mode>(cursor: &mut Cursor<'a, M>, target: u32) -> Result<Option<WireType>> {
    while let Some(tag) = cursor.read_tag()? {
        if tag.field_no == target {
            return Ok(Some(tag.wire_type));
        }
        if !M::LAST_WINS && tag.field_no > target {
            return Ok(None);
        }
        cursor.skip_value(tag.wire_type)?;
    }
    Ok(None)
}

/// The `Strict` "last wins" variant of [`seek_next`]: scans the entire
/// remaining cursor, remembering the most recent hit, and leaves `cursor`
/// positioned right after that hit's tag (value unread) on return.
///
/// For any mode other than `Strict` this is exactly [`seek_next`] — first
/// occurrence wins, and there's no reason to keep scanning past it.
pub(crate) fn seek_final<'a, M: Mode>(cursor: &mut Cursor<'a, M>, target: u32) -> Result<Option<WireType>> {
    if !M::LAST_WINS {
        return seek_next(cursor, target);
    }

    let mut last: Option<(WireType, Cursor<'a, M>)> = None;
    loop {
        match seek_next(cursor, target)? {
            None => break,
            Some(wire_type) => {
                last = Some((wire_type, *cursor));
                cursor.skip_value(wire_type)?;
            }
        }
    }

    match last {
        Some((wire_type, snapshot)) => {
            *cursor = snapshot;
            Ok(Some(wire_type))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Permissive, Strict};
    use crate::wire::Cursor;

    // field 1 = 1, field 1 = 2 (duplicate)
    const DUPLICATE_A: &[u8] = &[0x08, 0x01, 0x08, 0x02];

    #[test]
    fn permissive_first_wins() {
        let mut c = Cursor::<Permissive>::new(DUPLICATE_A);
        let wt = seek_next(&mut c, 1).unwrap().unwrap();
        assert_eq!(wt, WireType::Varint);
        assert_eq!(c.read_varint32().unwrap(), 1);
    }

    #[test]
    fn strict_last_wins() {
        let mut c = Cursor::<Strict>::new(DUPLICATE_A);
        let wt = seek_final(&mut c, 1).unwrap().unwrap();
        assert_eq!(wt, WireType::Varint);
        assert_eq!(c.read_varint32().unwrap(), 2);
    }

    #[test]
    fn permissive_early_exit_on_ascending_order() {
        // field 5 only; field 1 is absent and never appears.
        let bytes: &[u8] = &[0x28, 0x01];
        let mut c = Cursor::<Permissive>::new(bytes);
        assert_eq!(seek_next(&mut c, 1).unwrap(), None);
    }

    #[test]
    fn not_found_at_eof() {
        let mut c = Cursor::<Permissive>::new(&[]);
        assert_eq!(seek_next(&mut c, 1).unwrap(), None);
    }
}
