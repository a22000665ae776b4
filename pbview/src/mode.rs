//! Parser modes: compile-time-selected bounds-checking and duplicate-field
//! policy.
//!
//! Expressed as a sealed marker-type trait rather than a runtime `enum` so
//! that `View<'a, M>` and the field seeker monomorphize per mode — the
//! `Trusted` fast path costs nothing at runtime to select, matching the
//! Design Notes' preference for compile-time polymorphism on this path.
//! The sealed-trait shape mirrors `byteorder_lite::ByteOrder`, this crate's
//! own dependency.

mod private {
    pub trait Sealed {}
    impl Sealed for super::Trusted {}
    impl Sealed for super::Permissive {}
    impl Sealed for super::Strict {}
}

/// A parser mode: selects bounds checking and duplicate-field resolution.
pub trait Mode: Clone + Copy + Default + private::Sealed {
    /// Whether reads are bounds-checked. `false` only for [`Trusted`].
    const CHECKED: bool;
    /// Whether a singular field's final value is the *last* occurrence
    /// (`true`, [`Strict`]) or the *first* (`false`, everything else).
    const LAST_WINS: bool;
}

/// No bounds checks; undefined behavior on malformed input. Reserved for
/// fully trusted pipelines (e.g. data this process itself just wrote).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trusted;

/// Bounds-checked; first-wins on duplicate fields; may stop scanning early
/// once a field number larger than the target is seen. The default mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissive;

/// Bounds-checked; last-wins on duplicate fields (the protobuf-specified
/// behavior); never stops scanning early on field-number order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

impl Mode for Trusted {
    const CHECKED: bool = false;
    const LAST_WINS: bool = false;
}

impl Mode for Permissive {
    const CHECKED: bool = true;
    const LAST_WINS: bool = false;
}

impl Mode for Strict {
    const CHECKED: bool = true;
    const LAST_WINS: bool = true;
}
