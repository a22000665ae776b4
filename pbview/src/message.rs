//! The materializing deserializer's expected interface (§6 of the spec):
//! an external collaborator this crate only consumes, never implements.
//!
//! Generated "variant" accessor classes (`pbviewc`'s codegen counterpart
//! to [`crate::view::View`]) dispatch to an owned message through this
//! trait when their active arm is the owned-value arm rather than a
//! `View`. This crate provides the trait only; a real owned-message type
//! (hand-written, or produced by a separate materializing generator this
//! crate does not implement) supplies it.

use crate::errors::Result;

/// An owned message type constructible from a byte slice.
///
/// The "canonical default instance" the spec describes (§6: "a canonical
/// default instance whose scalar accessors yield the schema-declared
/// defaults") is represented by Rust's own [`Default`] rather than a
/// bespoke associated function — a generated owned message's
/// `Default::default()` already is the schema's zero-value instance, so a
/// separate accessor would only duplicate it.
pub trait Materialize: Sized + Default {
    /// Parses `bytes` into an owned instance of `Self`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Basic identification for a generated message type, kept from the
/// reader/writer lineage this crate was forked from.
pub trait MessageInfo {
    /// Full message path, in the form `Package.Message`.
    const PATH: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Permissive;
    use crate::types::Int32;
    use crate::view::View;

    #[derive(Default, PartialEq, Debug)]
    struct Dummy {
        a: i32,
    }

    impl Materialize for Dummy {
        fn from_bytes(bytes: &[u8]) -> Result<Self> {
            let view = View::<Permissive>::new(bytes);
            Ok(Dummy { a: view.get::<Int32>(1)?.unwrap_or_default() })
        }
    }

    impl MessageInfo for Dummy {
        const PATH: &'static str = "test.Dummy";
    }

    #[test]
    fn from_bytes_decodes_through_a_view() {
        let bytes: &[u8] = &[0x08, 0x96, 0x01]; // field 1 = 150
        assert_eq!(Dummy::from_bytes(bytes).unwrap(), Dummy { a: 150 });
    }

    #[test]
    fn default_instance_is_the_schema_zero_value() {
        assert_eq!(Dummy::default(), Dummy { a: 0 });
    }

    #[test]
    fn message_info_exposes_its_full_path() {
        assert_eq!(Dummy::PATH, "test.Dummy");
    }
}
