//! The declared-type mapping table (§4.6): for each schema field, the
//! Rust value type a getter returns and the `pbview` declared type its
//! accessor reads through.

use crate::schema::{FieldDescriptor, FieldKind, ScalarType};

/// The Rust type a singular field's `opt_F`/`F` getters return, ignoring
/// repetition (repeated fields are handled by the caller, which wraps
/// this in `PackedRepeated<..>`/`Repeated<..>`/a generated view type).
pub fn scalar_value_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Double => "f64",
        ScalarType::Float => "f32",
        ScalarType::Int32 => "i32",
        ScalarType::Int64 => "i64",
        ScalarType::Uint32 => "u32",
        ScalarType::Uint64 => "u64",
        ScalarType::Sint32 => "i32",
        ScalarType::Sint64 => "i64",
        ScalarType::Fixed32 => "u32",
        ScalarType::Fixed64 => "u64",
        ScalarType::Sfixed32 => "i32",
        ScalarType::Sfixed64 => "i64",
        ScalarType::Bool => "bool",
        ScalarType::String => "&'a str",
        ScalarType::Bytes => "&'a [u8]",
    }
}

/// The Rust type a singular field's getters return when the return type
/// is tied to `&self` rather than the view's backing buffer's own `'a`
/// (used by the generated accessor classes themselves — see
/// `SPEC_FULL.md`'s note on why generated code elides to `&self`).
pub fn scalar_value_type_elided(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "&str",
        ScalarType::Bytes => "&[u8]",
        other => scalar_value_type(other),
    }
}

/// `pbview`'s declared-type marker for a singular scalar/enum field.
pub fn pbview_scalar_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Double => "pbview::Double",
        ScalarType::Float => "pbview::Float",
        ScalarType::Int32 => "pbview::Int32",
        ScalarType::Int64 => "pbview::Int64",
        ScalarType::Uint32 => "pbview::Uint32",
        ScalarType::Uint64 => "pbview::Uint64",
        ScalarType::Sint32 => "pbview::Sint32",
        ScalarType::Sint64 => "pbview::Sint64",
        ScalarType::Fixed32 => "pbview::Fixed32",
        ScalarType::Fixed64 => "pbview::Fixed64",
        ScalarType::Sfixed32 => "pbview::Sfixed32",
        ScalarType::Sfixed64 => "pbview::Sfixed64",
        ScalarType::Bool => "pbview::Bool",
        ScalarType::String => "pbview::Str",
        ScalarType::Bytes => "pbview::Bytes",
    }
}

/// The literal Rust expression for a scalar type's implicit zero value,
/// used by `F()`'s absent-field fallback when a field declares no
/// explicit schema default (`FieldDescriptor::default` is `None`) —
/// proto3 fields, and proto2 fields with no `[default = ...]`.
pub fn scalar_default_expr(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Double => "0.0f64",
        ScalarType::Float => "0.0f32",
        ScalarType::Bool => "false",
        ScalarType::String => "\"\"",
        ScalarType::Bytes => "&[]",
        _ => "0",
    }
}

/// `pbview`'s declared type for a field in repeated position: enums
/// collapse to the untyped raw-`i32` marker in repeated position (see
/// `pbview::EnumUntyped`'s doc comment for why).
pub fn pbview_repeated_element_type(field: &FieldDescriptor) -> String {
    match &field.kind {
        FieldKind::Scalar(scalar) => pbview_scalar_type(*scalar).to_string(),
        FieldKind::Enum { .. } => "pbview::EnumUntyped".to_string(),
        FieldKind::Message { .. } => unreachable!("repeated message fields don't go through FieldType"),
    }
}
