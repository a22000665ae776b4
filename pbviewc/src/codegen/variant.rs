//! C7: the variant accessor generator. Emits, for every message, a sum
//! type wrapping either a [`pbview::View`]-backed typed view (from
//! `codegen::view`) or an externally supplied owned value, dispatching
//! each accessor call to whichever arm is active.
//!
//! Ported from `VarImpl` in the reference code generator. That design
//! dispatches through `std::visit` over a closure that calls
//! `field_name()` on whatever concrete type is active — C++ template
//! instantiation resolves that call per type with no shared interface
//! declared anywhere. Rust has no equivalent duck typing, so the same
//! dispatch needs an explicit trait (`FooOwned` below) naming the
//! surface an owned message type must provide; `FooView` (from
//! `codegen::view`) already provides the matching surface as plain
//! inherent methods and needs no trait of its own, since the dispatcher
//! calls it directly by its own concrete type.
//!
//! `VarImpl::writeViewSizeGetter`/`writeViewIndexGetter` are no-ops and
//! `writeViewGetter`/`writeViewOptGetter` both return early for repeated
//! fields — the reference generator never gives the variant a repeated-
//! field accessor surface at all. This generator matches that: only
//! singular fields get `has_F`/`opt_F`/`F` here.

use std::fmt::Write as _;

use crate::codegen::mapping;
use crate::codegen::module::{close_package_mods, open_package_mods};
use crate::schema::{FieldDescriptor, FieldKind, FileDescriptor, MessageDescriptor};

/// Emits the full `.pbvar.rs` module text for one schema file.
pub fn emit_variant_module(file: &FileDescriptor) -> String {
    let mut out = String::new();
    writeln!(out, "// Generated by pbviewc from `{}`. Do not edit by hand.", file.name).unwrap();
    writeln!(out, "// Pairs with the `{}` typed-view module.", view_module_stem(&file.name)).unwrap();
    writeln!(out).unwrap();
    open_package_mods(&mut out, &file.package);
    for message in &file.messages {
        emit_owned_trait(&mut out, message);
        emit_owned_ref_blanket_impl(&mut out, message);
        emit_variant_enum(&mut out, message);
    }
    close_package_mods(&mut out, &file.package);
    out
}

fn view_module_stem(proto_file: &str) -> String {
    proto_file.strip_suffix(".proto").unwrap_or(proto_file).to_string() + ".pbview"
}

fn singular_fields(msg: &MessageDescriptor) -> impl Iterator<Item = &FieldDescriptor> {
    msg.fields.iter().filter(|f| !f.is_repeated())
}

/// `NAME` -> `Name`, the associated-type identifier for a submessage
/// field's owned counterpart (one per submessage field, not one per
/// referenced message type, since two fields may reference the same
/// message).
fn assoc_type_name(field_name: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for c in field_name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn emit_owned_trait(out: &mut String, msg: &MessageDescriptor) {
    let name = &msg.name;
    writeln!(out, "/// What an owned `{name}` message needs to provide for `{name}Var`'s").unwrap();
    writeln!(out, "/// owned arm to dispatch through — the same named accessors `{name}View`").unwrap();
    writeln!(out, "/// exposes, minus the wire-decode `Result`.").unwrap();
    writeln!(out, "pub trait {name}Owned {{").unwrap();

    let mut first = true;
    for field in singular_fields(msg) {
        if let FieldKind::Message { message_name } = &field.kind {
            if !first {
                writeln!(out).unwrap();
            }
            first = false;
            writeln!(out, "    type {}: {}Owned;", assoc_type_name(&field.name), message_name).unwrap();
        }
    }
    if !first {
        writeln!(out).unwrap();
    }

    let mut first_method = true;
    for field in singular_fields(msg) {
        if !first_method {
            writeln!(out).unwrap();
        }
        first_method = false;
        emit_owned_trait_field_methods(out, field);
    }

    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn emit_owned_trait_field_methods(out: &mut String, field: &FieldDescriptor) {
    let name = &field.name;
    match &field.kind {
        FieldKind::Scalar(scalar) => {
            let value_ty = mapping::scalar_value_type_elided(*scalar);
            writeln!(out, "    fn has_{name}(&self) -> bool;").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<{value_ty}>;").unwrap();
            writeln!(out, "    fn {name}(&self) -> {value_ty};").unwrap();
        }
        FieldKind::Enum { rust_path } => {
            writeln!(out, "    fn has_{name}(&self) -> bool;").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<{rust_path}>;").unwrap();
            writeln!(out, "    fn {name}(&self) -> {rust_path};").unwrap();
        }
        FieldKind::Message { .. } => {
            let assoc = assoc_type_name(name);
            writeln!(out, "    fn has_{name}(&self) -> bool;").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<&Self::{assoc}>;").unwrap();
            writeln!(out, "    fn {name}(&self) -> &Self::{assoc};").unwrap();
        }
    }
}

fn emit_owned_ref_blanket_impl(out: &mut String, msg: &MessageDescriptor) {
    let name = &msg.name;
    writeln!(
        out,
        "/// A reference to an owned `{name}` is itself a valid owned arm — lets a"
    )
    .unwrap();
    writeln!(out, "/// `{name}Var` borrow from a message it doesn't own.").unwrap();
    writeln!(out, "impl<'b, T: {name}Owned> {name}Owned for &'b T {{").unwrap();

    let mut first = true;
    for field in singular_fields(msg) {
        if let FieldKind::Message { .. } = &field.kind {
            if !first {
                writeln!(out).unwrap();
            }
            first = false;
            writeln!(out, "    type {} = T::{};", assoc_type_name(&field.name), assoc_type_name(&field.name))
                .unwrap();
        }
    }
    if !first {
        writeln!(out).unwrap();
    }

    let mut first_method = true;
    for field in singular_fields(msg) {
        if !first_method {
            writeln!(out).unwrap();
        }
        first_method = false;
        emit_owned_ref_field_methods(out, field);
    }

    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn emit_owned_ref_field_methods(out: &mut String, field: &FieldDescriptor) {
    let name = &field.name;
    match &field.kind {
        FieldKind::Scalar(scalar) => {
            let value_ty = mapping::scalar_value_type_elided(*scalar);
            writeln!(out, "    fn has_{name}(&self) -> bool {{ (**self).has_{name}() }}").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<{value_ty}> {{ (**self).opt_{name}() }}").unwrap();
            writeln!(out, "    fn {name}(&self) -> {value_ty} {{ (**self).{name}() }}").unwrap();
        }
        FieldKind::Enum { rust_path } => {
            writeln!(out, "    fn has_{name}(&self) -> bool {{ (**self).has_{name}() }}").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<{rust_path}> {{ (**self).opt_{name}() }}").unwrap();
            writeln!(out, "    fn {name}(&self) -> {rust_path} {{ (**self).{name}() }}").unwrap();
        }
        FieldKind::Message { .. } => {
            let assoc = assoc_type_name(name);
            writeln!(out, "    fn has_{name}(&self) -> bool {{ (**self).has_{name}() }}").unwrap();
            writeln!(out, "    fn opt_{name}(&self) -> Option<&Self::{assoc}> {{ (**self).opt_{name}() }}").unwrap();
            writeln!(out, "    fn {name}(&self) -> &Self::{assoc} {{ (**self).{name}() }}").unwrap();
        }
    }
}

fn emit_variant_enum(out: &mut String, msg: &MessageDescriptor) {
    let name = &msg.name;

    writeln!(out, "pub enum {name}Var<'a, M: pbview::Mode, O: {name}Owned> {{").unwrap();
    writeln!(out, "    View({name}View<'a, M>),").unwrap();
    writeln!(out, "    Owned(O),").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "impl<'a, M: pbview::Mode, O: {name}Owned> {name}Var<'a, M, O> {{").unwrap();

    let mut first = true;
    for field in singular_fields(msg) {
        if !first {
            writeln!(out).unwrap();
        }
        first = false;
        emit_variant_field_dispatch(out, field);
    }

    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn emit_variant_field_dispatch(out: &mut String, field: &FieldDescriptor) {
    let name = &field.name;
    match &field.kind {
        FieldKind::Scalar(scalar) => {
            let value_ty = mapping::scalar_value_type_elided(*scalar);
            writeln!(out, "    pub fn has_{name}(&self) -> bool {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.has_{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => o.has_{name}(),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(out, "    pub fn opt_{name}(&self) -> pbview::Result<Option<{value_ty}>> {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.opt_{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok(o.opt_{name}()),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(out, "    pub fn {name}(&self) -> pbview::Result<{value_ty}> {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok(o.{name}()),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
        }
        FieldKind::Enum { rust_path } => {
            writeln!(out, "    pub fn has_{name}(&self) -> bool {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.has_{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => o.has_{name}(),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(out, "    pub fn opt_{name}(&self) -> pbview::Result<Option<{rust_path}>> {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.opt_{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok(o.opt_{name}()),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(out, "    pub fn {name}(&self) -> pbview::Result<{rust_path}> {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok(o.{name}()),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
        }
        FieldKind::Message { message_name } => {
            let assoc = assoc_type_name(name);
            writeln!(out, "    pub fn has_{name}(&self) -> bool {{").unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => v.has_{name}(),").unwrap();
            writeln!(out, "            Self::Owned(o) => o.has_{name}(),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(
                out,
                "    pub fn opt_{name}(&self) -> pbview::Result<Option<{message_name}Var<'_, M, &O::{assoc}>>> {{"
            )
            .unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => Ok(v.opt_{name}()?.map({message_name}Var::View)),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok(o.opt_{name}().map({message_name}Var::Owned)),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
            writeln!(out).unwrap();
            writeln!(
                out,
                "    pub fn {name}(&self) -> pbview::Result<{message_name}Var<'_, M, &O::{assoc}>> {{"
            )
            .unwrap();
            writeln!(out, "        match self {{").unwrap();
            writeln!(out, "            Self::View(v) => Ok({message_name}Var::View(v.{name}()?)),").unwrap();
            writeln!(out, "            Self::Owned(o) => Ok({message_name}Var::Owned(o.{name}())),").unwrap();
            writeln!(out, "        }}").unwrap();
            writeln!(out, "    }}").unwrap();
        }
    }
}
