//! A zero-copy, lazily-decoding reader for protobuf wire-format messages.
//!
//! A [`View`] never eagerly decodes a message into a heap structure: it
//! holds a borrowed byte range and decodes individual fields only when an
//! accessor asks for them. `pbviewc` is the matching code generator that,
//! given a schema description, emits typed accessor classes whose calls
//! dispatch into this crate.

#![cfg_attr(not(feature = "std"), no_std)]

mod mode;
mod repeated;
mod seek;
mod types;
mod view;
mod wire;

pub mod errors;
pub mod message;

pub use crate::errors::{Error, Result};
pub use crate::message::{Materialize, MessageInfo};
pub use crate::mode::{Mode, Permissive, Strict, Trusted};
pub use crate::repeated::{PackedRepeated, Repeated, RepeatedSubmessage};
pub use crate::types::{
    Bool, Bytes, Double, Enum, EnumUntyped, FieldType, Fixed32, Fixed64, Float, Int32, Int64,
    Message, MessageStrict, Serialization, Sfixed32, Sfixed64, Sint32, Sint64, Str, Uint32,
    Uint64, WireType,
};
pub use crate::view::View;
