//! The schema-to-accessor code generator: given an in-memory schema
//! model (see [`schema`]), emits the typed-view and variant accessor
//! source text a caller compiles against `pbview`.
//!
//! This crate does not parse `.proto` files and does not link against
//! `pbview` — it only emits Rust source that refers to `pbview` by name,
//! to be compiled into whatever crate owns the generated files.

pub mod codegen;
pub mod schema;

#[cfg(feature = "std")]
pub mod cli;
