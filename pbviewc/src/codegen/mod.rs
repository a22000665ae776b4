//! Source-text emitters (C6, C7): each takes a [`crate::schema::FileDescriptor`]
//! and returns a `String` of generated Rust, written directly without an
//! intermediate AST — the same approach the reference code generator
//! takes, writing straight to an output stream.

pub mod mapping;
mod module;
pub mod variant;
pub mod view;
