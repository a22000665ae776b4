//! The schema model (C6's input): an in-memory description of a message
//! set, handed to this crate by whatever loads and resolves `.proto`
//! files (or any other schema source) into this shape. This crate reads
//! the model; it does not parse schema text itself.

/// One schema file: a package name and the messages declared in it, in
/// declaration order.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    pub name: String,
    pub package: String,
    pub messages: Vec<MessageDescriptor>,
}

/// One message type: a name and its fields, in declaration order.
#[derive(Debug, Clone)]
pub struct MessageDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// The protobuf scalar types, independent of wire encoding (that's
/// [`crate::codegen::mapping`]'s job).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

/// What kind of value a field holds, beyond its repetition.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Scalar(ScalarType),
    /// `rust_path` is the already-resolved Rust path to the externally
    /// defined enum type (e.g. `crate::proto::Color`), implementing
    /// `From<i32>`.
    Enum { rust_path: String },
    /// `message_name` is the referenced message's own schema name —
    /// assumed to live in the same generated module.
    Message { message_name: String },
}

/// A field's repetition, and whether a repeated field is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Singular,
    Repeated { packed: bool },
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field's `snake_case` name, used verbatim for generated method
    /// names (`has_NAME`, `opt_NAME`, `NAME`).
    pub name: String,
    pub number: u32,
    pub label: Label,
    pub kind: FieldKind,
    /// A literal Rust expression for this field's schema-declared default
    /// (a proto2 `[default = ...]` value, already resolved to source text
    /// by whatever populates this descriptor), spliced verbatim into the
    /// singular accessor's absent-field fallback. `None` for a field with
    /// no explicit default — proto3 fields, and proto2 fields that don't
    /// declare one, both fall back to the implicit type-zero value
    /// instead (see `codegen::mapping::scalar_default_expr`). Ignored for
    /// repeated and submessage fields.
    pub default: Option<String>,
}

/// The seam between this crate and a `.proto`-parsing front end this
/// crate does not implement (parsing `.proto` files is explicitly out
/// of scope). A real front end resolves `proto_path` against `file` and
/// returns the parsed, import-resolved descriptor; [`crate::cli`] only
/// depends on this trait, never on a concrete parser.
pub trait SchemaLoader {
    fn load(&self, proto_path: &[std::path::PathBuf], file: &str) -> Result<FileDescriptor, String>;
}

impl FieldDescriptor {
    pub fn is_repeated(&self) -> bool {
        matches!(self.label, Label::Repeated { .. })
    }

    pub fn is_packed(&self) -> bool {
        matches!(self.label, Label::Repeated { packed: true })
    }

    /// `FOO_FIELD_NUMBER`, the constant name the generated accessor
    /// class binds its field number to.
    pub fn number_const_name(&self) -> String {
        format!("{}_FIELD_NUMBER", self.name.to_uppercase())
    }
}
