//! Shared fixture schema for the integration tests in this directory: a
//! small `Person`/`Address` pair exercising every field shape the
//! generators handle (singular scalar, singular scalar with an explicit
//! schema default, singular enum, singular submessage, unpacked repeated
//! scalar, packed repeated scalar, repeated submessage, packed repeated
//! enum).

use pbviewc::schema::{
    FieldDescriptor, FieldKind, FileDescriptor, Label, MessageDescriptor, ScalarType,
};

pub fn person_file() -> FileDescriptor {
    FileDescriptor {
        name: "person.proto".to_string(),
        package: "demo".to_string(),
        messages: vec![person_message(), address_message()],
    }
}

fn person_message() -> MessageDescriptor {
    MessageDescriptor {
        name: "Person".to_string(),
        fields: vec![
            FieldDescriptor {
                name: "name".to_string(),
                number: 1,
                label: Label::Singular,
                kind: FieldKind::Scalar(ScalarType::String),
                default: None,
            },
            FieldDescriptor {
                name: "id".to_string(),
                number: 2,
                label: Label::Singular,
                kind: FieldKind::Scalar(ScalarType::Int32),
                default: None,
            },
            FieldDescriptor {
                name: "tags".to_string(),
                number: 3,
                label: Label::Repeated { packed: false },
                kind: FieldKind::Scalar(ScalarType::String),
                default: None,
            },
            FieldDescriptor {
                name: "scores".to_string(),
                number: 4,
                label: Label::Repeated { packed: true },
                kind: FieldKind::Scalar(ScalarType::Sint32),
                default: None,
            },
            FieldDescriptor {
                name: "address".to_string(),
                number: 5,
                label: Label::Singular,
                kind: FieldKind::Message { message_name: "Address".to_string() },
                default: None,
            },
            FieldDescriptor {
                name: "addresses".to_string(),
                number: 6,
                label: Label::Repeated { packed: false },
                kind: FieldKind::Message { message_name: "Address".to_string() },
                default: None,
            },
            FieldDescriptor {
                name: "status".to_string(),
                number: 7,
                label: Label::Singular,
                kind: FieldKind::Enum { rust_path: "crate::proto::Status".to_string() },
                default: None,
            },
            // A proto2-style explicit schema default, threaded straight
            // through to the `F()` fallback instead of the implicit
            // type-zero value `name` above falls back to.
            FieldDescriptor {
                name: "nickname".to_string(),
                number: 8,
                label: Label::Singular,
                kind: FieldKind::Scalar(ScalarType::String),
                default: Some("\"anon\"".to_string()),
            },
            FieldDescriptor {
                name: "past_statuses".to_string(),
                number: 9,
                label: Label::Repeated { packed: true },
                kind: FieldKind::Enum { rust_path: "crate::proto::Status".to_string() },
                default: None,
            },
        ],
    }
}

fn address_message() -> MessageDescriptor {
    MessageDescriptor {
        name: "Address".to_string(),
        fields: vec![
            FieldDescriptor {
                name: "street".to_string(),
                number: 1,
                label: Label::Singular,
                kind: FieldKind::Scalar(ScalarType::String),
                default: None,
            },
            FieldDescriptor {
                name: "zip".to_string(),
                number: 2,
                label: Label::Singular,
                kind: FieldKind::Scalar(ScalarType::Int32),
                default: None,
            },
        ],
    }
}
