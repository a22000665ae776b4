use std::path::PathBuf;

use pbviewc::schema::{FileDescriptor, SchemaLoader};

/// No `.proto` front end ships with this crate (parsing schema files is
/// explicitly out of scope); a real deployment swaps this out for one
/// that resolves `proto_path` and parses `file` into a [`FileDescriptor`].
struct UnimplementedLoader;

impl SchemaLoader for UnimplementedLoader {
    fn load(&self, _proto_path: &[PathBuf], file: &str) -> Result<FileDescriptor, String> {
        Err(format!(
            "{file}: no schema front end is configured in this build (schema parsing is out of scope for pbviewc itself)"
        ))
    }
}

fn main() {
    env_logger::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(message) = pbviewc::cli::run(&UnimplementedLoader, &argv) {
        eprintln!(
            "Usage: pbviewc [OPTION] PROTO_FILES\n\
             \x20 -IPATH, --proto_path=PATH   Directory to search for imports. May be\n\
             \x20                             specified multiple times. Defaults to the\n\
             \x20                             current directory.\n\
             \x20 --rust_out=OUT_DIR          Generate pbview typed-view and variant modules."
        );
        log::error!("{message}");
        std::process::exit(1);
    }
}
