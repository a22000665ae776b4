//! C8: external interface glue — argument parsing and the write-two-
//! files-per-schema orchestration, grounded in the reference code
//! generator's own `main()`. `clap`'s old builder API is used instead of
//! its derive macros because that's the API the version this crate pins
//! (`"2.34.0"`) exposes.

use std::fs;
use std::path::PathBuf;

use clap::{App, Arg};

use crate::codegen::{variant, view};
use crate::schema::SchemaLoader;

/// Parses `argv` (excluding argv[0]) and runs the generator, writing
/// `<file>.pbview.rs`/`<file>.pbvar.rs` for every schema file named on
/// the command line. Returns `Err` with a single diagnostic line on any
/// failure; nothing is written for a file that fails to load or emit,
/// and no already-written output from a later failure is rolled back —
/// matching the reference generator's "no partial output on failure"
/// for any *one* file, evaluated file-by-file.
pub fn run(loader: &dyn SchemaLoader, argv: &[String]) -> Result<(), String> {
    let matches = App::new("pbviewc")
        .about("Generates pbview typed-view and variant accessor modules from a schema")
        .arg(
            Arg::with_name("proto_path")
                .long("proto_path")
                .short("I")
                .multiple(true)
                .number_of_values(1)
                .help("Directory to search for imports. May be given multiple times. Defaults to the current directory."),
        )
        .arg(
            Arg::with_name("rust_out")
                .long("rust_out")
                .takes_value(true)
                .required(true)
                .help("Directory to write generated .pbview.rs/.pbvar.rs files into."),
        )
        .arg(Arg::with_name("files").multiple(true).required(true))
        .get_matches_from_safe(std::iter::once("pbviewc".to_string()).chain(argv.iter().cloned()))
        .map_err(|e| e.message)?;

    let mut proto_path: Vec<PathBuf> = matches
        .values_of("proto_path")
        .map(|vs| vs.map(PathBuf::from).collect())
        .unwrap_or_default();
    if proto_path.is_empty() {
        proto_path.push(PathBuf::from("."));
    }

    let mut out_dir = PathBuf::from(matches.value_of("rust_out").expect("required"));
    if !out_dir.as_os_str().is_empty() {
        out_dir = out_dir.to_string_lossy().trim_end_matches('/').into();
    }

    let files: Vec<&str> = matches.values_of("files").expect("required").collect();

    for file in files {
        log::info!("loading schema {file}");
        let descriptor = loader.load(&proto_path, file).map_err(|e| {
            log::error!("{file}: {e}");
            e
        })?;

        let view_src = view::emit_view_module(&descriptor);
        let variant_src = variant::emit_variant_module(&descriptor);

        let stem = file.strip_suffix(".proto").unwrap_or(file);
        let view_path = out_dir.join(format!("{stem}.pbview.rs"));
        let variant_path = out_dir.join(format!("{stem}.pbvar.rs"));

        fs::write(&view_path, view_src).map_err(|e| format!("{}: {e}", view_path.display()))?;
        fs::write(&variant_path, variant_src).map_err(|e| format!("{}: {e}", variant_path.display()))?;
        log::info!("wrote {} and {}", view_path.display(), variant_path.display());
    }

    Ok(())
}
