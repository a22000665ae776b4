//! Package-to-module nesting shared by both emitters: a schema package
//! `a.b` becomes `pub mod a { pub mod b { ... } }`, mirroring the
//! reference generator's own `packageToNamespace` (which instead joins
//! on `::` into one open namespace — Rust has no equivalent of reopening
//! a namespace across files, so nested `mod` blocks are the idiomatic
//! stand-in).

use std::fmt::Write as _;

pub fn open_package_mods(out: &mut String, package: &str) {
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        writeln!(out, "pub mod {segment} {{").unwrap();
    }
}

pub fn close_package_mods(out: &mut String, package: &str) {
    for _ in package.split('.').filter(|s| !s.is_empty()) {
        writeln!(out, "}}").unwrap();
    }
}
