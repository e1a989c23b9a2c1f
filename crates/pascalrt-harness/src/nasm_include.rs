//! `pascal.inc` generation.
//!
//! Compiled programs open with `%include "pascal.inc"`; the include declares
//! every runtime and libm function they may call as `extern`.

use std::fmt::Write as _;

use crate::symbols::{Origin, program_imports};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncludeOptions {
    /// Prefix each symbol with `_`, as 32-bit Windows and Mach-O objects
    /// expect for C functions.
    pub underscore: bool,
}

/// Linker-level name for a C symbol.
#[must_use]
pub fn mangle(name: &str, options: IncludeOptions) -> String {
    if options.underscore {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Render the include file.
#[must_use]
pub fn render_include(options: IncludeOptions) -> String {
    let mut out = String::from("; pascal.inc: runtime entry points for compiled Pascal programs\n");

    for (origin, heading) in [(Origin::Runtime, "libpascalrt"), (Origin::Libm, "libm")] {
        let _ = writeln!(out, "\n; {heading}");
        for sym in program_imports().filter(|sym| sym.origin == origin) {
            let _ = writeln!(
                out,
                "extern {:<16} ; {}",
                mangle(sym.name, options),
                sym.c_prototype()
            );
        }
    }
    out
}
