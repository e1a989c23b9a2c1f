//! Manifest of the runtime's C-level entry points.
//!
//! One row per symbol a compiled program may reference, with the C types of
//! its parameters and result. Single-precision forwards name the
//! double-precision function they widen into.

use std::fmt::Write as _;

use serde::Serialize;

/// C-level type of a parameter or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Void,
    Int,
    Float,
    Double,
    CString,
    Pointer,
}

impl ValueKind {
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::CString => "const char *",
            Self::Pointer => "void *",
        }
    }
}

/// Where the definition comes from at link time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Defined by `libpascalrt.a`.
    Runtime,
    /// Defined by the platform math library.
    Libm,
    /// Defined by the compiled program itself.
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeSymbol {
    pub name: &'static str,
    pub params: &'static [ValueKind],
    pub returns: ValueKind,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegates_to: Option<&'static str>,
}

impl RuntimeSymbol {
    const fn new(
        name: &'static str,
        params: &'static [ValueKind],
        returns: ValueKind,
        origin: Origin,
    ) -> Self {
        Self {
            name,
            params,
            returns,
            origin,
            delegates_to: None,
        }
    }

    const fn forward(name: &'static str, target: &'static str, returns: ValueKind) -> Self {
        Self {
            name,
            params: &[ValueKind::Float],
            returns,
            origin: Origin::Runtime,
            delegates_to: Some(target),
        }
    }

    /// C prototype, e.g. `float sin32(float)`.
    #[must_use]
    pub fn c_prototype(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{} {}(", self.returns.c_name(), self.name);
        if self.params.is_empty() {
            out.push_str("void");
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(param.c_name());
        }
        out.push(')');
        out
    }

    /// Whether compiled code calls this symbol, as opposed to defining it
    /// or only being called by it.
    #[must_use]
    pub fn is_program_import(&self) -> bool {
        self.origin != Origin::Program && self.name != "main"
    }
}

use Origin::{Libm, Program, Runtime};
use ValueKind::{CString, Double, Int, Pointer, Void};

pub const RUNTIME_SYMBOLS: &[RuntimeSymbol] = &[
    // Entry
    RuntimeSymbol::new("main", &[], Int, Runtime),
    RuntimeSymbol::new("asm_main", &[], Int, Program),
    // Output
    RuntimeSymbol::new("write", &[CString], Void, Runtime),
    RuntimeSymbol::new("writeln", &[CString], Void, Runtime),
    RuntimeSymbol::new("writef", &[Double], Void, Runtime),
    RuntimeSymbol::new("writei", &[Int], Void, Runtime),
    RuntimeSymbol::new("writelnf", &[Double], Void, Runtime),
    RuntimeSymbol::new("writelni", &[Int], Void, Runtime),
    // Input
    RuntimeSymbol::new("eof", &[], Int, Runtime),
    RuntimeSymbol::new("readln", &[], Void, Runtime),
    // Allocation
    RuntimeSymbol::new("new", &[Int], Pointer, Runtime),
    // Math
    RuntimeSymbol::new("iround", &[Double], Int, Runtime),
    RuntimeSymbol::new("sin", &[Double], Double, Libm),
    RuntimeSymbol::new("cos", &[Double], Double, Libm),
    RuntimeSymbol::new("sqrt", &[Double], Double, Libm),
    RuntimeSymbol::new("exp", &[Double], Double, Libm),
    RuntimeSymbol::new("round", &[Double], Double, Libm),
    // Single-precision forwards
    RuntimeSymbol::forward("sin32", "sin", ValueKind::Float),
    RuntimeSymbol::forward("cos32", "cos", ValueKind::Float),
    RuntimeSymbol::forward("sqrt32", "sqrt", ValueKind::Float),
    RuntimeSymbol::forward("exp32", "exp", ValueKind::Float),
    RuntimeSymbol::forward("round32", "round", ValueKind::Float),
    RuntimeSymbol::forward("iround32", "iround", Int),
    RuntimeSymbol::forward("writef32", "writef", Void),
    RuntimeSymbol::forward("writelnf32", "writelnf", Void),
];

/// Look up a symbol by its unprefixed C name.
#[must_use]
pub fn find(name: &str) -> Option<&'static RuntimeSymbol> {
    RUNTIME_SYMBOLS.iter().find(|sym| sym.name == name)
}

/// Symbols compiled code may `call`.
pub fn program_imports() -> impl Iterator<Item = &'static RuntimeSymbol> {
    RUNTIME_SYMBOLS.iter().filter(|sym| sym.is_program_import())
}

/// One line per symbol: prototype, origin, and forward target if any.
#[must_use]
pub fn render_plain() -> String {
    let mut out = String::new();
    for sym in RUNTIME_SYMBOLS {
        let origin = match sym.origin {
            Runtime => "runtime",
            Libm => "libm",
            Program => "program",
        };
        let _ = write!(out, "{:<32} {origin}", sym.c_prototype());
        if let Some(target) = sym.delegates_to {
            let _ = write!(out, " -> {target}");
        }
        out.push('\n');
    }
    out
}

/// The manifest as a pretty-printed JSON array.
pub fn render_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(RUNTIME_SYMBOLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in RUNTIME_SYMBOLS.iter().enumerate() {
            for b in &RUNTIME_SYMBOLS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn forwards_take_float_and_target_a_double_function() {
        for sym in RUNTIME_SYMBOLS.iter().filter(|s| s.delegates_to.is_some()) {
            assert_eq!(sym.params, &[ValueKind::Float], "{}", sym.name);
            let target = find(sym.delegates_to.unwrap_or_default()).expect("target listed");
            assert_eq!(target.params, &[Double], "{}", target.name);
            assert_eq!(sym.name, format!("{}32", target.name));
        }
    }

    #[test]
    fn prototypes() {
        assert_eq!(find("sin32").unwrap().c_prototype(), "float sin32(float)");
        assert_eq!(find("write").unwrap().c_prototype(), "void write(const char *)");
        assert_eq!(find("eof").unwrap().c_prototype(), "int eof(void)");
        assert_eq!(find("new").unwrap().c_prototype(), "void * new(int)");
    }

    #[test]
    fn entry_symbols_are_not_imports() {
        assert!(!find("main").unwrap().is_program_import());
        assert!(!find("asm_main").unwrap().is_program_import());
        assert!(find("writeln").unwrap().is_program_import());
        assert!(find("sqrt").unwrap().is_program_import());
    }

    #[test]
    fn unimplemented_builtins_are_absent() {
        assert!(find("read").is_none());
        assert!(find("ord").is_none());
    }
}
