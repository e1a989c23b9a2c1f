//! Tooling around the Pascal runtime library.
//!
//! This crate provides:
//! - Symbol manifest: every entry point compiled programs may call
//! - Include generation: the NASM `pascal.inc` the compiler's output pulls in
//! - Trace validation: schema checks for `PASCALRT_TRACE` JSONL output

#![forbid(unsafe_code)]

pub mod error;
pub mod nasm_include;
pub mod structured_log;
pub mod symbols;

pub use error::HarnessError;
pub use symbols::{Origin, RUNTIME_SYMBOLS, RuntimeSymbol, ValueKind};
