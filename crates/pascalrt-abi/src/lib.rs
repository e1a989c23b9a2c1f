// Every export takes values straight from compiled Pascal code; the contracts
// are documented once per module rather than per function.
#![allow(clippy::missing_safety_doc)]
//! # pascalrt-abi
//!
//! `extern "C"` boundary that compiled Pascal programs call into.
//!
//! ```text
//! generated assembly -> ABI entry (this crate) -> pascalrt-core -> C stdio / malloc / libm
//! ```
//!
//! Symbols are exported unmangled in release builds only. Debug builds, and
//! with them every test binary, keep Rust-mangled names: an unmangled `write`
//! would replace write(2) for the test harness itself. Build the runtime with
//! `cargo build --release -p pascalrt` before linking it against a program.

#[macro_use]
mod macros;

pub mod cstdio;
mod runtime_trace;

pub mod malloc_abi;
pub mod math_abi;
pub mod startup_abi;
pub mod stdio_abi;
