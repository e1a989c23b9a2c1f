//! # pascalrt-core
//!
//! Safe Rust implementations of the runtime services that compiled Pascal
//! programs link against.
//!
//! Everything here is plain, testable Rust: numeric rendering for the write
//! family, the rounding helper, the single-precision bridge, the allocation
//! size contract, and the diagnostics configuration and trace records. The
//! `extern "C"` surface lives in `pascalrt-abi`. No `unsafe` code is
//! permitted at the crate level.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod malloc;
pub mod math;
pub mod stdio;
pub mod trace;

pub use error::{ConfigError, TraceError};
