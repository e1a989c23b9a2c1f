//! Numeric helpers exposed to compiled programs.
//!
//! The double-precision functions are the only implementations; the
//! single-precision entry points in the ABI layer reach them through
//! [`precision`].

pub mod float;
pub mod precision;
pub mod round;

pub use float::{cos, exp, round, sin, sqrt};
pub use precision::{demote, promote, through_f64};
pub use round::iround;
