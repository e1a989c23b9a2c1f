//! Allocation size contract for `new`.
//!
//! Compiled programs pass the block size as a 32-bit signed integer. The
//! platform allocator takes a `size_t`, so the value goes through the usual C
//! integer conversion: non-negative sizes pass through unchanged, negative
//! sizes sign-extend into requests no allocator can satisfy.

/// Convert a Pascal `integer` block size into the byte count handed to the
/// platform allocator.
#[inline]
#[must_use]
pub const fn request_bytes(size: i32) -> usize {
    size as isize as usize
}
