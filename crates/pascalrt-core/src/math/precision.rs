//! Promote/delegate/demote bridge.
//!
//! Compiled programs built with 32-bit `real` push a 4-byte float where the C
//! math library expects an 8-byte double. Each single-precision entry point
//! widens its argument, calls the double-precision implementation, and (for
//! pure math) narrows the result again. Precision lost in the round trip is
//! accepted as-is.

/// Widen a single-precision argument. Exact for every `f32`.
#[inline]
#[must_use]
pub fn promote(f: f32) -> f64 {
    f64::from(f)
}

/// Narrow a double-precision result, rounding to nearest.
#[inline]
#[must_use]
pub fn demote(x: f64) -> f32 {
    x as f32
}

/// Run `op` on the widened value of `f` and narrow the result.
#[inline]
#[must_use]
pub fn through_f64(f: f32, op: fn(f64) -> f64) -> f32 {
    demote(op(promote(f)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{cos, exp, round, sin, sqrt};

    const SAMPLES: [f32; 9] = [0.0, -0.0, 0.5, -2.5, 1.0e-3, 3.141_592_7, 42.0, 1.0e20, -7.25];

    #[test]
    fn promote_is_exact() {
        for f in SAMPLES {
            assert_eq!(demote(promote(f)).to_bits(), f.to_bits());
        }
    }

    #[test]
    fn through_f64_matches_widen_then_narrow() {
        let ops: [fn(f64) -> f64; 5] = [sin, cos, sqrt, exp, round];
        for op in ops {
            for f in SAMPLES {
                let expected = op(f64::from(f)) as f32;
                let got = through_f64(f, op);
                assert!(
                    got.to_bits() == expected.to_bits() || (got.is_nan() && expected.is_nan()),
                    "{f}: {got} != {expected}"
                );
            }
        }
    }

    #[test]
    fn demote_overflows_to_infinity() {
        assert_eq!(through_f64(100.0, exp), f32::INFINITY);
    }
}
