//! Threshold-gated fallback approximations.
//!
//! When the blended prediction misses by more than the threshold, a cheaper
//! substitute value is derived from the order-2 and order-3 candidates using
//! shift-based fixed-point approximations. `delta_e` picks the formula for
//! the whole run; it is resolved to a [`FallbackKind`] once, at encoder
//! construction, so the per-index loop carries no branch on it.

use crate::error::CardiqError;

/// Highest shift amount with defined `i64` semantics.
const MAX_SHIFT: u32 = 63;

/// Fallback formula resolved from `delta_e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    /// `delta_e == 0`: unit ratio of the predictor sum. Evaluates to exactly
    /// 1.0 whenever the sum is nonzero.
    UnitRatio,
    /// `delta_e == 2`: shifted blend approximating `x2 * ~0.0091 + x3 * ~0.589`.
    ShiftBlendFine,
    /// `delta_e == 3`: coarser shifted blend.
    ShiftBlendCoarse,
    /// `delta_e >= 4`: order-2 candidate shifted by `delta_e`, order-3 added whole.
    ShiftSecond(u32),
    /// `delta_e < 0`: roles interchanged, order-3 candidate shifted by `|delta_e|`.
    ShiftThird(u32),
}

impl FallbackKind {
    /// Map `delta_e` to its formula.
    ///
    /// `1`, non-integer values, and shift amounts past 63 bits match no
    /// defined branch and are rejected up front.
    pub fn resolve(delta_e: f64) -> Result<Self, CardiqError> {
        if !delta_e.is_finite() || delta_e.fract() != 0.0 {
            return Err(CardiqError::UnsupportedConfiguration { delta_e });
        }
        if delta_e == 0.0 {
            Ok(FallbackKind::UnitRatio)
        } else if delta_e == 2.0 {
            Ok(FallbackKind::ShiftBlendFine)
        } else if delta_e == 3.0 {
            Ok(FallbackKind::ShiftBlendCoarse)
        } else if delta_e >= 4.0 && delta_e <= MAX_SHIFT as f64 {
            Ok(FallbackKind::ShiftSecond(delta_e as u32))
        } else if delta_e < 0.0 && -delta_e <= MAX_SHIFT as f64 {
            Ok(FallbackKind::ShiftThird((-delta_e) as u32))
        } else {
            Err(CardiqError::UnsupportedConfiguration { delta_e })
        }
    }

    /// Evaluate the formula on the order-2 and order-3 candidates.
    ///
    /// Returns `None` when the formula's denominator is zero; the caller
    /// decides how to flag the index.
    pub fn evaluate(self, second_order: f64, third_order: f64) -> Option<f64> {
        match self {
            FallbackKind::UnitRatio => {
                let sum = second_order + third_order;
                if sum == 0.0 {
                    None
                } else {
                    Some((second_order + third_order) / sum)
                }
            }
            FallbackKind::ShiftBlendFine => Some(
                shr(second_order, 2)
                    + shr(second_order, 4)
                    + shr(second_order, 7)
                    + shr(third_order, 1)
                    + shr(third_order, 2)
                    + shr(third_order, 5),
            ),
            FallbackKind::ShiftBlendCoarse => Some(
                shr(second_order, 4)
                    + shr(second_order, 5)
                    + shr(second_order, 6)
                    + shr(third_order, 1)
                    + shr(third_order, 2)
                    + shr(third_order, 3),
            ),
            FallbackKind::ShiftSecond(bits) => Some(shr(second_order, bits) + third_order),
            FallbackKind::ShiftThird(bits) => Some(shr(third_order, bits) + second_order),
        }
    }
}

/// Arithmetic right shift of the truncated integer part.
#[inline]
fn shr(value: f64, bits: u32) -> f64 {
    ((value as i64) >> bits) as f64
}
