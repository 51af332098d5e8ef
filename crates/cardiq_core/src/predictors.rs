//! Candidate linear predictors over recent sample history.

/// Candidate predictions and slope parameters at one index.
///
/// All five values depend only on the three preceding samples, so a set can
/// be formed for any index from 3 onward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidates {
    /// Order-1 hold: `x[i-1]`
    pub first_order: f64,
    /// Order-2 linear extrapolation: `2*x[i-1] - x[i-2]`
    pub second_order: f64,
    /// Order-3 extrapolation: `3*x[i-1] - 3*x[i-2] + x[i-3]`
    pub third_order: f64,
    /// `x[i-1] - x[i-2]`
    pub slope12: f64,
    /// `x[i-2] - x[i-3]`
    pub slope23: f64,
}

impl Candidates {
    /// Compute the candidate set at `index` from the three preceding samples.
    ///
    /// # Panics
    /// If `index < 3` or `index - 1 >= samples.len()`.
    pub fn at(samples: &[f64], index: usize) -> Self {
        assert!(index >= 3, "candidates need three samples of history");
        let (p1, p2, p3) = (samples[index - 1], samples[index - 2], samples[index - 3]);
        Self {
            first_order: p1,
            second_order: 2.0 * p1 - p2,
            third_order: 3.0 * p1 - 3.0 * p2 + p3,
            slope12: p1 - p2,
            slope23: p2 - p3,
        }
    }

    /// Both local slopes inside the threshold: the signal is smooth and the
    /// order-1 hold is the cheapest stable choice.
    pub fn is_smooth(&self, threshold: f64) -> bool {
        self.slope12.abs() < threshold && self.slope23.abs() < threshold
    }
}
