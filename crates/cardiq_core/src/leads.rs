//! Derived-lead synthesis.
//!
//! The eight standard leads missing from a reduced 4-lead recording are fixed
//! per-sample linear combinations of leads I, II, V1 and V5: the limb leads
//! by Einthoven/Goldberger algebra, the chest leads by regression
//! coefficients. The transform is stateless and deterministic.

use serde::{Deserialize, Serialize};

use crate::error::CardiqError;

/// Chest-lead regression coefficients over (I, II, V1, V5).
const V2_COEFFS: [f64; 4] = [0.088733, -0.09116, 1.57862, 0.230214];
const V3_COEFFS: [f64; 4] = [0.245068, 0.447773, 1.14726, 0.609744];
const V4_COEFFS: [f64; 4] = [0.111111, 0.064849, 0.465706, 1.07423];
const V6_COEFFS: [f64; 4] = [0.202721, 0.038811, -0.176913, 0.59492];

/// The four directly recorded leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedLeads {
    pub lead_i: Vec<f64>,
    pub lead_ii: Vec<f64>,
    pub lead_v1: Vec<f64>,
    pub lead_v5: Vec<f64>,
}

impl RecordedLeads {
    /// Sample count of lead I; [`synthesize`] checks the others against it.
    pub fn sample_count(&self) -> usize {
        self.lead_i.len()
    }
}

/// The eight leads computed from a [`RecordedLeads`] set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedLeads {
    pub lead_iii: Vec<f64>,
    pub avr: Vec<f64>,
    pub avf: Vec<f64>,
    pub avl: Vec<f64>,
    pub v2: Vec<f64>,
    pub v3: Vec<f64>,
    pub v4: Vec<f64>,
    pub v6: Vec<f64>,
}

/// Compute the eight derived leads.
///
/// The only failure is [`CardiqError::ShapeMismatch`], reported before any
/// computation when the recorded leads disagree on length.
pub fn synthesize(recorded: &RecordedLeads) -> Result<DerivedLeads, CardiqError> {
    let n = recorded.lead_i.len();
    for lead in [&recorded.lead_ii, &recorded.lead_v1, &recorded.lead_v5] {
        if lead.len() != n {
            return Err(CardiqError::ShapeMismatch {
                expected: n,
                actual: lead.len(),
            });
        }
    }

    let mut derived = DerivedLeads {
        lead_iii: Vec::with_capacity(n),
        avr: Vec::with_capacity(n),
        avf: Vec::with_capacity(n),
        avl: Vec::with_capacity(n),
        v2: Vec::with_capacity(n),
        v3: Vec::with_capacity(n),
        v4: Vec::with_capacity(n),
        v6: Vec::with_capacity(n),
    };

    for i in 0..n {
        let li = recorded.lead_i[i];
        let lii = recorded.lead_ii[i];
        let lv1 = recorded.lead_v1[i];
        let lv5 = recorded.lead_v5[i];

        let liii = lii - li;
        derived.lead_iii.push(liii);
        derived.avr.push(-(li + lii) / 2.0);
        derived.avf.push((lii + liii) / 2.0);
        derived.avl.push((li - liii) / 2.0);
        derived.v2.push(combine(V2_COEFFS, li, lii, lv1, lv5));
        derived.v3.push(combine(V3_COEFFS, li, lii, lv1, lv5));
        derived.v4.push(combine(V4_COEFFS, li, lii, lv1, lv5));
        derived.v6.push(combine(V6_COEFFS, li, lii, lv1, lv5));
    }

    Ok(derived)
}

#[inline]
fn combine(coeffs: [f64; 4], li: f64, lii: f64, lv1: f64, lv5: f64) -> f64 {
    coeffs[0] * li + coeffs[1] * lii + coeffs[2] * lv1 + coeffs[3] * lv5
}
