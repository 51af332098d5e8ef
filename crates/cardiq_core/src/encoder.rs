//! Adaptive order-switching predictive encoder.
//!
//! One pass over a sample series emits one record per index from 3 on.
//! Candidate predictions come from the three preceding samples, the
//! smooth/transient decision from the two local slopes, and the adaptive
//! blend weights from the three preceding residuals. Because each index
//! reads residuals the pass itself wrote, the recurrence is an inherent
//! sequential dependency chain: no parallelism across indices.

use serde::{Deserialize, Serialize};

use crate::config::EncoderConfig;
use crate::error::CardiqError;
use crate::fallback::FallbackKind;
use crate::predictors::Candidates;

/// Per-index scalar state accumulated over one pass.
///
/// Every field holds one slot per input sample, zero-initialized and written
/// at most once, at its own index. Slots below index 3 are never written;
/// reading them yields the zero default the recurrence relies on. The struct
/// is exclusively owned by its [`EncoderPass`] while the pass runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionState {
    /// Order-1 hold candidates.
    pub first_order: Vec<f64>,
    /// Order-2 extrapolation candidates.
    pub second_order: Vec<f64>,
    /// Order-3 extrapolation candidates.
    pub third_order: Vec<f64>,
    /// `x[i-1] - x[i-2]`.
    pub slope12: Vec<f64>,
    /// `x[i-2] - x[i-3]`.
    pub slope23: Vec<f64>,
    /// Signed prediction errors. A degenerate index keeps the zero sentinel
    /// so later three-term averages stay defined.
    pub residual: Vec<f64>,
    /// Adaptive weight of the order-2 candidate. Written only when the
    /// transient branch fires.
    pub weight2: Vec<f64>,
    /// Adaptive weight of the order-3 candidate. Always equal to `weight2`:
    /// both weights come from the same expression.
    pub weight3: Vec<f64>,
}

impl PredictionState {
    fn new(len: usize) -> Self {
        Self {
            first_order: vec![0.0; len],
            second_order: vec![0.0; len],
            third_order: vec![0.0; len],
            slope12: vec![0.0; len],
            slope23: vec![0.0; len],
            residual: vec![0.0; len],
            weight2: vec![0.0; len],
            weight3: vec![0.0; len],
        }
    }

    /// Number of slots (equal to the input length of the pass).
    pub fn len(&self) -> usize {
        self.residual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }
}

/// One emitted record.
///
/// `predicted` and `residual` are absent together exactly when the index was
/// degenerate (zero adaptive weight sum). `fallback` is present only when the
/// residual magnitude exceeded the threshold and the fallback formula's
/// denominator was nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub index: usize,
    pub predicted: Option<f64>,
    pub residual: Option<f64>,
    pub fallback: Option<f64>,
}

/// A validated encoder, reusable across any number of passes.
///
/// Construction checks `delta_e` against the defined fallback branches and
/// resolves it to a strategy value, so a pass never re-validates.
#[derive(Debug, Clone)]
pub struct AdaptiveEncoder {
    config: EncoderConfig,
    fallback: FallbackKind,
}

impl AdaptiveEncoder {
    /// Validate `config` and resolve its fallback branch.
    ///
    /// Fails with [`CardiqError::UnsupportedConfiguration`] when `delta_e`
    /// matches no defined branch (notably `1` and non-integer values).
    pub fn new(config: EncoderConfig) -> Result<Self, CardiqError> {
        let fallback = FallbackKind::resolve(config.delta_e)?;
        Ok(Self { config, fallback })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The fallback formula resolved from `delta_e`.
    pub fn fallback_kind(&self) -> FallbackKind {
        self.fallback
    }

    /// Start a lazy pass over `samples`.
    ///
    /// The pass emits nothing for the first three indices; fewer than four
    /// samples yield an empty pass and no error.
    pub fn encode<'a>(&self, samples: &'a [f64]) -> EncoderPass<'a> {
        EncoderPass {
            samples,
            config: self.config,
            fallback: self.fallback,
            state: PredictionState::new(samples.len()),
            index: 3,
        }
    }
}

/// A single in-flight pass: a finite, non-restartable iterator of records in
/// strictly increasing index order.
#[derive(Debug)]
pub struct EncoderPass<'a> {
    samples: &'a [f64],
    config: EncoderConfig,
    fallback: FallbackKind,
    state: PredictionState,
    index: usize,
}

impl EncoderPass<'_> {
    /// The state accumulated so far.
    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    /// Surrender the accumulated per-index state, ending the pass.
    pub fn into_state(self) -> PredictionState {
        self.state
    }
}

impl Iterator for EncoderPass<'_> {
    type Item = Prediction;

    fn next(&mut self) -> Option<Prediction> {
        if self.index >= self.samples.len() {
            return None;
        }
        let i = self.index;
        self.index += 1;

        let x = self.samples;
        let cfg = self.config;
        let kind = self.fallback;

        let cand = Candidates::at(x, i);
        let st = &mut self.state;
        st.first_order[i] = cand.first_order;
        st.second_order[i] = cand.second_order;
        st.third_order[i] = cand.third_order;
        st.slope12[i] = cand.slope12;
        st.slope23[i] = cand.slope23;

        let predicted = if cand.is_smooth(cfg.threshold) {
            // Smooth: hold the last sample. The weight slots stay unwritten.
            Some(cand.first_order)
        } else {
            let avg_err =
                (st.residual[i - 1] + st.residual[i - 2] + st.residual[i - 3]) / 3.0;
            // Both weights are intentionally the identical expression, so the
            // blend reduces to the plain mean of the two candidates; making
            // them differ would change every transient output.
            let w2 = cfg.k * (cfg.m - avg_err);
            let w3 = cfg.k * (cfg.m - avg_err);
            st.weight2[i] = w2;
            st.weight3[i] = w3;
            if w2 + w3 == 0.0 {
                log::warn!("adaptive weight sum is zero at index {i}; no prediction");
                None
            } else {
                Some((cand.second_order * w2 + cand.third_order * w3) / (w2 + w3))
            }
        };

        let (residual, fallback) = match predicted {
            Some(x_hat) => {
                let e = x[i] - x_hat;
                st.residual[i] = e;
                let fallback = if e.abs() > cfg.threshold {
                    let value = kind.evaluate(cand.second_order, cand.third_order);
                    if value.is_none() {
                        log::warn!("fallback denominator is zero at index {i}; no fallback value");
                    }
                    value
                } else {
                    None
                };
                (Some(e), fallback)
            }
            // Degenerate index: the residual slot keeps its zero sentinel.
            None => (None, None),
        };

        Some(Prediction {
            index: i,
            predicted,
            residual,
            fallback,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EncoderPass<'_> {}
