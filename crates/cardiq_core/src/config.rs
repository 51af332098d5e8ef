use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

/// Per-run encoder parameters.
///
/// All values are fixed for the duration of a pass. `delta_e` is validated
/// once by [`crate::AdaptiveEncoder::new`], which resolves it to a
/// [`crate::FallbackKind`] so the per-index loop never re-branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Args))]
pub struct EncoderConfig {
    /// Adaptation baseline subtracted from the mean recent residual
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10.0))]
    pub m: f64,

    /// Fallback formula selector: 0, 2, 3, an integer >= 4, or a negative integer
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = 2.0, allow_negative_numbers = true)
    )]
    pub delta_e: f64,

    /// Scaling constant of the overflow-fallback blend
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 1.0))]
    pub c: f64,

    /// Gain applied to the adaptive blend weights
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 2.0))]
    pub k: f64,

    /// Slope and residual threshold separating smooth from transient signal
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 10.0))]
    pub threshold: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            m: 10.0,
            delta_e: 2.0,
            c: 1.0,
            k: 2.0,
            threshold: 10.0,
        }
    }
}
