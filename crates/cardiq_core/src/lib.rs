//! Adaptive linear-prediction compression for reduced-lead ECG telemetry.
//!
//! A standard 12-lead electrocardiogram is reconstructed from a 4-lead
//! recording (I, II, V1, V5) by fixed per-sample linear combinations; one
//! lead's sample stream then feeds an adaptive, order-switching predictive
//! encoder. Per sample, the encoder derives three candidate predictions from
//! recent history, picks or blends among them on a slope rule, and emits the
//! prediction residual — plus, when the residual exceeds a threshold, a cheap
//! shift-approximated substitute value selected by the per-run `delta_e`
//! parameter.
//!
//! # Example
//! ```
//! use cardiq_core::{AdaptiveEncoder, EncoderConfig};
//!
//! // A steep ramp: the slope rule routes every index to the adaptive blend,
//! // which extrapolates a linear signal exactly.
//! let samples: Vec<f64> = (0..32).map(|i| i as f64 * 12.0).collect();
//! let encoder = AdaptiveEncoder::new(EncoderConfig::default()).unwrap();
//! for record in encoder.encode(&samples) {
//!     assert_eq!(record.residual, Some(0.0));
//! }
//! ```

pub mod config;
pub mod encoder;
pub mod error;
pub mod fallback;
pub mod leads;
pub mod predictors;
pub mod record;

pub use config::EncoderConfig;
pub use encoder::{AdaptiveEncoder, EncoderPass, Prediction, PredictionState};
pub use error::CardiqError;
pub use fallback::FallbackKind;
pub use leads::{synthesize, DerivedLeads, RecordedLeads};
pub use record::SignalRecord;
