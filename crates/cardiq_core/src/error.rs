use thiserror::Error;

/// Errors reported by record reading, lead synthesis, and encoder
/// construction.
///
/// Per-index arithmetic degeneracies (a zero weight sum or a zero fallback
/// denominator) are not represented here: the affected index is emitted
/// without the value and the pass continues. See [`crate::encoder`].
#[derive(Debug, Error)]
pub enum CardiqError {
    /// Input lead lengths differ.
    #[error("lead length mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// `delta_e` selects no defined fallback branch.
    #[error("unsupported fallback selector delta_e = {delta_e}")]
    UnsupportedConfiguration { delta_e: f64 },

    /// Requested channel not present in the record.
    #[error("record has {available} channels, channel {index} requested")]
    MissingChannel { index: usize, available: usize },

    /// Record ended inside a multichannel frame.
    #[error("record truncated mid-frame")]
    TruncatedRecord,

    #[error("record I/O: {0}")]
    Io(#[from] std::io::Error),
}
