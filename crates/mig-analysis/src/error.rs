use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A cross tab parameter is not of the form `<counties>x<origins>`.
    #[error("invalid cross tab '{value}': {reason}")]
    InvalidCrossTab { value: String, reason: String },

    /// Summing inbound counts for `key` leaves the `u64` range.
    #[error("inbound count for '{key}' overflows")]
    CountOverflow { key: String },
}
