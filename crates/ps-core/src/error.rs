/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating simulation parameters or host settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite {
        /// The offending parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must be strictly positive is zero or negative.
    #[error("parameter `{name}` must be greater than zero, got {value}")]
    NotPositive {
        /// The offending parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter that must not be negative is below zero.
    #[error("parameter `{name}` must not be negative, got {value}")]
    Negative {
        /// The offending parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A parameter falls outside its permitted range.
    #[error("parameter `{name}` must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// The offending parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}
