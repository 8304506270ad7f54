/// Crate-level error type for the shengdiao tone-feedback library.
///
/// Every operation on the sample path is total; errors exist only for
/// configuration validation, surfaced when a policy or graph is built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Convenience Result type for shengdiao operations.
pub type Result<T> = std::result::Result<T, Error>;
