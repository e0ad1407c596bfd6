//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Wraps each subsystem error so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: consultant_core::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: consultant_api::ServerError,
    },
}
