mod api_error;
mod config_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;

/// Top-level error for the gatepost workspace.
///
/// A blocked verdict is deliberately NOT an error variant: it is a
/// first-class scan outcome carried by `ScanVerdict`.
#[derive(Debug, thiserror::Error)]
pub enum GatepostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type GatepostResult<T> = Result<T, GatepostError>;
