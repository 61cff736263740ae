/// Remote service errors. Error payloads never embed submitted content.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api key missing: set GATEPOST_API_KEY")]
    MissingApiKey,

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("api error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {reason}")]
    BadResponse { reason: String },
}
