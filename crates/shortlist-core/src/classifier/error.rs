use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("classifier returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed classifier response: {reason}")]
    MalformedResponse { reason: String },

    #[error("invalid classifier configuration: {reason}")]
    InvalidConfig { reason: String },
}
