use reqwest::StatusCode;

/// Error taxonomy for portal operations.
///
/// Every remote failure is terminal from the caller's perspective: no retry,
/// no backoff. The UI shell decides how a given variant is presented; this
/// crate only guarantees the server-provided message survives intact.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Network/transport failure before a usable response arrived
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the call; `message` comes from the response body
    /// (or the operation's fallback text when the body had none)
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// The operation needs an authenticated principal and none is stored
    #[error("not signed in")]
    NoSession,

    /// Local validation rejected the input before any request was sent
    #[error("{0}")]
    Validation(String),

    /// The session file could not be written or removed
    #[error("session storage failed: {0}")]
    Storage(String),
}
