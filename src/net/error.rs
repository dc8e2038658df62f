//! Error type for auth endpoint calls.

use thiserror::Error;

/// Failure of a single auth endpoint call.
///
/// `Rejected` carries whatever structured detail the server put in the
/// error body; `Transport` covers everything below that (connection
/// loss, malformed responses, running outside a browser). Pages recover
/// both into form-local status messages; nothing propagates further.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// The server-provided message, when the rejection carried one.
    pub fn server_message(self) -> Option<String> {
        match self {
            Self::Rejected { message, .. } => message,
            Self::Transport(_) => None,
        }
    }
}
