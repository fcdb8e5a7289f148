//! Error types for the API client.

/// Errors that can occur when talking to the storefront admin API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The server rejected a mutation (e.g. an invalid status transition).
    #[error("Rejected by server: {message}")]
    Validation { message: String },
}
