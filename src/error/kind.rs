//! Error kind enumeration for categorizing provider errors.

/// Categorization of provider errors.
///
/// Reconcilers branch on the kind rather than on message text:
///
/// | ErrorKind          | Raised by                    | Reconciler action            |
/// |--------------------|------------------------------|------------------------------|
/// | `NotFound`         | API error classification     | Clear stored identity        |
/// | `FailedValidation` | API error classification     | Retry policy as valueSource  |
/// | `Unauthorized`     | API error / HTTP 401, 403    | Abort, fix credentials       |
/// | `Connection`       | Transport                    | Abort, message verbatim      |
/// | `Timeout`          | Transport                    | Abort, message verbatim      |
/// | `Conflict`         | Pre-create duplicate check   | Abort, import instead        |
/// | `Unknown`          | Unclassified API error       | Abort, message verbatim      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failed (invalid access key, secret or workspace).
    ///
    /// HTTP: 401 Unauthorized, 403 Forbidden
    #[error("unauthorized")]
    Unauthorized,

    /// The requested entity does not exist.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// The API rejected the payload during schema validation.
    ///
    /// For policy settings this triggers the `valueSource` fallback.
    #[error("failed validation")]
    FailedValidation,

    /// An entity with the same identity already exists.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request
    #[error("invalid argument")]
    InvalidArgument,

    /// Connection error (DNS, TLS handshake, connection refused).
    #[error("connection error")]
    Connection,

    /// Request timed out.
    #[error("timeout")]
    Timeout,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 5xx
    #[error("service unavailable")]
    Unavailable,

    /// Response could not be parsed or was missing its payload.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (bad workspace URL, missing credentials).
    #[error("configuration error")]
    Configuration,

    /// A dynamic value did not have the expected shape.
    #[error("type mismatch")]
    TypeMismatch,

    /// Encrypting a value for stored state failed.
    #[error("encryption error")]
    Encryption,

    /// Unknown or unexpected error.
    ///
    /// Used for API errors that match no classification rule.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` for transport-level failures (DNS, connect, timeout).
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbot_provider::ErrorKind;
    ///
    /// assert!(ErrorKind::Connection.is_network_failure());
    /// assert!(!ErrorKind::NotFound.is_network_failure());
    /// ```
    #[inline]
    pub fn is_network_failure(&self) -> bool {
        matches!(self, ErrorKind::Connection | ErrorKind::Timeout)
    }

    /// Creates an `ErrorKind` from an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::FailedValidation,
            504 => ErrorKind::Timeout,
            _ if (400..500).contains(&status) => ErrorKind::InvalidArgument,
            _ if status >= 500 => ErrorKind::Unavailable,
            _ => ErrorKind::Unknown,
        }
    }
}
