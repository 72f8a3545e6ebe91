//! Main error type for the Turbot provider core.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;
use super::classify::classify_message;

/// Message returned by [`Client::validate`](crate::Client::validate) when the
/// workspace answers but does not accept the configured keys.
pub const AUTH_FAILURE_MESSAGE: &str =
    "authorisation failed. Verify workspace, access_key and secret_access_key have been set correctly";

/// The primary error type for Turbot provider operations.
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (verbatim API or transport text)
/// └── source: Option           (underlying cause)
/// ```
///
/// `Display` prints the message only, so API text is surfaced unchanged.
///
/// ## Example
///
/// ```rust
/// use turbot_provider::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::NotFound => println!("gone, clearing state"),
///         ErrorKind::FailedValidation => println!("rejected: {}", err),
///         kind if kind.is_network_failure() => println!("network: {}", err),
///         _ => println!("fatal: {}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turbot_provider::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::InvalidArgument, "resource cannot be empty");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error from a message returned in a GraphQL `errors` list.
    ///
    /// The kind is derived with [`classify_message`]; the message is kept verbatim.
    pub fn from_api_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = classify_message(&message);
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the entity does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Returns `true` if the API rejected the payload during validation.
    #[inline]
    pub fn is_failed_validation(&self) -> bool {
        self.kind == ErrorKind::FailedValidation
    }

    /// Returns `true` for DNS, connection and timeout failures.
    #[inline]
    pub fn is_network_failure(&self) -> bool {
        self.kind.is_network_failure()
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates the fixed authorisation failure error.
    pub fn auth_failure() -> Self {
        Self::new(ErrorKind::Unauthorized, AUTH_FAILURE_MESSAGE)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a duplicate resource error.
    pub fn duplicate(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    /// Creates an encryption error.
    pub fn encryption(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Encryption, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// Implement From for common error types

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::Configuration,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Configuration,
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected => ErrorKind::Connection,
            std::io::ErrorKind::TimedOut => ErrorKind::Timeout,
            _ => ErrorKind::Unknown,
        };
        Error::new(kind, err.to_string()).with_source(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_response(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::new(ErrorKind::TypeMismatch, format!("YAML error: {}", err)).with_source(err)
    }
}
