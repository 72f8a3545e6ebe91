//! Error types for the Turbot provider core.
//!
//! Every fallible operation returns [`Error`], which carries an [`ErrorKind`]
//! for branching and the original message text for display. Messages coming
//! back from the Turbot API are preserved verbatim so they can be matched
//! against the platform's own diagnostics.
//!
//! ## Classification
//!
//! API error messages are categorized by [`classify_message`], a table-driven
//! matcher (see [`Classifier`]). Reconcilers branch on the result through the
//! predicates in this module:
//!
//! ```rust
//! use turbot_provider::error::{self, Error};
//!
//! let err = Error::from_api_message("Policy setting 178 not found");
//! assert!(error::is_not_found(&err));
//! assert!(!error::is_failed_validation(&err));
//! ```

mod classify;
mod core;
mod kind;

pub use classify::{Classifier, Pattern, Rule, classify_message};
pub use core::{AUTH_FAILURE_MESSAGE, Error};
pub use kind::ErrorKind;

/// A specialized `Result` type for Turbot provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns `true` if the error means the entity does not exist.
pub fn is_not_found(err: &Error) -> bool {
    err.kind() == ErrorKind::NotFound
}

/// Returns `true` if the API rejected the payload during validation.
pub fn is_failed_validation(err: &Error) -> bool {
    err.kind() == ErrorKind::FailedValidation
}

/// Returns `true` if the credentials or workspace were rejected.
pub fn is_auth_failure(err: &Error) -> bool {
    err.kind() == ErrorKind::Unauthorized
}

/// Returns `true` for DNS, connection and timeout failures.
pub fn is_network_failure(err: &Error) -> bool {
    err.kind().is_network_failure()
}
