// Error types for pageobject-rs

use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a page object
///
/// Every error is raised at the point of detection and propagates uncaught
/// through the calling test. The core never retries or recovers: a failed
/// precondition or missing element fails the enclosing test case outright.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input to a map mutation or dispatch call
    ///
    /// Raised for empty field names or selectors, conflicting construction
    /// flags, verb argument mismatches, and adapting a non-selectable
    /// element into a select control.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reference to a field that is not a valid locator key
    ///
    /// Also raised by the model mirror when a mapped field has no accessor
    /// entry in the model's table (wrapped with the expected accessor-pair
    /// names via [`Error::context`]).
    #[error("Map '{0}' is not a valid locator key")]
    UnknownField(String),

    /// A selector resolved to nothing where an element was required
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// `load()` was invoked with no URL configured and none supplied
    #[error("No page URL configured and no override provided")]
    MissingUrl,

    /// A load-verification or model-equality assertion did not hold
    ///
    /// The message embeds the offending field name or the expected and
    /// actual values.
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    /// Failure surfaced by the driver capability
    ///
    /// Navigation errors, stale sessions and the like propagate unchanged
    /// through the core.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
