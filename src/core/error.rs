use thiserror::Error;

/// A single field-level problem reported by the API in `x-ic-error-validation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human readable message, e.g. `"chs" is required`.
    pub message: String,
    /// Path of the offending parameter, when the API provides one.
    pub path: Vec<String>,
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IcError {
    /// The request never produced an HTTP response (connection, DNS, timeout, redirect loop)
    /// or the response body could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request without field-level details.
    ///
    /// `code` is the first value of the `x-ic-error-code` response header.
    #[error("{code}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The raw error code sent by the API.
        code: String,
    },

    /// The API rejected the request because of a malformed parameter.
    #[error("{message}")]
    Validation {
        /// The HTTP status code.
        status: u16,
        /// Message of the first validation issue.
        message: String,
        /// Every issue decoded from the response, first one included.
        issues: Vec<ValidationIssue>,
    },

    /// Writing the chart to disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IcError {
    /// HTTP status of a rejected request, `None` for transport and filesystem errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            IcError::Server { status, .. } | IcError::Validation { status, .. } => Some(*status),
            IcError::Transport(e) => e.status().map(|s| s.as_u16()),
            IcError::Io(_) => None,
        }
    }

    /// `true` when the configured timeout elapsed before the response was received.
    pub fn is_timeout(&self) -> bool {
        matches!(self, IcError::Transport(e) if e.is_timeout())
    }
}
