// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
}

/// Failures of a remote request (place record, events list, panorama image).
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request was sent but no response came back (connection refused,
    /// DNS failure, timeout).
    Transport(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The body could not be parsed or lacks an expected field.
    Malformed(String),

    /// The request succeeded but the place record is absent.
    NotFound,

    /// The panorama image could not be downloaded or decoded.
    Image(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "error-no-response",
            FetchError::Status(_) => "error-http-status",
            FetchError::Malformed(_) => "error-malformed-response",
            FetchError::NotFound => "error-place-not-found",
            FetchError::Image(_) => "error-panorama-image",
        }
    }

    /// Fluent arguments for the localized message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            FetchError::Status(code) => vec![("status", code.to_string())],
            _ => Vec::new(),
        }
    }

    /// Technical detail suitable for the collapsible section of the error panel.
    pub fn details(&self) -> Option<&str> {
        match self {
            FetchError::Transport(msg) | FetchError::Malformed(msg) | FetchError::Image(msg) => {
                Some(msg)
            }
            FetchError::Status(_) | FetchError::NotFound => None,
        }
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::Malformed(err.to_string()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "No response from server: {}", msg),
            FetchError::Status(code) => write!(f, "Server answered with HTTP {}", code),
            FetchError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            FetchError::NotFound => write!(f, "Place not found"),
            FetchError::Image(msg) => write!(f, "Panorama image error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
