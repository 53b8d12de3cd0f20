//! Error types for compton operations.
//!
//! Every variant except [`Error::Io`] signals a defect at a call site (a class
//! family that was never wired into the codec, a template naming a fragment
//! nobody resolves). Writes stream straight into the sink, so bytes emitted
//! before an error are not retracted.

use thiserror::Error;

/// Errors that can occur while encoding styles or writing documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("class support not implemented for prefix: {0}")]
    UnsupportedPrefix(String),

    #[error("malformed class token: {0}")]
    MalformedClass(String),

    #[error("unknown variant {suffix:?} for class prefix {prefix:?}")]
    UnknownVariant { prefix: String, suffix: String },

    #[error("unknown template token: {0}")]
    UnknownToken(String),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Shorthand used by fragment resolvers for tokens they do not handle.
    pub fn unknown_token(token: &str) -> Self {
        Error::UnknownToken(token.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
