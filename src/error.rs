//! Error definitions shared by the parser, the matcher and the protocol validator.

use std::fmt;

use thiserror::Error;

/// Stable discriminant for a rejected pattern.
///
/// Callers branch on this, not on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorCode {
    /// The pattern carries a query string.
    QueryString,
    /// The pattern has a `*` outside the hostname prefix or path suffix.
    InfixWildcard,
    /// The pattern cannot be parsed as a URL.
    InvalidUrl,
}

impl PatternErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternErrorCode::QueryString => "ERR_QUERY_STRING",
            PatternErrorCode::InfixWildcard => "ERR_INFIX_WILDCARD",
            PatternErrorCode::InvalidUrl => "ERR_INVALID_URL",
        }
    }
}

impl fmt::Display for PatternErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing patterns or validating URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A pattern or candidate URL uses an unsupported scheme.
    #[error("Invalid protocol: {protocol}. Supported protocols are: {supported}")]
    InvalidProtocol {
        /// Offending scheme, without the trailing colon.
        protocol: String,
        /// Supported schemes, without colons, comma separated.
        supported: String,
    },

    /// A pattern is malformed.
    #[error("{message}")]
    InvalidPattern {
        code: PatternErrorCode,
        message: String,
    },
}

impl RouteError {
    pub(crate) fn query_string(pattern: &str) -> Self {
        RouteError::InvalidPattern {
            code: PatternErrorCode::QueryString,
            message: format!("Route \"{}\" contains a query string. This is not allowed.", pattern),
        }
    }

    pub(crate) fn infix_wildcard(pattern: &str) -> Self {
        RouteError::InvalidPattern {
            code: PatternErrorCode::InfixWildcard,
            message: format!("Route \"{}\" contains an infix wildcard. This is not allowed.", pattern),
        }
    }

    pub(crate) fn invalid_url(pattern: &str, source: url::ParseError) -> Self {
        RouteError::InvalidPattern {
            code: PatternErrorCode::InvalidUrl,
            message: format!("Route \"{}\" is not a valid URL: {}", pattern, source),
        }
    }

    /// Pattern error code, if this is a pattern error.
    pub fn code(&self) -> Option<PatternErrorCode> {
        match self {
            RouteError::InvalidPattern { code, .. } => Some(*code),
            RouteError::InvalidProtocol { .. } => None,
        }
    }
}
