//! Supported URL schemes.
//!
//! # Responsibilities
//! - Hold the fixed set of supported schemes
//! - Check and validate a scheme in its canonical form (`"https:"`, trailing colon included)

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::RouteError;

/// Supported schemes in canonical form.
pub const SUPPORTED_PROTOCOLS: &[&str] = &["http:", "https:"];

/// Scheme a route is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// Canonical form, e.g. `"https:"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http:",
            Protocol::Https => "https:",
        }
    }

    /// Scheme name as `url::Url::scheme` reports it, e.g. `"https"`.
    pub fn scheme(&self) -> &'static str {
        strip_colon(self.as_str())
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returns true if `protocol` (with its trailing colon) is supported.
pub fn is_supported_protocol(protocol: &str) -> bool {
    SUPPORTED_PROTOCOLS.contains(&protocol)
}

/// Validate `protocol` (with its trailing colon).
pub fn validate_protocol(protocol: &str) -> Result<Protocol, RouteError> {
    match protocol {
        "http:" => Ok(Protocol::Http),
        "https:" => Ok(Protocol::Https),
        _ => Err(RouteError::InvalidProtocol {
            protocol: strip_colon(protocol).to_string(),
            supported: supported_list(),
        }),
    }
}

/// Supported schemes without colons, e.g. `"http, https"`.
fn supported_list() -> String {
    SUPPORTED_PROTOCOLS
        .iter()
        .map(|p| strip_colon(p))
        .collect::<Vec<_>>()
        .join(", ")
}

fn strip_colon(protocol: &str) -> &str {
    protocol.strip_suffix(':').unwrap_or(protocol)
}
