//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation:
//!     RawPattern[] (string, or string + data)
//!     → parser.rs (scheme check, wildcard extraction, validation)
//!     → specificity.rs (optional score, sort descending)
//!     → Route[] / RouteTable (immutable)
//!
//! Lookup:
//!     candidate Url
//!     → matcher.rs (protocol, hostname, path + query)
//!     → Return: first matching Route or None
//! ```
//!
//! # Design Decisions
//! - Only two wildcard positions: a hostname prefix and a path suffix
//! - Routes compiled once, immutable afterwards
//! - Deterministic: same input always matches same route
//! - First match wins (input order, or specificity order when requested)

pub mod matcher;
pub mod parser;
pub mod protocol;
pub mod route;
pub mod router;
pub mod specificity;

pub use matcher::{find_matching_route, matches_patterns};
pub use parser::{parse_route, parse_routes};
pub use protocol::{is_supported_protocol, validate_protocol, Protocol, SUPPORTED_PROTOCOLS};
pub use route::{ParseOptions, RawPattern, Route};
pub use router::RouteTable;
