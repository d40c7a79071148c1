//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! parser / matcher / config validation produce:
//!     → tracing events (debug: parsed patterns and match results,
//!       trace: per-route evaluation, warn: rejected config patterns)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;
