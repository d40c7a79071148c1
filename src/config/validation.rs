//! Configuration validation.
//!
//! # Responsibilities
//! - Parse every configured pattern on its own
//! - Check the log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MatcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::MatcherConfig;
use crate::error::RouteError;
use crate::routing::{parse_route, ParseOptions};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A route pattern was rejected by the parser.
    #[error("routes[{index}] ({pattern}): {source}")]
    Route {
        index: usize,
        pattern: String,
        #[source]
        source: RouteError,
    },

    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Validate `config`, collecting every error.
pub fn validate_config(config: &MatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors: Vec<ValidationError> = config
        .routes
        .iter()
        .enumerate()
        .filter_map(|(index, route)| {
            parse_route(route.to_raw_pattern(), ParseOptions::default())
                .err()
                .map(|source| {
                    tracing::warn!(index, pattern = %route.pattern, error = %source, "Rejected route pattern");
                    ValidationError::Route {
                        index,
                        pattern: route.pattern.clone(),
                        source,
                    }
                })
        })
        .collect();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
