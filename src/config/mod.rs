//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (every pattern parsed, all errors collected)
//!     → MatcherConfig (validated, immutable)
//!     → RouteTable::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, read_config, ConfigError};
pub use schema::{MatcherConfig, ObservabilityConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
