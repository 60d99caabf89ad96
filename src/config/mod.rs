//! Application configuration
//!
//! Holds the endpoint prefix used to build API URLs. Configuration is set
//! once at startup, either programmatically, from a YAML file, or from the
//! environment.

mod endpoint;
mod parser;

pub use endpoint::{ApplicationConfig, ENDPOINT_PREFIX_ENV, MICROFRONTEND_ENV};
pub use parser::{parse_file, parse_str};
