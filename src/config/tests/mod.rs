//! Unit tests for configuration loading and validation.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token and repository resolution, including the CI
//!   fallbacks
//! - `validation`: Welcome settings validation tests

mod helpers;
