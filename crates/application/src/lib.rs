//! Application layer - The alarm rule engine

pub mod security;

pub use security::{DEFAULT_CONFIDENCE_THRESHOLD, SecurityService};
