mod service;

pub use service::{DEFAULT_CONFIDENCE_THRESHOLD, SecurityService};
