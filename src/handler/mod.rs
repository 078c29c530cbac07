//! Request handler module
//!
//! Dispatch layer for the application listener: method validation, route
//! resolution, and access logging.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
