//! HTTP protocol layer module
//!
//! Response builders decoupled from specific business logic, shared by the
//! application and management listeners.

pub mod response;

// Re-export commonly used builders
pub use response::{build_405_response, build_413_response, build_options_response, build_page_response};
