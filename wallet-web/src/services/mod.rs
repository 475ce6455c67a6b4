//! Browser-side services: provider interop and session wiring.

pub mod ethereum;
pub mod prompt;
pub mod session;
pub mod timeout;
pub mod voting;
