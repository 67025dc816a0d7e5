// Enqueue Routing Core - Domain Logic & Ports
// NO infrastructure dependencies (host container lives in an adapter crate)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
