//! Application layer - Use cases and orchestration
//!
//! Contains the hybrid route synthesis engine, the option assembler, the
//! trip planning orchestration service, and the port definitions the
//! infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
