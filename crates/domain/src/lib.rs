//! Domain layer for tripweaver
//!
//! Contains the core trip-planning entities, value objects, and domain
//! errors. This layer has no async code and performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
