//! Application layer: the generate use case and its ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateService, GeneratedComponent};
