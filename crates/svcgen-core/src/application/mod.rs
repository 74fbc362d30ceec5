//! Application layer: orchestration and ports.
//!
//! The application layer wires the pure domain (manifests, variables,
//! validation) to the outside world through the driven ports. It contains no
//! I/O itself; everything observable happens behind a trait.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ServiceScaffolder;
