//! Application services.
//!
//! One service, one use case: generate a microservice skeleton.

pub mod scaffolder;

pub use scaffolder::ServiceScaffolder;
