//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases "make a repository" and "make a service".

pub mod generator_service;

pub use generator_service::{GeneratedFile, GeneratorService};
