//! Stubgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stubgen
//! stub generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GeneratorService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: StubReader, ArtifactWriter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stubgen-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityName, Substitution, AppLayout)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stubgen_core::{
//!     application::GeneratorService,
//!     domain::{AppLayout, EntityName},
//! };
//!
//! // 1. Parse and validate the entity name
//! let name = EntityName::new("User")?;
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GeneratorService::new(reader, writer, AppLayout::new("app"));
//! service.make_repository(&name)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedFile, GeneratorService,
        ports::{ArtifactWriter, StubReader},
    };
    pub use crate::domain::{
        AppLayout, ArtifactKind, EntityName, GeneratedArtifact, Substitution,
    };
    pub use crate::error::{StubgenError, StubgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
