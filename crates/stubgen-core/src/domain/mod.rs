//! Core domain layer for Stubgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod artifact;
pub mod error;
pub mod name;
pub mod substitution;

// Re-exports for convenience
pub use artifact::{AppLayout, ArtifactKind, GeneratedArtifact};
pub use error::{DomainError, ErrorCategory};
pub use name::EntityName;
pub use substitution::{NAME_TOKEN, Substitution, VAR_NAME_TOKEN};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ========================================================================
    // Cross-module scenarios from the generator contract
    // ========================================================================

    #[test]
    fn repository_path_for_user() {
        let layout = AppLayout::new("app");
        let name = EntityName::new("User").unwrap();

        assert_eq!(
            layout.artifact_path(ArtifactKind::Repository, &name),
            PathBuf::from("app/Repositories/UserRepository.php")
        );
        assert_eq!(
            layout.artifact_path(ArtifactKind::Interface, &name),
            PathBuf::from("app/Interfaces/UserInterface.php")
        );
    }

    #[test]
    fn service_stub_substitutes_both_tokens() {
        let name = EntityName::new("Payment").unwrap();
        let rendered = Substitution::for_name(&name)
            .apply("class {{name}}Service { protected ${{var_name}}; }");

        assert_eq!(rendered, "class PaymentService { protected $payment; }");
    }

    #[test]
    fn interface_stub_scenario() {
        let name = EntityName::new("User").unwrap();
        let rendered = Substitution::for_name(&name)
            .apply("interface {{name}}Interface { public function get{{name}}(${{var_name}}); }");

        assert_eq!(
            rendered,
            "interface UserInterface { public function getUser($user); }"
        );
    }

    #[test]
    fn distinct_names_never_collide() {
        let layout = AppLayout::new("app");
        let a = EntityName::new("User").unwrap();
        let b = EntityName::new("Users").unwrap();

        assert_ne!(
            layout.artifact_path(ArtifactKind::Service, &a),
            layout.artifact_path(ArtifactKind::Service, &b)
        );
    }
}
