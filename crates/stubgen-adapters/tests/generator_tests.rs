//! Integration tests: GeneratorService driven through the adapter crate.

use std::path::Path;

use stubgen_adapters::{MemoryFilesystem, builtin_stubs};
use stubgen_core::{
    application::GeneratorService,
    domain::{AppLayout, ArtifactKind, EntityName},
};

/// A memory filesystem seeded the way `stubgen init` lays the app out.
fn seeded_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    for (kind, stub) in builtin_stubs::default_stubs() {
        fs.seed_file(format!("app/Stubs/{}", kind.stub_file()), stub);
        fs.add_directory(format!("app/{}", kind.directory()));
    }
    fs
}

fn service(fs: &MemoryFilesystem) -> GeneratorService {
    GeneratorService::new(
        Box::new(fs.clone()),
        Box::new(fs.clone()),
        AppLayout::new("app"),
    )
}

#[test]
fn full_repository_workflow() {
    let fs = seeded_fs();
    let name = EntityName::new("User").unwrap();

    let files = service(&fs).make_repository(&name).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].kind, ArtifactKind::Repository);
    assert_eq!(files[1].kind, ArtifactKind::Interface);

    let repository = fs
        .read_file(Path::new("app/Repositories/UserRepository.php"))
        .unwrap();
    assert!(repository.contains("class UserRepository implements UserInterface"));
    assert!(repository.contains("return User::create($data);"));
    assert!(!repository.contains("{{name}}"));

    let interface = fs
        .read_file(Path::new("app/Interfaces/UserInterface.php"))
        .unwrap();
    assert!(interface.contains("interface UserInterface"));
    assert!(interface.contains("public function find(int $id): ?User;"));
}

#[test]
fn full_service_workflow() {
    let fs = seeded_fs();
    let name = EntityName::new("Payment").unwrap();

    service(&fs).make_service(&name).unwrap();

    let content = fs
        .read_file(Path::new("app/Services/PaymentService.php"))
        .unwrap();
    assert!(content.contains("class PaymentService"));
    assert!(content.contains("$paymentRepository"));
}

#[test]
fn generation_is_idempotent() {
    let fs = seeded_fs();
    let name = EntityName::new("Order").unwrap();
    let svc = service(&fs);

    svc.make_repository(&name).unwrap();
    let first = fs
        .read_file(Path::new("app/Repositories/OrderRepository.php"))
        .unwrap();

    svc.make_repository(&name).unwrap();
    let second = fs
        .read_file(Path::new("app/Repositories/OrderRepository.php"))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_stub_leaves_filesystem_untouched() {
    let fs = MemoryFilesystem::new();
    fs.add_directory("app/Services");
    let name = EntityName::new("Payment").unwrap();

    assert!(service(&fs).make_service(&name).is_err());
    assert!(fs.list_files().is_empty());
}

#[test]
fn missing_destination_directory_fails_without_cleanup() {
    // Stubs exist but only the Repositories directory does; the interface
    // write fails and the repository artifact stays behind (no rollback).
    let fs = MemoryFilesystem::new();
    for (kind, stub) in builtin_stubs::default_stubs() {
        fs.seed_file(format!("app/Stubs/{}", kind.stub_file()), stub);
    }
    fs.add_directory("app/Repositories");
    let name = EntityName::new("User").unwrap();

    assert!(service(&fs).make_repository(&name).is_err());
    assert!(fs
        .read_file(Path::new("app/Repositories/UserRepository.php"))
        .is_some());
    assert!(fs
        .read_file(Path::new("app/Interfaces/UserInterface.php"))
        .is_none());
}
