//! Built-in default stub texts.
//!
//! These are the stubs that `stubgen init` seeds into `<app-root>/Stubs`.
//! They are plain text with literal `{{name}}` / `{{var_name}}` tokens; the
//! generator substitutes them without parsing the PHP.
//!
//! The repository stub deliberately uses only `{{name}}` — the generator
//! never substitutes `{{var_name}}` in repository stubs.

use stubgen_core::domain::ArtifactKind;

/// Default repository stub: an Eloquent-backed implementation of the
/// generated interface.
pub const REPOSITORY_STUB: &str = r#"<?php

namespace App\Repositories;

use App\Interfaces\{{name}}Interface;
use App\Models\{{name}};
use Illuminate\Database\Eloquent\Collection;

class {{name}}Repository implements {{name}}Interface
{
    public function create(array $data): {{name}}
    {
        return {{name}}::create($data);
    }

    public function all(): Collection
    {
        return {{name}}::all();
    }

    public function find(int $id): ?{{name}}
    {
        return {{name}}::find($id);
    }
}
"#;

/// Default interface stub: the three-operation data-access contract
/// (create persists a record, all returns every record, find returns the
/// match or null — it never throws for a missing record).
pub const INTERFACE_STUB: &str = r#"<?php

namespace App\Interfaces;

use App\Models\{{name}};
use Illuminate\Database\Eloquent\Collection;

interface {{name}}Interface
{
    public function create(array $data): {{name}};

    public function all(): Collection;

    public function find(int $id): ?{{name}};
}
"#;

/// Default service stub: constructor-injects the repository interface.
pub const SERVICE_STUB: &str = r#"<?php

namespace App\Services;

use App\Interfaces\{{name}}Interface;

class {{name}}Service
{
    protected {{name}}Interface ${{var_name}}Repository;

    public function __construct({{name}}Interface ${{var_name}}Repository)
    {
        $this->{{var_name}}Repository = ${{var_name}}Repository;
    }
}
"#;

/// The default stub text for each artifact kind.
pub fn default_stub(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Repository => REPOSITORY_STUB,
        ArtifactKind::Interface => INTERFACE_STUB,
        ArtifactKind::Service => SERVICE_STUB,
    }
}

/// All (kind, stub text) pairs, in generation order.
pub fn default_stubs() -> [(ArtifactKind, &'static str); 3] {
    ArtifactKind::all().map(|kind| (kind, default_stub(kind)))
}
