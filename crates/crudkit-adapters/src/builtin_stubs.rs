//! The stub templates that ship with Crudkit.
//!
//! One stub per [`ArtifactKind`], defined as compile-time string constants
//! and loaded into the store via [`all_stubs`]. The placeholder contract
//! lives in `crudkit_core::domain::context`:
//!
//! - `MODEL_CLASS`, `TABLE_NAME`, `MODEL_VARIABLE` come from the model name
//! - `FILLABLE` is an inline comma-joined list
//! - `MIGRATION_COLUMNS` and `VALIDATION_RULES` are whole indented lines
//!   (newline-terminated, possibly empty), so the placeholder sits at the
//!   start of its own line in the stub
//! - `RELATION_METHODS` carries its own leading blank line when non-empty
//! - `REQUEST_SUFFIX` is bound per artifact (`Store` / `Update`); the two
//!   form-request kinds share one stub

use crudkit_core::domain::{ArtifactKind, Stub, StubSource};

const MODEL_STUB: &str = r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{MODEL_CLASS}} extends Model
{
    use HasFactory;

    protected $fillable = [{{FILLABLE}}];
{{RELATION_METHODS}}}
"#;

const MIGRATION_STUB: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('{{TABLE_NAME}}', function (Blueprint $table) {
            $table->id();
{{MIGRATION_COLUMNS}}            $table->timestamps();
        });
    }

    public function down(): void
    {
        Schema::dropIfExists('{{TABLE_NAME}}');
    }
};
"#;

const CONTROLLER_STUB: &str = r#"<?php

namespace App\Http\Controllers;

use App\Models\{{MODEL_CLASS}};
use App\Http\Requests\{{MODEL_CLASS}}StoreRequest;
use App\Http\Requests\{{MODEL_CLASS}}UpdateRequest;

class {{MODEL_CLASS}}Controller extends Controller
{
    public function index()
    {
        return {{MODEL_CLASS}}::all();
    }

    public function store({{MODEL_CLASS}}StoreRequest $request)
    {
        ${{MODEL_VARIABLE}} = {{MODEL_CLASS}}::create($request->validated());
        return response()->json(${{MODEL_VARIABLE}}, 201);
    }

    public function show({{MODEL_CLASS}} ${{MODEL_VARIABLE}})
    {
        return response()->json(${{MODEL_VARIABLE}});
    }

    public function update({{MODEL_CLASS}}UpdateRequest $request, {{MODEL_CLASS}} ${{MODEL_VARIABLE}})
    {
        ${{MODEL_VARIABLE}}->update($request->validated());
        return response()->json(${{MODEL_VARIABLE}});
    }

    public function destroy({{MODEL_CLASS}} ${{MODEL_VARIABLE}})
    {
        ${{MODEL_VARIABLE}}->delete();
        return response()->json(null, 204);
    }
}
"#;

const REQUEST_STUB: &str = r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

class {{MODEL_CLASS}}{{REQUEST_SUFFIX}}Request extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        return [
{{VALIDATION_RULES}}        ];
    }
}
"#;

const VIEW_INDEX_STUB: &str = "<h1>{{MODEL_CLASS}} Index</h1>\n";
const VIEW_CREATE_STUB: &str = "<h1>Create {{MODEL_CLASS}}</h1>\n";
const VIEW_EDIT_STUB: &str = "<h1>Edit {{MODEL_CLASS}}</h1>\n";
const VIEW_SHOW_STUB: &str = "<h1>Show {{MODEL_CLASS}}</h1>\n";

/// All built-in stubs, one per artifact kind.
pub fn all_stubs() -> Vec<Stub> {
    vec![
        Stub::new(ArtifactKind::Model, StubSource::Static(MODEL_STUB)),
        Stub::new(ArtifactKind::Migration, StubSource::Static(MIGRATION_STUB)),
        Stub::new(ArtifactKind::Controller, StubSource::Static(CONTROLLER_STUB)),
        Stub::new(ArtifactKind::StoreRequest, StubSource::Static(REQUEST_STUB)),
        Stub::new(ArtifactKind::UpdateRequest, StubSource::Static(REQUEST_STUB)),
        Stub::new(ArtifactKind::ViewIndex, StubSource::Static(VIEW_INDEX_STUB)),
        Stub::new(ArtifactKind::ViewCreate, StubSource::Static(VIEW_CREATE_STUB)),
        Stub::new(ArtifactKind::ViewEdit, StubSource::Static(VIEW_EDIT_STUB)),
        Stub::new(ArtifactKind::ViewShow, StubSource::Static(VIEW_SHOW_STUB)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_artifact_kind_has_a_stub() {
        let stubs = all_stubs();
        for kind in ArtifactKind::all() {
            assert!(
                stubs.iter().any(|s| s.artifact == kind),
                "missing stub for {kind}"
            );
        }
    }

    #[test]
    fn stubs_open_with_php_tag_or_heading() {
        for stub in all_stubs() {
            let text = stub.as_str();
            assert!(
                text.starts_with("<?php") || text.starts_with("<h1>"),
                "unexpected opening for {}",
                stub.artifact
            );
        }
    }

    #[test]
    fn block_placeholders_sit_at_line_start() {
        // The line-block contract: these placeholders own their whole line.
        assert!(MIGRATION_STUB.contains("\n{{MIGRATION_COLUMNS}}"));
        assert!(REQUEST_STUB.contains("\n{{VALIDATION_RULES}}"));
        assert!(MODEL_STUB.contains("\n{{RELATION_METHODS}}"));
    }
}
