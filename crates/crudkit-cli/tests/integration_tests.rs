//! End-to-end tests for the `crudkit` binary.
//!
//! Each test runs the real binary via `assert_cmd` against a temporary
//! directory, asserting on exit codes, terminal output, and the generated
//! files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudkit() -> Command {
    let mut cmd = Command::cargo_bin("crudkit").expect("binary builds");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    crudkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("make"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    crudkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_args_shows_help_and_fails() {
    crudkit().assert().failure().code(2);
}

#[test]
fn make_generates_full_crud_surface() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args([
            "make",
            "Task",
            "--fields",
            "title:string,status:enum(open,closed)",
            "--relations",
            "user:belongsTo",
            "--path",
        ])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let root = dir.path();
    assert!(root.join("app/Models/Task.php").exists());
    assert!(root.join("app/Http/Controllers/TaskController.php").exists());
    assert!(root.join("app/Http/Requests/TaskStoreRequest.php").exists());
    assert!(root.join("app/Http/Requests/TaskUpdateRequest.php").exists());
    assert!(root.join("resources/views/tasks/index.blade.php").exists());
    assert!(root.join("resources/views/tasks/show.blade.php").exists());

    let migrations: Vec<_> = std::fs::read_dir(root.join("database/migrations"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(migrations.len(), 1);
    assert!(migrations[0].ends_with("_create_tasks_table.php"));

    let model = std::fs::read_to_string(root.join("app/Models/Task.php")).unwrap();
    assert!(model.contains("protected $fillable = ['title', 'status'];"));
    assert!(model.contains("return $this->belongsTo(User::class);"));

    let api = std::fs::read_to_string(root.join("routes/api.php")).unwrap();
    assert!(api.contains("Route::apiResource('tasks', TaskController::class);"));
    let web = std::fs::read_to_string(root.join("routes/web.php")).unwrap();
    assert!(web.contains("Route::resource('tasks', TaskController::class);"));
}

#[test]
fn rerun_does_not_duplicate_routes() {
    let dir = TempDir::new().unwrap();
    let run = || {
        crudkit()
            .args(["make", "Task", "--fields", "title:string", "--path"])
            .arg(dir.path())
            .assert()
            .success();
    };

    run();
    run();

    let api = std::fs::read_to_string(dir.path().join("routes/api.php")).unwrap();
    assert_eq!(
        api.matches("Route::apiResource('tasks', TaskController::class);")
            .count(),
        1
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args(["make", "Task", "--fields", "title:string", "--dry-run", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"))
        .stdout(predicate::str::contains("app/Models/Task.php"));

    assert!(!dir.path().join("app").exists());
    assert!(!dir.path().join("routes").exists());
}

#[test]
fn unknown_field_kind_fails_with_user_error() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args(["make", "Task", "--fields", "title:varchar", "--path"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("varchar"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!dir.path().join("app").exists());
}

#[test]
fn bare_enum_kind_is_rejected() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args(["make", "Task", "--fields", "status:enum", "--path"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("enum"));
}

#[test]
fn invalid_model_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args(["make", "42tasks", "--path"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(2);
}

#[test]
fn snake_case_model_is_normalised() {
    let dir = TempDir::new().unwrap();

    crudkit()
        .args(["make", "blog_post", "--path"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("app/Models/BlogPost.php").exists());
    assert!(dir
        .path()
        .join("resources/views/blog_posts/index.blade.php")
        .exists());
}

#[test]
fn types_table_lists_kinds() {
    crudkit()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("string"))
        .stdout(predicate::str::contains("required|string|max:255"))
        .stdout(predicate::str::contains("belongsTo"));
}

#[test]
fn types_json_is_valid() {
    let output = crudkit()
        .args(["types", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(doc["fields"].as_array().unwrap().len() >= 11);
    assert!(
        doc["relations"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "hasMany")
    );
}

#[test]
fn completions_bash_generates_script() {
    crudkit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudkit"));
}
