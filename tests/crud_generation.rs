//! Integration tests for CRUD scaffold generation

use std::fs;
use std::path::Path;

use quickcrud::{CrudCommand, EntityName, FieldList, FieldType};
use tempfile::TempDir;

/// Set up a minimal host application tree with a route file to append to.
fn host_app() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("routes")).unwrap();
    fs::write(temp_dir.path().join("routes/web.php"), "<?php\n\n").unwrap();
    temp_dir
}

fn product_fields() -> FieldList {
    let mut fields = FieldList::new();
    assert!(fields.push("title", FieldType::String));
    assert!(fields.push("price", FieldType::Decimal));
    fields
}

fn migration_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root.join("database/migrations"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_full_run_writes_every_artifact() {
    let app = host_app();
    let cmd = CrudCommand::new(app.path().to_path_buf());

    let files = cmd
        .scaffold(EntityName::new("Product"), product_fields())
        .unwrap();
    assert_eq!(files.len(), 7);

    assert!(app.path().join("app/Models/Product.php").exists());
    assert!(app
        .path()
        .join("app/Http/Controllers/ProductController.php")
        .exists());
    assert!(app.path().join("resources/views/products").is_dir());
    for view in ["index", "create", "edit"] {
        assert!(app
            .path()
            .join(format!("resources/views/products/{view}.blade.php"))
            .exists());
    }

    let migrations = migration_names(app.path());
    assert_eq!(migrations.len(), 1);
    assert!(migrations[0].ends_with("_create_products_table.php"));

    let routes = fs::read_to_string(app.path().join("routes/web.php")).unwrap();
    assert!(routes.starts_with("<?php\n"), "route file was overwritten");
    assert!(routes.contains(
        "Route::resource('products', \\App\\Http\\Controllers\\ProductController::class);"
    ));
}

#[test]
fn test_model_content_on_disk() {
    let app = host_app();
    let cmd = CrudCommand::new(app.path().to_path_buf());
    cmd.scaffold(EntityName::new("Product"), product_fields())
        .unwrap();

    let model = fs::read_to_string(app.path().join("app/Models/Product.php")).unwrap();
    assert!(model.contains("namespace App\\Models;"));
    assert!(model.contains("class Product extends Model"));
    assert!(model.contains("protected $fillable = ['title', 'price'];"));
}

#[test]
fn test_existing_model_halts_before_any_write() {
    let app = host_app();
    fs::create_dir_all(app.path().join("app/Models")).unwrap();
    fs::write(app.path().join("app/Models/Product.php"), "<?php\n").unwrap();
    let routes_before = fs::read_to_string(app.path().join("routes/web.php")).unwrap();

    let cmd = CrudCommand::new(app.path().to_path_buf());
    let err = cmd
        .scaffold(EntityName::new("Product"), product_fields())
        .unwrap_err();
    assert!(err.to_string().contains("The model Product already exists!"));

    // No other artifact was touched.
    assert!(!app.path().join("database/migrations").exists());
    assert!(!app
        .path()
        .join("app/Http/Controllers/ProductController.php")
        .exists());
    assert!(!app.path().join("resources/views/products").exists());
    assert_eq!(
        fs::read_to_string(app.path().join("routes/web.php")).unwrap(),
        routes_before
    );
}

#[test]
fn test_rerun_after_model_removal_appends_duplicate_route() {
    let app = host_app();
    let cmd = CrudCommand::new(app.path().to_path_buf());

    cmd.scaffold(EntityName::new("Product"), product_fields())
        .unwrap();
    fs::remove_file(app.path().join("app/Models/Product.php")).unwrap();
    cmd.scaffold(EntityName::new("Product"), product_fields())
        .unwrap();

    let routes = fs::read_to_string(app.path().join("routes/web.php")).unwrap();
    assert_eq!(
        routes.matches("Route::resource('products'").count(),
        2,
        "re-run should append without duplicate detection"
    );
}

#[test]
fn test_missing_route_file_is_an_error() {
    let app = TempDir::new().unwrap();
    let cmd = CrudCommand::new(app.path().to_path_buf());

    let err = cmd
        .scaffold(EntityName::new("Product"), product_fields())
        .unwrap_err();
    assert!(err.to_string().contains("routes"));

    // Earlier artifacts stay in place; there is no rollback.
    assert!(app.path().join("app/Models/Product.php").exists());
}

#[test]
fn test_lowercase_entity_is_canonicalized() {
    let app = host_app();
    let cmd = CrudCommand::new(app.path().to_path_buf());

    cmd.scaffold(EntityName::new("product"), product_fields())
        .unwrap();

    assert!(app.path().join("app/Models/Product.php").exists());
    assert!(app.path().join("resources/views/products").is_dir());
}

#[test]
fn test_view_flavors_on_disk() {
    let app = host_app();
    let mut fields = FieldList::new();
    fields.push("title", FieldType::String);
    fields.push("body", FieldType::Text);
    fields.push("published_on", FieldType::Date);

    let cmd = CrudCommand::new(app.path().to_path_buf());
    cmd.scaffold(EntityName::new("Post"), fields).unwrap();

    let create =
        fs::read_to_string(app.path().join("resources/views/posts/create.blade.php")).unwrap();
    let edit = fs::read_to_string(app.path().join("resources/views/posts/edit.blade.php")).unwrap();
    let index =
        fs::read_to_string(app.path().join("resources/views/posts/index.blade.php")).unwrap();

    assert!(create.contains("<textarea name=\"body\""));
    assert!(create.contains("<input type=\"date\" name=\"published_on\""));
    assert!(create.contains("{{ old('title') }}"));
    assert!(!create.contains("$post->title"));

    assert!(edit.contains("{{ old('title', $post->title) }}"));
    assert!(edit.contains("{{ old('body', $post->body) }}"));

    assert!(index.contains("<th>Published On</th>"));
    assert!(index.contains("<td>{{ $post->title }}</td>"));
}
