//! Artifact generation for the quick CRUD scaffold
//!
//! The generator turns an entity name and a field list into rendered
//! artifacts: an Eloquent model, a schema migration, a resource controller,
//! a route registration line and three Blade views. Generation is a pure
//! string operation; writing is a separate step so the orchestrator can
//! check preconditions and report per-artifact results.

use anyhow::{Context, Result};
use inflector::Inflector;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use super::field::{Field, FieldList, FieldType};
use super::names::EntityName;
use super::render::render;

const MODEL_STUB: &str = include_str!("../../stubs/model.stub");
const MIGRATION_STUB: &str = include_str!("../../stubs/migration.stub");
const CONTROLLER_STUB: &str = include_str!("../../stubs/controller.stub");
const VIEW_INDEX_STUB: &str = include_str!("../../stubs/view_index.stub");
const VIEW_CREATE_STUB: &str = include_str!("../../stubs/view_create.stub");
const VIEW_EDIT_STUB: &str = include_str!("../../stubs/view_edit.stub");

/// Pre-existing route-definitions file the resource route is appended to.
const ROUTES_FILE: &str = "routes/web.php";

/// CRUD scaffold generator for one entity.
pub struct ScaffoldGenerator {
    entity: EntityName,
    fields: FieldList,
    project_root: PathBuf,
}

impl ScaffoldGenerator {
    /// Create a generator rooted at the host application's directory.
    #[must_use]
    pub const fn new(entity: EntityName, fields: FieldList, project_root: PathBuf) -> Self {
        Self {
            entity,
            fields,
            project_root,
        }
    }

    /// The entity this generator scaffolds.
    #[must_use]
    pub const fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// Fixed model destination, absolute under the project root.
    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        self.project_root
            .join(format!("app/Models/{}.php", self.entity.class_name()))
    }

    /// Whether the model artifact already exists.
    ///
    /// A hit is fatal to the whole run: the orchestrator must not write any
    /// artifact, model or otherwise, when this returns true.
    #[must_use]
    pub fn model_exists(&self) -> bool {
        self.model_path().exists()
    }

    /// Generate all artifacts in the fixed order: model, migration,
    /// controller, route registration, then the three views.
    #[must_use]
    pub fn generate(&self) -> Vec<GeneratedFile> {
        let mut files = vec![
            self.generate_model(),
            self.generate_migration(),
            self.generate_controller(),
            self.route_registration(),
        ];
        files.extend(self.generate_views());
        files
    }

    fn generate_model(&self) -> GeneratedFile {
        let fillable = self
            .fields
            .iter()
            .map(|f| format!("'{}'", f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let content = render(
            MODEL_STUB,
            &[
                ("modelName", self.entity.class_name()),
                ("fillable", fillable.as_str()),
            ],
        );

        GeneratedFile {
            path: PathBuf::from(format!("app/Models/{}.php", self.entity.class_name())),
            content,
            description: format!("Eloquent model for {}", self.entity.class_name()),
            append: false,
        }
    }

    fn generate_migration(&self) -> GeneratedFile {
        let table = self.entity.table_name();
        let schema_fields = self
            .fields
            .iter()
            .map(Field::schema_line)
            .collect::<Vec<_>>()
            .join("\n");
        let content = render(
            MIGRATION_STUB,
            &[
                ("tableName", table.as_str()),
                ("schemaFields", schema_fields.as_str()),
            ],
        );

        // One-second granularity; same-second re-generation for the same
        // entity collides and the later write wins.
        let timestamp = chrono::Utc::now().format("%Y_%m_%d_%H%M%S");

        GeneratedFile {
            path: PathBuf::from(format!(
                "database/migrations/{timestamp}_create_{table}_table.php"
            )),
            content,
            description: format!("migration for the {table} table"),
            append: false,
        }
    }

    fn generate_controller(&self) -> GeneratedFile {
        let content = render(
            CONTROLLER_STUB,
            &[
                ("modelName", self.entity.class_name()),
                ("pluralVariable", self.entity.plural_variable().as_str()),
                ("singularVariable", self.entity.singular_variable().as_str()),
                ("viewFolder", self.entity.view_folder().as_str()),
            ],
        );

        GeneratedFile {
            path: PathBuf::from(format!(
                "app/Http/Controllers/{}.php",
                self.entity.controller_name()
            )),
            content,
            description: format!("resource controller {}", self.entity.controller_name()),
            append: false,
        }
    }

    fn route_registration(&self) -> GeneratedFile {
        let content = format!(
            "Route::resource('{}', \\App\\Http\\Controllers\\{}::class);\n",
            self.entity.table_name(),
            self.entity.controller_name()
        );

        GeneratedFile {
            path: PathBuf::from(ROUTES_FILE),
            content,
            description: format!("resource route for {}", self.entity.table_name()),
            append: true,
        }
    }

    fn generate_views(&self) -> Vec<GeneratedFile> {
        let folder = self.entity.view_folder();
        let singular = self.entity.singular_variable();

        let table_head = self
            .fields
            .iter()
            .map(|f| format!("                <th>{}</th>", f.name.to_title_case()))
            .collect::<Vec<_>>()
            .join("\n");
        let table_body = self
            .fields
            .iter()
            .map(|f| format!("                    <td>{{{{ ${singular}->{} }}}}</td>", f.name))
            .collect::<Vec<_>>()
            .join("\n");

        let index = render(
            VIEW_INDEX_STUB,
            &[
                ("pluralTitle", self.entity.plural_title().as_str()),
                ("modelName", self.entity.class_name()),
                ("viewFolder", folder.as_str()),
                ("pluralVariable", self.entity.plural_variable().as_str()),
                ("singularVariable", singular.as_str()),
                ("tableHead", table_head.as_str()),
                ("tableBody", table_body.as_str()),
            ],
        );

        let create = render(
            VIEW_CREATE_STUB,
            &[
                ("modelName", self.entity.class_name()),
                ("viewFolder", folder.as_str()),
                ("formFields", self.form_fields(None).as_str()),
            ],
        );

        let edit = render(
            VIEW_EDIT_STUB,
            &[
                ("modelName", self.entity.class_name()),
                ("viewFolder", folder.as_str()),
                ("singularVariable", singular.as_str()),
                ("formFields", self.form_fields(Some(&singular)).as_str()),
            ],
        );

        vec![
            GeneratedFile {
                path: PathBuf::from(format!("resources/views/{folder}/index.blade.php")),
                content: index,
                description: format!("{folder} list view"),
                append: false,
            },
            GeneratedFile {
                path: PathBuf::from(format!("resources/views/{folder}/create.blade.php")),
                content: create,
                description: format!("{folder} create view"),
                append: false,
            },
            GeneratedFile {
                path: PathBuf::from(format!("resources/views/{folder}/edit.blade.php")),
                content: edit,
                description: format!("{folder} edit view"),
                append: false,
            },
        ]
    }

    /// One form fragment per field, in insertion order.
    ///
    /// `record` is the camel-case variable of an existing record. When
    /// present, each input's value echo falls back from any pending
    /// re-submitted value to the record's stored value; without it the echo
    /// has no fallback and the form starts empty.
    fn form_fields(&self, record: Option<&str>) -> String {
        self.fields
            .iter()
            .map(|f| form_fragment(f, record))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render one label + input + validation-error block for a field.
///
/// `text` fields become a multi-line textarea, `date` fields a date-typed
/// input, everything else a generic text input.
fn form_fragment(field: &Field, record: Option<&str>) -> String {
    let name = &field.name;
    let label = name.to_title_case();
    let value = record.map_or_else(
        || format!("{{{{ old('{name}') }}}}"),
        |var| format!("{{{{ old('{name}', ${var}->{name}) }}}}"),
    );
    let input = match field.field_type {
        FieldType::Text => {
            format!("<textarea name=\"{name}\" id=\"{name}\">{value}</textarea>")
        }
        FieldType::Date => {
            format!("<input type=\"date\" name=\"{name}\" id=\"{name}\" value=\"{value}\">")
        }
        _ => format!("<input type=\"text\" name=\"{name}\" id=\"{name}\" value=\"{value}\">"),
    };

    format!(
        "        <div class=\"field\">\n            \
         <label for=\"{name}\">{label}</label>\n            \
         {input}\n            \
         @error('{name}')\n                \
         <span class=\"error\">{{{{ $message }}}}</span>\n            \
         @enderror\n        </div>"
    )
}

/// A rendered artifact and its destination relative to the project root.
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from the project root
    pub path: PathBuf,
    /// Rendered file content
    pub content: String,
    /// Human description for the per-artifact confirmation message
    pub description: String,
    /// Appended to a pre-existing file instead of written whole
    pub append: bool,
}

impl GeneratedFile {
    /// Write the artifact under `project_root`.
    ///
    /// Whole-file writes create missing parent directories first (this is
    /// what creates the per-entity view folder). Appends require the
    /// destination to exist already; a missing route file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the destination cannot be created, opened or
    /// written.
    pub fn write_to(&self, project_root: &Path) -> Result<()> {
        let full_path = project_root.join(&self.path);

        if self.append {
            let mut dest = OpenOptions::new()
                .append(true)
                .open(&full_path)
                .with_context(|| format!("Failed to open {}", full_path.display()))?;
            dest.write_all(self.content.as_bytes())
                .with_context(|| format!("Failed to append to {}", full_path.display()))?;
        } else {
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&full_path, &self.content)
                .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
        }

        Ok(())
    }
}
