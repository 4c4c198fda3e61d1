//! Interactive CRUD scaffolding command
//!
//! Sequences the whole run: prompt for the entity name, collect fields,
//! check the model precondition, then generate and write every artifact in
//! a fixed order with a confirmation line per artifact. Only the
//! model-exists precondition halts the run early; later steps are
//! best-effort with no rollback.

use anyhow::{bail, Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::prompt;
use crate::scaffold::{EntityName, FieldList, GeneratedFile, ScaffoldGenerator};

static SUCCESS: Emoji = Emoji("✓", "√");

/// Generate a CRUD resource (model, migration, controller, route, views).
pub struct CrudCommand {
    project_root: PathBuf,
}

impl CrudCommand {
    /// Create a command rooted at an explicit project directory.
    #[must_use]
    pub const fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Create a command rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the current directory cannot be determined.
    pub fn from_current_dir() -> Result<Self> {
        let project_root =
            std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(project_root))
    }

    /// Run the interactive prompt sequence, then scaffold.
    ///
    /// # Errors
    ///
    /// Returns an error when a prompt fails, the model already exists, or
    /// an artifact cannot be written.
    pub fn execute(&self) -> Result<()> {
        let entity = EntityName::new(&prompt::ask_entity_name()?);
        let fields = prompt::collect_fields()?;

        println!(
            "\n{} {} {}",
            style("Scaffolding CRUD for").cyan().bold(),
            style(entity.class_name()).green().bold(),
            style("...").cyan().bold()
        );

        let files = self.scaffold(entity.clone(), fields)?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );
        for file in &files {
            println!(
                "  {} {} ({})",
                style(SUCCESS).green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        print_success(&entity);
        Ok(())
    }

    /// Check the model precondition, then generate and write all artifacts
    /// in order: model, migration, controller, route append, views.
    ///
    /// Returns the written artifacts for reporting.
    ///
    /// # Errors
    ///
    /// Returns an error before any write when the model already exists,
    /// or when a destination cannot be written (later artifacts are then
    /// skipped, already-written ones are left in place).
    pub fn scaffold(&self, entity: EntityName, fields: FieldList) -> Result<Vec<GeneratedFile>> {
        let generator = ScaffoldGenerator::new(entity, fields, self.project_root.clone());

        if generator.model_exists() {
            bail!(
                "The model {} already exists!",
                generator.entity().class_name()
            );
        }

        let files = generator.generate();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        for file in &files {
            spinner.set_message(format!("Writing {}...", file.path.display()));
            file.write_to(&self.project_root)?;
        }

        spinner.finish_and_clear();
        Ok(files)
    }
}

fn print_success(entity: &EntityName) {
    println!(
        "\n{} CRUD scaffold for {} is ready!",
        style("✨").green().bold(),
        style(entity.class_name()).green().bold()
    );
    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Run the migration: {}",
        style("php artisan migrate").yellow()
    );
    println!(
        "  2. Open the resource: {}",
        style(format!("http://localhost:8000/{}", entity.table_name())).yellow()
    );
}
