//! Interactive prompt sequence
//!
//! All generator input is gathered here: the entity name, then a repeating
//! field-name/field-type prompt pair until a blank name ends collection.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::scaffold::{FieldList, FieldType};

/// Ask for the entity name, e.g. `Product`.
///
/// Empty input re-prompts; casing is canonicalized later by
/// [`crate::scaffold::EntityName`].
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn ask_entity_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What is the model name? (e.g., Product)")
        .interact_text()?;

    Ok(name.trim().to_string())
}

/// Field collection loop.
///
/// A blank name finishes collection. A duplicate name (case-sensitive,
/// exact match) prints an error and re-prompts without appending and
/// without asking for a type. Otherwise the type is selected from the
/// closed [`FieldType::ALL`] set, with `string` highlighted as default.
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn collect_fields() -> Result<FieldList> {
    let theme = ColorfulTheme::default();
    let mut fields = FieldList::new();

    loop {
        let name: String = Input::with_theme(&theme)
            .with_prompt("Field name (leave blank to finish)")
            .allow_empty(true)
            .interact_text()?;
        let name = name.trim().to_string();

        if name.is_empty() {
            break;
        }

        if fields.contains(&name) {
            println!(
                "{} The field '{}' has already been added!",
                style("✗").red().bold(),
                style(&name).yellow()
            );
            continue;
        }

        let selected = Select::with_theme(&theme)
            .with_prompt(format!("Type for '{name}'"))
            .items(&FieldType::ALL)
            .default(0)
            .interact()?;

        fields.push(name, FieldType::ALL[selected]);
    }

    Ok(fields)
}
