//! Quick CRUD scaffold implementation
//!
//! This module turns an entity name and an ordered field list into the
//! boilerplate artifacts of a Laravel-convention application: model,
//! migration, resource controller, route registration and Blade views.

pub mod field;
pub mod generator;
pub mod names;
pub mod render;

pub use field::{Field, FieldList, FieldType};
pub use generator::{GeneratedFile, ScaffoldGenerator};
pub use names::EntityName;
pub use render::render;
