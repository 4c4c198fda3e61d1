//! quickcrud library
//!
//! Interactive CRUD scaffolding for Laravel-convention applications: one
//! prompt sequence in, five kinds of boilerplate artifacts out.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod prompt;
pub mod scaffold;

pub use commands::CrudCommand;
pub use scaffold::{EntityName, Field, FieldList, FieldType, GeneratedFile, ScaffoldGenerator};
