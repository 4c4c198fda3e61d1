//! Naming derivations for a scaffolded entity
//!
//! Every generated artifact derives its identifiers from a single
//! `EntityName`, so one run is internally consistent: the model class,
//! table name, controller class, view folder and template variables all
//! come from the same set of transforms.

use inflector::Inflector;

/// The user-named data concept being scaffolded (e.g., "Product").
///
/// The raw input is trimmed and its first character uppercased on intake;
/// all other derivations flow from that canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    /// Canonicalize a raw entity name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quickcrud::scaffold::EntityName;
    /// assert_eq!(EntityName::new("product").class_name(), "Product");
    /// assert_eq!(EntityName::new("Product").class_name(), "Product");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut chars = raw.trim().chars();
        let name = chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        });
        Self(name)
    }

    /// Model class name, e.g. `Product`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.0
    }

    /// Controller class name, e.g. `ProductController`.
    #[must_use]
    pub fn controller_name(&self) -> String {
        format!("{}Controller", self.0)
    }

    /// Database table name: snake-case plural, e.g. `products`.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.0.to_snake_case().to_plural()
    }

    /// Blade view folder, equal to the table name.
    #[must_use]
    pub fn view_folder(&self) -> String {
        self.table_name()
    }

    /// Plural camel-case template variable, e.g. `products`, `userProfiles`.
    #[must_use]
    pub fn plural_variable(&self) -> String {
        self.table_name().to_camel_case()
    }

    /// Singular camel-case template variable, e.g. `product`.
    #[must_use]
    pub fn singular_variable(&self) -> String {
        self.0.to_camel_case()
    }

    /// Human-readable plural heading, e.g. `Products`, `User Profiles`.
    #[must_use]
    pub fn plural_title(&self) -> String {
        self.0.to_title_case().to_plural()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_uppercases_first_char() {
        assert_eq!(EntityName::new("product").class_name(), "Product");
        assert_eq!(EntityName::new("  product  ").class_name(), "Product");
        assert_eq!(EntityName::new("Product").class_name(), "Product");
    }

    #[test]
    fn test_table_name() {
        assert_eq!(EntityName::new("Product").table_name(), "products");
        assert_eq!(EntityName::new("Category").table_name(), "categories");
        assert_eq!(EntityName::new("UserProfile").table_name(), "user_profiles");
    }

    #[test]
    fn test_controller_name() {
        assert_eq!(
            EntityName::new("Product").controller_name(),
            "ProductController"
        );
    }

    #[test]
    fn test_view_folder_equals_table_name() {
        let entity = EntityName::new("Product");
        assert_eq!(entity.view_folder(), entity.table_name());
    }

    #[test]
    fn test_template_variables() {
        let entity = EntityName::new("Product");
        assert_eq!(entity.plural_variable(), "products");
        assert_eq!(entity.singular_variable(), "product");

        let entity = EntityName::new("UserProfile");
        assert_eq!(entity.plural_variable(), "userProfiles");
        assert_eq!(entity.singular_variable(), "userProfile");
    }

    #[test]
    fn test_plural_title() {
        assert_eq!(EntityName::new("Product").plural_title(), "Products");
        assert_eq!(EntityName::new("UserProfile").plural_title(), "User Profiles");
    }
}
