//! Placeholder substitution for stub templates
//!
//! Stubs mark insertion points with `{{token}}` literals (no whitespace
//! inside the braces). The generated artifacts themselves contain Blade
//! echoes like `{{ old('title') }}`, which never match a token, so the two
//! brace styles coexist in the same stub text.

/// Replace every occurrence of each `{{token}}` marker in `template`.
///
/// Substitutions are applied in order; tokens are disjoint literal markers,
/// so the order only matters if a replacement were to contain another token
/// (which the fixed stubs never do). Markers for tokens not present in the
/// substitution list are left untouched.
#[must_use]
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (token, replacement) in substitutions {
        output = output.replace(&format!("{{{{{token}}}}}"), replacement);
    }
    output
}
