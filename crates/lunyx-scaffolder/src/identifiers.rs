//! Machine-safe identifiers derived from the display name

use crate::product::NamingScheme;

/// Raw answers collected from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub display_name: String,
    pub class_name: String,
}

/// Identifiers computed once from the display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    /// Display name lowercased with every whitespace character removed
    pub id_slug: String,
    /// `<namespace>.extension.<slug>`
    pub package_id: String,
    /// `<prefix>-<slug>`
    pub package_name: String,
    /// `<host>/<prefix>-<slug>.git`
    pub repository_url: String,
}

impl DerivedIdentifiers {
    pub fn derive(scheme: &NamingScheme, display_name: &str) -> Self {
        let id_slug = slugify(display_name);
        let package_name = format!("{}-{}", scheme.package_prefix, id_slug);

        Self {
            package_id: format!("{}.extension.{}", scheme.id_namespace, id_slug),
            repository_url: format!("{}/{}.git", scheme.repository_host, package_name),
            package_name,
            id_slug,
        }
    }
}

/// Lowercase and drop all whitespace, wherever it occurs
pub fn slugify(display_name: &str) -> String {
    display_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
