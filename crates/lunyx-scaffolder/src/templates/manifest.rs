//! Extension manifest (`plugin.json`) read by the host platform

use crate::identifiers::DerivedIdentifiers;
use crate::product::ProductConfig;
use serde::{Deserialize, Serialize};

/// Lowest host version the generated extension declares support for
pub const MIN_VERSION_CODE: u32 = 290;

/// Author block of the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestAuthor {
    pub name: String,
    pub email: String,
    pub github: String,
}

/// Extension manifest; fields serialize in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Namespaced identifier (`<namespace>.extension.<slug>`)
    pub id: String,

    /// Human-readable name shown by the host
    pub name: String,

    /// Bundled entry point, relative to the packaged extension
    pub main: String,

    pub version: String,
    pub readme: String,
    pub icon: String,

    /// Extra files to bundle
    pub files: Vec<String>,

    pub min_version_code: u32,
    pub license: String,
    pub changelogs: String,
    pub keywords: Vec<String>,

    /// Store price; generated extensions are free
    pub price: u32,

    pub author: ManifestAuthor,
}

impl PluginManifest {
    pub fn new<C: ProductConfig>(config: &C, display_name: &str, ids: &DerivedIdentifiers) -> Self {
        let author = config.author();

        Self {
            id: ids.package_id.clone(),
            name: format!("{}: {}", config.display_name(), display_name),
            main: "main.js".to_string(),
            version: "1.0.0".to_string(),
            readme: "readme.md".to_string(),
            icon: "icon.png".to_string(),
            files: Vec::new(),
            min_version_code: MIN_VERSION_CODE,
            license: "MIT".to_string(),
            changelogs: "changelogs.md".to_string(),
            keywords: Vec::new(),
            price: 0,
            author: ManifestAuthor {
                name: author.name.to_string(),
                email: author.email.to_string(),
                github: author.github.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Lunyx, NamingScheme};

    fn manifest(display_name: &str) -> PluginManifest {
        let scheme = NamingScheme::new(&Lunyx, Lunyx.repository_host());
        let ids = DerivedIdentifiers::derive(&scheme, display_name);
        PluginManifest::new(&Lunyx, display_name, &ids)
    }

    #[test]
    fn test_manifest_uses_derived_id_and_raw_name() {
        let m = manifest("My Cool Ext");
        assert_eq!(m.id, "lunyx.extension.mycoolext");
        assert_eq!(m.name, "Lunyx: My Cool Ext");
    }

    #[test]
    fn test_manifest_defaults() {
        let m = manifest("x");
        assert!(m.keywords.is_empty());
        assert!(m.files.is_empty());
        assert_eq!(m.price, 0);
        assert_eq!(m.min_version_code, MIN_VERSION_CODE);
        assert_eq!(m.license, "MIT");
    }

    #[test]
    fn test_manifest_field_names() {
        let value = serde_json::to_value(manifest("x")).unwrap();
        assert_eq!(value["minVersionCode"], 290);
        assert_eq!(value["author"]["github"], "rugveddanej");
    }
}
