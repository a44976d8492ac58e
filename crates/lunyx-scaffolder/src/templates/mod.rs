//! Artifact rendering
//!
//! This module provides:
//! - The extension manifest (`plugin.json`)
//! - The project descriptor (`package.json`)
//! - The source entry file (`src/main.js`)
//! - `render`, which builds all three in write order

pub mod entry;
pub mod manifest;
pub mod package;

use crate::error::ScaffoldError;
use crate::identifiers::{DerivedIdentifiers, ScaffoldRequest};
use crate::product::ProductConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use entry::{render_entry, HostBinding};
pub use manifest::PluginManifest;
pub use package::PackageDescriptor;

pub const MANIFEST_FILE: &str = "plugin.json";
pub const PACKAGE_FILE: &str = "package.json";
pub const SOURCE_DIR: &str = "src";
pub const ENTRY_FILE: &str = "main.js";

/// A single generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project root
    pub relative_path: PathBuf,
    pub contents: String,
}

/// The three generated files, in the order they are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub manifest: Artifact,
    pub package: Artifact,
    pub entry: Artifact,
}

impl ArtifactSet {
    /// Directory that must exist before the entry file is written
    pub fn source_dir(&self) -> &Path {
        Path::new(SOURCE_DIR)
    }

    /// Artifacts in write order: manifest, project descriptor, entry file
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.manifest, &self.package, &self.entry].into_iter()
    }
}

/// Render every artifact from the request and its derived identifiers
pub fn render<C: ProductConfig>(
    config: &C,
    request: &ScaffoldRequest,
    ids: &DerivedIdentifiers,
) -> Result<ArtifactSet, ScaffoldError> {
    let manifest = PluginManifest::new(config, &request.display_name, ids);
    let package = PackageDescriptor::new(config, ids);
    let host = HostBinding {
        global: config.host_global(),
    };

    Ok(ArtifactSet {
        manifest: Artifact {
            relative_path: PathBuf::from(MANIFEST_FILE),
            contents: to_json(MANIFEST_FILE, &manifest)?,
        },
        package: Artifact {
            relative_path: PathBuf::from(PACKAGE_FILE),
            contents: to_json(PACKAGE_FILE, &package)?,
        },
        entry: Artifact {
            relative_path: Path::new(SOURCE_DIR).join(ENTRY_FILE),
            contents: render_entry(&request.class_name, host),
        },
    })
}

/// Two-space indented JSON, no trailing newline
fn to_json<T: Serialize>(artifact: &'static str, value: &T) -> Result<String, ScaffoldError> {
    serde_json::to_string_pretty(value).map_err(|source| ScaffoldError::Serialize { artifact, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Lunyx, NamingScheme};

    fn rendered(display_name: &str, class_name: &str) -> ArtifactSet {
        let scheme = NamingScheme::new(&Lunyx, Lunyx.repository_host());
        let request = ScaffoldRequest {
            display_name: display_name.to_string(),
            class_name: class_name.to_string(),
        };
        let ids = DerivedIdentifiers::derive(&scheme, &request.display_name);
        render(&Lunyx, &request, &ids).unwrap()
    }

    #[test]
    fn test_write_order_and_paths() {
        let set = rendered("My Cool Ext", "CoolExt");
        let paths: Vec<_> = set.iter().map(|a| a.relative_path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("plugin.json"),
                PathBuf::from("package.json"),
                Path::new("src").join("main.js"),
            ]
        );
        assert!(set.entry.relative_path.starts_with(set.source_dir()));
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let set = rendered("My Cool Ext", "CoolExt");
        assert!(set.manifest.contents.starts_with("{\n  \"id\": \"lunyx.extension.mycoolext\","));
        assert!(set.manifest.contents.contains("\n  \"author\": {\n    \"name\""));
        assert!(set.package.contents.starts_with("{\n  \"name\": \"lunyx-extension-mycoolext\","));
        assert!(!set.manifest.contents.ends_with('\n'));
    }

    #[test]
    fn test_repository_url_in_descriptor() {
        let set = rendered("My Cool Ext", "CoolExt");
        let value: serde_json::Value = serde_json::from_str(&set.package.contents).unwrap();
        assert_eq!(
            value["repository"],
            "https://github.com/LunyxDevelopment/lunyx-extension-mycoolext.git"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(rendered("A b", "C"), rendered("A b", "C"));
    }

    #[test]
    fn test_entry_embeds_class_name() {
        let set = rendered("x", "Widget");
        assert!(set.entry.contents.contains("class Widget {"));
        assert!(set.entry.contents.contains("new Widget();"));
    }
}
