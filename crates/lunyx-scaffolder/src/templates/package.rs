//! Project descriptor (`package.json`) for the extension's own tooling

use crate::identifiers::DerivedIdentifiers;
use crate::product::ProductConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEPENDENCIES: &[(&str, &str)] = &[("@types/ace", "^0.0.50"), ("html-tag-js", "^1.1.41")];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("esbuild", "^0.25.4"),
    ("esbuild-sass-plugin", "^3.3.1"),
    ("inquirer", "^12.6.1"),
    ("jszip", "^3.10.1"),
];

/// Run-scripts, kept as a struct so they serialize in this order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scripts {
    pub setup: String,
    pub dev: String,
    pub build: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            setup: "node setup.js".to_string(),
            dev: "node esbuild.config.mjs --serve".to_string(),
            build: "node esbuild.config.mjs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub repository: String,
    pub author: String,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: Scripts,
    pub browserslist: String,
}

impl PackageDescriptor {
    pub fn new<C: ProductConfig>(config: &C, ids: &DerivedIdentifiers) -> Self {
        Self {
            name: ids.package_name.clone(),
            version: "1.0.0".to_string(),
            description: format!("{} Extension", config.display_name()),
            main: "src/main.js".to_string(),
            repository: ids.repository_url.clone(),
            author: config.package_author().to_string(),
            license: "MIT".to_string(),
            dependencies: to_map(DEPENDENCIES),
            dev_dependencies: to_map(DEV_DEPENDENCIES),
            scripts: Scripts::default(),
            browserslist: "cover 100%,not android < 5".to_string(),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}
