//! Product configuration for the scaffolder
//!
//! The trait collects every fixed string the pipeline needs (naming
//! constants, author block, host runtime, install command) so the rest of
//! the crate never hard-codes product details.

use anyhow::{Context, Result};
use url::Url;

const NPM_INSTALL_ARGS: &[&str] = &["install"];

/// Author block written into the generated manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: &'static str,
    pub email: &'static str,
    pub github: &'static str,
}

/// Configuration trait for a scaffolded extension product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Namespace prefix of the manifest identifier (`<namespace>.extension.<slug>`)
    fn id_namespace(&self) -> &'static str;

    /// Prefix of the package name and repository name (`<prefix>-<slug>`)
    fn package_prefix(&self) -> &'static str;

    /// Default repository host, without a trailing slash
    fn repository_host(&self) -> &'static str;

    /// Environment variable name for overriding the repository host
    fn repository_host_env(&self) -> &'static str;

    /// Author block of the generated manifest
    fn author(&self) -> AuthorInfo;

    /// Author string of the generated project descriptor
    fn package_author(&self) -> &'static str;

    /// Global object the host runtime exposes to loaded extensions
    fn host_global(&self) -> &'static str;

    /// Program and arguments that install the project's dependencies
    fn install_command(&self) -> (&'static str, &'static [&'static str]);

    /// Command that starts the development workflow
    fn dev_command(&self) -> &'static str;

    /// Install command as the user would type it
    fn install_command_line(&self) -> String {
        let (program, args) = self.install_command();
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The built-in Lunyx extension product
#[derive(Debug, Clone, Copy, Default)]
pub struct Lunyx;

impl ProductConfig for Lunyx {
    fn name(&self) -> &'static str {
        "lunyx"
    }

    fn display_name(&self) -> &'static str {
        "Lunyx"
    }

    fn id_namespace(&self) -> &'static str {
        "lunyx"
    }

    fn package_prefix(&self) -> &'static str {
        "lunyx-extension"
    }

    fn repository_host(&self) -> &'static str {
        "https://github.com/LunyxDevelopment"
    }

    fn repository_host_env(&self) -> &'static str {
        "LUNYX_REPOSITORY_HOST"
    }

    fn author(&self) -> AuthorInfo {
        AuthorInfo {
            name: "Rugved",
            email: "rugveddanej.mail@gmail.com",
            github: "rugveddanej",
        }
    }

    fn package_author(&self) -> &'static str {
        "Lunyx Development"
    }

    fn host_global(&self) -> &'static str {
        "acode"
    }

    fn install_command(&self) -> (&'static str, &'static [&'static str]) {
        // npm ships as a batch shim on Windows
        if cfg!(windows) {
            ("npm.cmd", NPM_INSTALL_ARGS)
        } else {
            ("npm", NPM_INSTALL_ARGS)
        }
    }

    fn dev_command(&self) -> &'static str {
        "npm run dev"
    }
}

/// Naming constants resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    pub id_namespace: String,
    pub package_prefix: String,
    pub repository_host: String,
}

impl NamingScheme {
    /// Build the scheme from a product config, honouring the repository host override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let host = match std::env::var(config.repository_host_env()) {
            Ok(value) if !value.is_empty() => {
                Url::parse(&value).with_context(|| {
                    format!(
                        "Invalid repository host in {}: {}",
                        config.repository_host_env(),
                        value
                    )
                })?;
                value
            }
            _ => config.repository_host().to_string(),
        };

        Ok(Self::new(config, &host))
    }

    /// Build the scheme with an explicit repository host
    pub fn new<C: ProductConfig>(config: &C, repository_host: &str) -> Self {
        Self {
            id_namespace: config.id_namespace().to_string(),
            package_prefix: config.package_prefix().to_string(),
            repository_host: repository_host.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_command_line() {
        let line = Lunyx.install_command_line();
        assert!(line.starts_with("npm"));
        assert!(line.ends_with(" install"));
    }

    #[test]
    fn test_scheme_strips_trailing_slash() {
        let scheme = NamingScheme::new(&Lunyx, "https://git.example.com/team/");
        assert_eq!(scheme.repository_host, "https://git.example.com/team");
        assert_eq!(scheme.id_namespace, "lunyx");
        assert_eq!(scheme.package_prefix, "lunyx-extension");
    }

    #[test]
    fn test_scheme_defaults_to_product_host() {
        let scheme = NamingScheme::new(&Lunyx, Lunyx.repository_host());
        assert_eq!(scheme.repository_host, "https://github.com/LunyxDevelopment");
    }
}
