//! Error types for the scaffolding pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The two answers the scaffolder asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DisplayName,
    ClassName,
}

impl Field {
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::DisplayName => "Project name",
            Field::ClassName => "Class name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A required answer was empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} cannot be empty")]
pub struct ValidationError {
    pub field: Field,
}

/// Fatal failures of the scaffolding pipeline
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to read {field}: {source}")]
    Prompt {
        field: Field,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {artifact}: {source}")]
    Serialize {
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of the dependency install subprocess
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}", describe_code(*code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
