//! Writing rendered artifacts to disk
//!
//! Writes are sequential and fail-fast: the first error stops the run and
//! files already written stay where they are.

use crate::error::ScaffoldError;
use crate::templates::ArtifactSet;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations the materializer needs
pub trait Filesystem {
    /// Create a directory and any missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents`
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// Create the source directory under `root`, then write every artifact in order.
///
/// Returns the paths written. Existing files are overwritten without a check.
pub fn materialize<F: Filesystem>(
    fs: &F,
    root: &Path,
    artifacts: &ArtifactSet,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let source_dir = root.join(artifacts.source_dir());
    fs.create_dir_all(&source_dir)
        .map_err(|source| ScaffoldError::CreateDir {
            path: source_dir.clone(),
            source,
        })?;
    tracing::debug!(dir = %source_dir.display(), "created source directory");

    let mut written = Vec::new();
    for artifact in artifacts.iter() {
        let target = root.join(&artifact.relative_path);
        fs.write_file(&target, &artifact.contents)
            .map_err(|source| ScaffoldError::WriteArtifact {
                path: artifact.relative_path.clone(),
                source,
            })?;
        tracing::debug!(file = %target.display(), bytes = artifact.contents.len(), "wrote artifact");
        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{Artifact, PACKAGE_FILE};
    use crate::testing::FailingFilesystem;

    fn artifacts() -> ArtifactSet {
        let artifact = |path: PathBuf, contents: &str| Artifact {
            relative_path: path,
            contents: contents.to_string(),
        };
        ArtifactSet {
            manifest: artifact(PathBuf::from("plugin.json"), "{}"),
            package: artifact(PathBuf::from("package.json"), "{\n  \"name\": \"x\"\n}"),
            entry: artifact(Path::new("src").join("main.js"), "class X {}\n"),
        }
    }

    #[test]
    fn test_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let written = materialize(&LocalFilesystem, dir.path(), &artifacts()).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(std::fs::read_to_string(dir.path().join("plugin.json")).unwrap(), "{}");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("src").join("main.js")).unwrap(),
            "class X {}\n"
        );
    }

    #[test]
    fn test_existing_files_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("package.json"), "old contents that are longer").unwrap();

        materialize(&LocalFilesystem, dir.path(), &artifacts()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{\n  \"name\": \"x\"\n}"
        );
    }

    #[test]
    fn test_directory_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the project root should be makes mkdir fail
        let root = dir.path().join("blocked");
        std::fs::write(&root, "").unwrap();

        let err = materialize(&LocalFilesystem, &root, &artifacts()).unwrap_err();

        assert!(matches!(err, ScaffoldError::CreateDir { .. }));
        assert!(!dir.path().join("plugin.json").exists());
        assert!(!dir.path().join("package.json").exists());
        assert_eq!(std::fs::read_to_string(&root).unwrap(), "");
    }

    #[test]
    fn test_second_write_failure_keeps_first_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        let fs = FailingFilesystem::failing_on(PACKAGE_FILE);

        let err = materialize(&fs, dir.path(), &artifacts()).unwrap_err();

        match err {
            ScaffoldError::WriteArtifact { path, source } => {
                assert_eq!(path, PathBuf::from("package.json"));
                assert_eq!(source.to_string(), "disk full");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(dir.path().join("plugin.json").exists());
        assert!(!dir.path().join("src").join("main.js").exists());
        assert_eq!(fs.attempts().len(), 2);
    }
}
