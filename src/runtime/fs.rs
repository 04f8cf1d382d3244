//! File system operations.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_file_impl(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        let file =
            fs::File::create(path).with_context(|| format!("Failed to create file {:?}", path))?;
        Ok(Box::new(std::io::BufWriter::new(file)))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn rename_impl(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)
            .with_context(|| format!("Failed to rename {:?} to {:?}", from, to))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.part");

        {
            let mut writer = runtime.create_file(&file_path).unwrap();
            writer.write_all(b"streamed content").unwrap();
            writer.flush().unwrap();
        }
        assert!(runtime.exists(&file_path));

        let final_path = dir.path().join("test.tar.gz");
        runtime.rename(&file_path, &final_path).unwrap();
        assert!(!runtime.exists(&file_path));
        assert_eq!(std::fs::read(&final_path).unwrap(), b"streamed content");

        runtime.remove_file(&final_path).unwrap();
        assert!(!runtime.exists(&final_path));
    }

    #[test]
    fn test_real_runtime_rename_replaces_existing() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let from = dir.path().join("new.part");
        let to = dir.path().join("old.tar.gz");
        std::fs::write(&from, "new").unwrap();
        std::fs::write(&to, "stale").unwrap();

        runtime.rename(&from, &to).unwrap();

        assert_eq!(std::fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn test_real_runtime_create_dir_all_is_idempotent() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("sub/nested");

        runtime.create_dir_all(&sub_dir).unwrap();
        runtime.create_dir_all(&sub_dir).unwrap();
        assert!(sub_dir.is_dir());
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;

        let result = runtime.remove_file(std::path::Path::new("/nonexistent/path/file.txt"));
        assert!(result.is_err());

        let result = runtime.create_file(std::path::Path::new("/nonexistent/path/file.txt"));
        let err = result.err().unwrap();
        assert!(err.to_string().contains("/nonexistent/path/file.txt"));
    }
}
