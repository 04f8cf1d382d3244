use log::debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Tracks partial downloads that must be removed on interruption
#[derive(Default)]
pub struct CleanupContext {
    paths: Vec<PathBuf>,
}

impl CleanupContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path to be cleaned up on interruption
    pub fn add(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Remove a path from the cleanup list once its operation has finished
    pub fn remove(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Delete all registered files
    pub fn cleanup(&self) {
        for path in &self.paths {
            debug!("Cleaning up: {:?}", path);
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Type alias for shared cleanup context
pub type SharedCleanupContext = Arc<Mutex<CleanupContext>>;

/// Create a new shared cleanup context
pub fn new_shared() -> SharedCleanupContext {
    Arc::new(Mutex::new(CleanupContext::new()))
}

/// Keeps a path registered in the cleanup context while the guard is alive
pub struct CleanupGuard {
    ctx: SharedCleanupContext,
    path: PathBuf,
}

impl CleanupGuard {
    pub fn new(ctx: SharedCleanupContext, path: PathBuf) -> Self {
        if let Ok(mut guard) = ctx.lock() {
            guard.add(path.clone());
        }
        Self { ctx, path }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.ctx.lock() {
            guard.remove(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cleanup_context_add_remove() {
        let mut ctx = CleanupContext::new();
        let path = PathBuf::from("/tmp/graal.tar.gz.part");

        ctx.add(path.clone());
        assert_eq!(ctx.paths().len(), 1);

        ctx.remove(&path);
        assert!(ctx.paths().is_empty());
    }

    #[test]
    fn test_cleanup_context_cleanup_files() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("graal.tar.gz.part");
        fs::write(&file_path, "partial").unwrap();

        let mut ctx = CleanupContext::new();
        ctx.add(file_path.clone());

        ctx.cleanup();
        assert!(!file_path.exists());
    }

    #[test]
    fn test_cleanup_context_missing_file_is_ignored() {
        let dir = tempdir().unwrap();
        let mut ctx = CleanupContext::new();
        ctx.add(dir.path().join("never-created.part"));

        ctx.cleanup();
    }

    #[test]
    fn test_cleanup_guard_registers_while_alive() {
        let ctx = new_shared();
        let path = PathBuf::from("/tmp/graal.tar.gz.part");

        {
            let _guard = CleanupGuard::new(Arc::clone(&ctx), path.clone());
            assert_eq!(ctx.lock().unwrap().paths(), &[path.clone()]);
        }

        assert!(ctx.lock().unwrap().paths().is_empty());
    }
}
