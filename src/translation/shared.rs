//! Reloadable translator handle.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::translator::Translator;

/// A translator whose tables can be reloaded while other threads read them.
///
/// Reloading parses the new file completely before swapping it in, so a
/// reader holds either the old tables or the new ones, never a mix.
#[derive(Debug)]
pub struct SharedTranslator {
    path: PathBuf,
    current: RwLock<Arc<Translator>>,
}

impl SharedTranslator {
    /// Loads the mappings at `path` (missing file: empty tables).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let translator = Translator::load(&path)?;
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(translator)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the active translator.
    pub fn current(&self) -> Arc<Translator> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-reads the mappings file and swaps it in.
    ///
    /// On error the previous tables stay active.
    pub fn reload(&self) -> Result<Arc<Translator>> {
        let fresh = Arc::new(Translator::load(&self.path)?);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        drop(guard);
        Ok(fresh)
    }
}
