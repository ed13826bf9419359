use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use sha2::{Digest, Sha256};

use super::error::LoadError;
use super::loader::{load_and_enrich, read_file, SourceFormat};
use super::model::EnrichedDataset;

// ---------------------------------------------------------------------------
// Source identity
// ---------------------------------------------------------------------------

/// Identifies a source by path and the SHA-256 of its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    pub path: PathBuf,
    pub checksum: [u8; 32],
}

impl SourceKey {
    pub fn new(path: &Path, contents: &[u8]) -> Self {
        SourceKey {
            path: path.to_path_buf(),
            checksum: Sha256::digest(contents).into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetCache
// ---------------------------------------------------------------------------

/// Holds the most recently loaded dataset. A load with an unchanged
/// [`SourceKey`] returns the same `Arc` without re-parsing.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(SourceKey, Arc<EnrichedDataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`, reusing the cached dataset if the file is unchanged.
    /// A failed load leaves the cache untouched.
    pub fn load(&mut self, path: &Path) -> Result<Arc<EnrichedDataset>, LoadError> {
        let (format, contents) = read_file(path)?;
        self.load_contents(path, format, contents)
    }

    /// Like [`load`](Self::load) for contents already read from `path`.
    /// The key is computed from exactly the bytes that get parsed.
    pub fn load_contents(
        &mut self,
        path: &Path,
        format: SourceFormat,
        contents: Bytes,
    ) -> Result<Arc<EnrichedDataset>, LoadError> {
        let key = SourceKey::new(path, &contents);

        if let Some((cached_key, dataset)) = &self.entry {
            if *cached_key == key {
                log::debug!("Dataset cache hit for {}", path.display());
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load_and_enrich(format, contents)?);
        self.entry = Some((key, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Key of the cached source, if any.
    pub fn cached_key(&self) -> Option<&SourceKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
