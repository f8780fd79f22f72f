use crate::config::OutputConfig;
use crate::storage::traits::{ArtifactStore, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed artifact store
///
/// Layout:
///
/// ```text
/// <images_dir>/<sku>/<image file name>
/// <debug_dir>/<dump name>
/// ```
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    images_dir: PathBuf,
    debug_dir: Option<PathBuf>,
}

impl FsArtifactStore {
    /// Creates a store; `debug_dir` of `None` disables page dumps
    pub fn new(images_dir: impl Into<PathBuf>, debug_dir: Option<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
            debug_dir,
        }
    }

    /// Creates a store from the output section of the configuration
    pub fn from_config(config: &OutputConfig) -> Self {
        let debug_dir = config
            .dump_html
            .then(|| PathBuf::from(&config.debug_dir));
        Self::new(&config.images_dir, debug_dir)
    }
}

impl ArtifactStore for FsArtifactStore {
    fn prepare(&self) -> StorageResult<()> {
        create_dir_all(&self.images_dir)
    }

    fn ensure_product_dir(&self, sku: &str) -> StorageResult<PathBuf> {
        check_name(sku)?;
        let dir = self.images_dir.join(sku);
        create_dir_all(&dir)?;
        Ok(dir)
    }

    fn save_image(&self, sku: &str, file_name: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        check_name(file_name)?;
        let path = self.ensure_product_dir(sku)?.join(file_name);
        fs::write(&path, bytes).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn save_page_dump(&self, name: &str, html: &str) -> StorageResult<Option<PathBuf>> {
        let Some(debug_dir) = &self.debug_dir else {
            return Ok(None);
        };

        let file_name = sanitize_dump_name(name);
        check_name(&file_name)?;
        create_dir_all(debug_dir)?;

        let path = debug_dir.join(file_name);
        fs::write(&path, html).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}

fn create_dir_all(path: &Path) -> StorageResult<()> {
    fs::create_dir_all(path).map_err(|source| StorageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Rejects names that would escape the target directory
fn check_name(name: &str) -> StorageResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Replaces characters that are awkward in file names
fn sanitize_dump_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '*' | ':' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
