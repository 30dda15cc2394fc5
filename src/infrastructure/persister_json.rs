use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::{Snapshot, SnapshotPersister, StdResult};

/// A persister that writes the snapshot as a pretty-printed JSON document.
///
/// The document is written next to the target and renamed over it, so readers never see a partial file.
pub struct JsonFilePersister {
    path: PathBuf,
}

impl JsonFilePersister {
    /// Creates a new `JsonFilePersister` writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Retrieves the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");

        self.path.with_file_name(file_name)
    }
}

#[async_trait::async_trait]
impl SnapshotPersister for JsonFilePersister {
    async fn persist(&self, snapshot: &Snapshot) -> StdResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let mut document = serde_json::to_string_pretty(snapshot)?;
        document.push('\n');

        let staging_path = self.staging_path();
        tokio::fs::write(&staging_path, document)
            .await
            .with_context(|| format!("Failed to write {}", staging_path.display()))?;
        if let Err(e) = tokio::fs::rename(&staging_path, &self.path).await {
            let _ = tokio::fs::remove_file(&staging_path).await;
            return Err(e).with_context(|| format!("Failed to replace {}", self.path.display()));
        }
        debug!("Renamed {} to {}", staging_path.display(), self.path.display());

        Ok(())
    }
}
