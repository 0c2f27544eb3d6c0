use crate::model::{Listing, StorageError};
use crate::storage::ListingStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Known-set kept as a JSON array in a single file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ListingStore for JsonFileStorage {
    fn load(&self) -> Vec<Listing> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No previous results at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Error loading previous results from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Listing>>(&content) {
            Ok(listings) => {
                info!("Loaded {} previous results", listings.len());
                listings
            }
            Err(e) => {
                warn!("Error parsing previous results in {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, listings: &[Listing]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(listings)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
