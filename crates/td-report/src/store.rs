//! Design record storage API.

use crate::types::{DesignManifest, DesignRecord};
use crate::{ReportError, ReportResult};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk design store: one directory per design id holding
/// `manifest.json` and `design.json`.
#[derive(Clone)]
pub struct DesignStore {
    root_dir: PathBuf,
}

impl DesignStore {
    pub fn new(root_dir: PathBuf) -> ReportResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to a spec document, under `.trafo/designs`.
    pub fn for_document(document_path: &Path) -> ReportResult<Self> {
        let parent = document_path
            .parent()
            .ok_or_else(|| ReportError::InvalidPath {
                message: "document path has no parent directory".to_string(),
            })?;
        Self::new(parent.join(".trafo").join("designs"))
    }

    fn design_dir(&self, design_id: &str) -> PathBuf {
        self.root_dir.join(design_id)
    }

    pub fn has_design(&self, design_id: &str) -> bool {
        self.design_dir(design_id).join("manifest.json").exists()
    }

    pub fn save_design(
        &self,
        manifest: &DesignManifest,
        record: &DesignRecord,
    ) -> ReportResult<()> {
        let dir = self.design_dir(&manifest.design_id);
        fs::create_dir_all(&dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(dir.join("manifest.json"), manifest_json)?;

        let record_json = serde_json::to_string_pretty(record)?;
        fs::write(dir.join("design.json"), record_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, design_id: &str) -> ReportResult<DesignManifest> {
        let path = self.design_dir(design_id).join("manifest.json");
        if !path.exists() {
            return Err(ReportError::DesignNotFound {
                design_id: design_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_record(&self, design_id: &str) -> ReportResult<DesignRecord> {
        let path = self.design_dir(design_id).join("design.json");
        if !path.exists() {
            return Err(ReportError::DesignNotFound {
                design_id: design_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    pub fn list_designs(&self) -> ReportResult<Vec<DesignManifest>> {
        let mut designs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(designs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let design_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&design_id) {
                    designs.push(manifest);
                }
            }
        }

        designs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(designs)
    }

    pub fn delete_design(&self, design_id: &str) -> ReportResult<()> {
        let dir = self.design_dir(design_id);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}
