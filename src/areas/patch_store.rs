use crate::artifacts::patch::patch_set::{DiffBlock, PatchSet};
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

pub const REPORT_FILE: &str = "report.txt";
pub const PATCH_EXTENSION: &str = "patch";

/// Destination directory of one diff run.
///
/// Layout: `report.txt` at the root and one `<name>.patch` per changed file,
/// mirroring the source tree. Nothing is cleaned up on failure; rerunning
/// overwrites the same files. Patches from an earlier run whose file no
/// longer differs stay on disk, so only `report.txt` lists the current
/// changes.
#[derive(Debug, Clone)]
pub struct PatchStore {
    path: Box<Path>,
}

impl PatchStore {
    pub fn new(path: Box<Path>) -> Self {
        PatchStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn report_path(&self) -> PathBuf {
        self.path.join(REPORT_FILE)
    }

    pub fn patch_path(&self, name: &str) -> anyhow::Result<PathBuf> {
        let relative = Path::new(name);
        if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
            anyhow::bail!("Refusing to write a patch outside the destination: {name}");
        }

        Ok(self.path.join(format!("{name}.{PATCH_EXTENSION}")))
    }

    pub fn write(&self, patch_set: &PatchSet) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create directory {}", self.path.display()))?;

        let report_path = self.report_path();
        std::fs::write(&report_path, patch_set.render_report())
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;

        patch_set
            .files()
            .iter()
            .map(|block| self.write_block(block))
            .collect::<anyhow::Result<Vec<()>>>()?;

        Ok(())
    }

    fn write_block(&self, block: &DiffBlock) -> anyhow::Result<()> {
        let patch_path = self.patch_path(block.name())?;

        if let Some(parent) = patch_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&patch_path, block.render())
            .with_context(|| format!("Failed to write patch {}", patch_path.display()))
    }
}
