use crate::artifacts::side::Side;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

const DECOMPILED_DIR: &str = "decomp";
const CROSS_SIDE_DIR: &str = "server_to_client";

/// Directory holding the decompiled releases, plus the writer commands
/// report to.
///
/// Layout, as left behind by the acquisition pipeline:
///
/// ```text
/// <root>/<version>/decomp/<side>/...          decompiled sources
/// <root>/<version>/decomp/server_to_client/   cross-side patches
/// <root>/<from>_to_<to>/<side>/               release patches
/// ```
pub struct Workbench {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Workbench {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Failed to open working directory {path}"))?;

        Ok(Workbench {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn source_dir(&self, version: &str, side: Side) -> PathBuf {
        self.path
            .join(version)
            .join(DECOMPILED_DIR)
            .join(side.as_str())
    }

    pub fn release_dir(&self, from: &str, to: &str, side: Side) -> PathBuf {
        self.path
            .join(format!("{from}_to_{to}"))
            .join(side.as_str())
    }

    pub fn cross_dir(&self, version: &str) -> PathBuf {
        self.path
            .join(version)
            .join(DECOMPILED_DIR)
            .join(CROSS_SIDE_DIR)
    }

    /// Like [`Workbench::source_dir`], but the tree must already exist.
    pub fn existing_source_dir(&self, version: &str, side: Side) -> anyhow::Result<PathBuf> {
        let dir = self.source_dir(version, side);
        if !dir.is_dir() {
            anyhow::bail!(
                "No decompiled {side} sources for {version} at {}; fetch and decompile the release first",
                dir.display()
            );
        }

        Ok(dir)
    }
}
