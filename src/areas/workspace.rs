use crate::artifacts::diff::diff_target::{FileSnapshot, SnapshotSet};
use crate::artifacts::filter::path_filter::PathFilter;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A source tree on local storage, as produced by decompilation.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file below the root, depth first. Nothing is pruned;
    /// filtering happens on the collected paths.
    pub fn list_files(&self) -> anyhow::Result<impl Iterator<Item = anyhow::Result<PathBuf>> + '_> {
        if !self.path.is_dir() {
            anyhow::bail!("The source tree does not exist: {}", self.path.display());
        }

        Ok(WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(err) => Some(Err(anyhow::Error::new(err).context(format!(
                    "Failed to walk the source tree {}",
                    self.path.display()
                )))),
            }))
    }

    /// Path of `file_path` below the root, `/`-separated and starting with `/`.
    pub fn relative_path(&self, file_path: &Path) -> anyhow::Result<String> {
        let relative = file_path.strip_prefix(&self.path).with_context(|| {
            format!(
                "{} is not inside {}",
                file_path.display(),
                self.path.display()
            )
        })?;

        Ok(relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(format!("/{}", name.to_string_lossy())),
                _ => None,
            })
            .collect())
    }

    /// Reads `file_path`, given relative to the root.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read source file {}", file_path.display()))
    }

    /// Snapshots of the files that `token` wins under `filter`.
    pub fn snapshots(&self, filter: &PathFilter, token: &str) -> anyhow::Result<SnapshotSet> {
        let mut snapshots = SnapshotSet::empty();

        for file_path in self.list_files()? {
            let file_path = file_path?;
            let relative = self.relative_path(&file_path)?;

            let Some(name) = filter.restrict(&relative, token) else {
                continue;
            };

            let content = self.read_file(file_path.strip_prefix(&self.path)?)?;
            snapshots
                .insert(FileSnapshot::from_content(name, &content))
                .with_context(|| format!("Failed to snapshot {}", file_path.display()))?;
        }

        if snapshots.is_empty() {
            log::warn!("No files in {} matched {token}", self.path.display());
        }
        log::debug!(
            "Collected {} files for {} in {}",
            snapshots.len(),
            token,
            self.path.display()
        );

        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteBin, FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn source_tree() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        dir.child("net/minecraft/client/Main.java")
            .write_str("class Main {}\n")
            .expect("write");
        dir.child("net/minecraft/server/Server.java")
            .write_str("class Server {}\n")
            .expect("write");
        dir.child("com/mojang/Blaze.java")
            .write_str("class Blaze {}\n")
            .expect("write");
        dir.child("META-INF/MANIFEST.MF")
            .write_str("Manifest-Version: 1.0\n")
            .expect("write");
        dir
    }

    #[fixture]
    fn package_filter() -> PathFilter {
        PathFilter::new(vec!["/net/minecraft".to_string(), "/com/mojang".to_string()])
            .expect("valid filter")
    }

    #[rstest]
    fn list_files_visits_every_regular_file(source_tree: TempDir) -> anyhow::Result<()> {
        let workspace = Workspace::new(source_tree.path().into());

        let mut files = workspace
            .list_files()?
            .map(|file| workspace.relative_path(&file?))
            .collect::<anyhow::Result<Vec<_>>>()?;
        files.sort();

        assert_eq!(
            files,
            vec![
                "/META-INF/MANIFEST.MF",
                "/com/mojang/Blaze.java",
                "/net/minecraft/client/Main.java",
                "/net/minecraft/server/Server.java",
            ]
        );

        Ok(())
    }

    #[test]
    fn list_files_fails_for_a_missing_root() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let workspace = Workspace::new(dir.path().join("missing").into());

        assert!(workspace.list_files().is_err());
    }

    #[rstest]
    fn snapshots_only_hold_files_won_by_the_token(
        source_tree: TempDir,
        package_filter: PathFilter,
    ) -> anyhow::Result<()> {
        let workspace = Workspace::new(source_tree.path().into());

        let minecraft = workspace.snapshots(&package_filter, "/net/minecraft")?;
        let mojang = workspace.snapshots(&package_filter, "/com/mojang")?;

        assert_eq!(
            minecraft.names().collect::<Vec<_>>(),
            vec![
                "net/minecraft/client/Main.java",
                "net/minecraft/server/Server.java"
            ]
        );
        assert_eq!(mojang.names().collect::<Vec<_>>(), vec!["com/mojang/Blaze.java"]);
        assert_eq!(
            mojang
                .get("com/mojang/Blaze.java")
                .map(FileSnapshot::lines),
            Some(&["class Blaze {}".to_string()][..])
        );

        Ok(())
    }

    #[rstest]
    fn unreadable_files_abort_the_snapshot(
        source_tree: TempDir,
        package_filter: PathFilter,
    ) -> anyhow::Result<()> {
        source_tree
            .child("net/minecraft/Broken.java")
            .write_binary(&[0xff, 0xfe, 0xfd])?;
        let workspace = Workspace::new(source_tree.path().into());

        let err = workspace
            .snapshots(&package_filter, "/net/minecraft")
            .unwrap_err();
        assert!(format!("{err:#}").contains("Broken.java"));

        Ok(())
    }

    #[rstest]
    fn unreadable_files_outside_the_filter_are_ignored(
        source_tree: TempDir,
        package_filter: PathFilter,
    ) -> anyhow::Result<()> {
        source_tree
            .child("assets/icon.png")
            .write_binary(&[0x89, 0x50, 0x4e, 0x47, 0xff])?;
        let workspace = Workspace::new(source_tree.path().into());

        assert_eq!(workspace.snapshots(&package_filter, "/net/minecraft")?.len(), 2);

        Ok(())
    }

    #[rstest]
    fn token_without_matching_files_yields_an_empty_set(source_tree: TempDir) -> anyhow::Result<()> {
        let filter = PathFilter::new(vec!["/org/lwjgl".to_string()])?;
        let workspace = Workspace::new(source_tree.path().into());

        assert!(workspace.snapshots(&filter, "/org/lwjgl")?.is_empty());

        Ok(())
    }

    fn relative_to_current_dir(path: &Path) -> anyhow::Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        let mut relative = current_dir
            .components()
            .skip(1)
            .map(|_| Component::ParentDir.as_os_str())
            .collect::<PathBuf>();
        relative.push(path.strip_prefix("/")?);

        Ok(relative)
    }

    #[rstest]
    fn relative_roots_are_read_in_place(
        source_tree: TempDir,
        package_filter: PathFilter,
    ) -> anyhow::Result<()> {
        let root = relative_to_current_dir(source_tree.path())?;
        assert!(root.is_relative());
        let workspace = Workspace::new(root.into());

        let mojang = workspace.snapshots(&package_filter, "/com/mojang")?;

        assert_eq!(
            mojang
                .get("com/mojang/Blaze.java")
                .map(FileSnapshot::lines),
            Some(&["class Blaze {}".to_string()][..])
        );

        Ok(())
    }
}
