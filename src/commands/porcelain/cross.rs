use crate::areas::comparison::Comparison;
use crate::areas::workbench::Workbench;
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::side::Side;

impl Workbench {
    /// Diffs the server tree of one release against its client tree.
    pub fn diff_sides(&self, version: &str, filter: &PathFilter) -> anyhow::Result<()> {
        let comparison = Comparison::new(
            &self.existing_source_dir(version, Side::Server)?,
            &self.existing_source_dir(version, Side::Client)?,
            &self.cross_dir(version),
        );

        log::info!("Creating server to client patches for {version}");
        let patch_set = comparison.run(filter)?;

        self.print_summary(
            &format!("{version}: {} -> {}", Side::Server, Side::Client),
            comparison.store().path(),
            &patch_set,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    #[test]
    fn client_only_classes_show_up_as_added() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("1.0/decomp/server/net/minecraft/Game.java")
            .write_str("tick();\n")?;
        dir.child("1.0/decomp/client/net/minecraft/Game.java")
            .write_str("tick();\n")?;
        dir.child("1.0/decomp/client/net/minecraft/client/Renderer.java")
            .write_str("draw();\n")?;

        let workbench = Workbench::new(&dir.path().to_string_lossy(), Box::new(std::io::sink()))?;
        let filter = PathFilter::new(vec!["/net/minecraft".to_string()])?;
        workbench.diff_sides("1.0", &filter)?;

        assert_eq!(
            std::fs::read_to_string(dir.path().join("1.0/decomp/server_to_client/report.txt"))?,
            "+ net/minecraft/client/Renderer.java\n"
        );

        Ok(())
    }
}
