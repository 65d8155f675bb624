use crate::areas::workbench::Workbench;
use crate::artifacts::patch::patch_set::{ChangeMarker, PatchSet};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Workbench {
    pub(crate) fn print_summary(
        &self,
        title: &str,
        destination: &Path,
        patch_set: &PatchSet,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", title.bold())?;

        for line in patch_set.report() {
            writeln!(self.writer(), "{} {}", line.marker().paint(), line.name())?;
        }

        let counts = [
            ChangeMarker::Added,
            ChangeMarker::Removed,
            ChangeMarker::Modified,
        ]
        .iter()
        .map(|marker| {
            let label: &str = marker.into();
            format!("{} {label}", patch_set.count(*marker))
        })
        .collect::<Vec<_>>()
        .join(", ");

        writeln!(
            self.writer(),
            "{} files changed ({counts})",
            patch_set.report().len()
        )?;
        writeln!(
            self.writer(),
            "Patches written to {}",
            destination.display()
        )?;

        Ok(())
    }
}
