use crate::areas::comparison::Comparison;
use crate::areas::workbench::Workbench;
use crate::artifacts::filter::path_filter::PathFilter;
use std::path::Path;

impl Workbench {
    /// Diffs two arbitrary source trees. Relative paths are resolved against
    /// the working directory.
    pub fn diff_trees(
        &self,
        old: &Path,
        new: &Path,
        destination: &Path,
        filter: &PathFilter,
    ) -> anyhow::Result<()> {
        let comparison = Comparison::new(
            &self.path().join(old),
            &self.path().join(new),
            &self.path().join(destination),
        );

        let patch_set = comparison.run(filter)?;

        self.print_summary(
            &format!("{} -> {}", old.display(), new.display()),
            comparison.store().path(),
            &patch_set,
        )
    }
}
