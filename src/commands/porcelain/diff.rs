use crate::areas::comparison::Comparison;
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::patch::patch_set::PatchSet;

impl Comparison {
    /// Diffs both trees filter by filter, in configured order, and folds the
    /// per-filter results into one patch set.
    pub fn diff(&self, filter: &PathFilter) -> anyhow::Result<PatchSet> {
        let per_filter = filter
            .tokens()
            .iter()
            .map(|token| self.diff_filter(filter, token))
            .collect::<anyhow::Result<Vec<_>>>()?;

        PatchSet::aggregate(per_filter)
    }

    pub fn diff_filter(&self, filter: &PathFilter, token: &str) -> anyhow::Result<PatchSet> {
        log::info!("Creating patches for {token}");
        log::info!(
            "Comparing {} & {}",
            self.old_tree().path().display(),
            self.new_tree().path().display()
        );

        let old = self.old_tree().snapshots(filter, token)?;
        let new = self.new_tree().snapshots(filter, token)?;

        Ok(PatchSet::from_snapshots(&old, &new))
    }

    /// Diffs and persists the result. Nothing is written unless every file
    /// was diffed.
    pub fn run(&self, filter: &PathFilter) -> anyhow::Result<PatchSet> {
        let patch_set = self.diff(filter)?;

        log::info!("Writing patches to {}", self.store().path().display());
        self.store().write(&patch_set)?;

        Ok(patch_set)
    }
}
