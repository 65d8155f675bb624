use crate::areas::comparison::Comparison;
use crate::areas::workbench::Workbench;
use crate::artifacts::filter::path_filter::PathFilter;
use crate::artifacts::patch::patch_set::PatchSet;
use crate::artifacts::side::Side;

impl Workbench {
    /// Diffs two releases, one independent run per side.
    ///
    /// With `parallel` the sides run on their own threads; the summaries are
    /// still printed client first.
    pub fn diff_release(
        &self,
        from: &str,
        to: &str,
        filter: &PathFilter,
        parallel: bool,
    ) -> anyhow::Result<()> {
        let runs = Side::ALL
            .into_iter()
            .map(|side| {
                let comparison = Comparison::new(
                    &self.existing_source_dir(from, side)?,
                    &self.existing_source_dir(to, side)?,
                    &self.release_dir(from, to, side),
                );
                Ok((side, comparison))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let results = if parallel {
            run_in_parallel(&runs, filter)?
        } else {
            runs.iter()
                .map(|(side, comparison)| {
                    log::info!("Creating {side} patches");
                    comparison.run(filter)
                })
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        for ((side, comparison), patch_set) in runs.iter().zip(&results) {
            self.print_summary(
                &format!("{side}: {from} -> {to}"),
                comparison.store().path(),
                patch_set,
            )?;
        }

        Ok(())
    }
}

fn run_in_parallel(
    runs: &[(Side, Comparison)],
    filter: &PathFilter,
) -> anyhow::Result<Vec<PatchSet>> {
    std::thread::scope(|scope| {
        let handles = runs
            .iter()
            .map(|(side, comparison)| {
                log::info!("Creating {side} patches");
                (*side, scope.spawn(move || comparison.run(filter)))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|(side, handle)| {
                handle
                    .join()
                    .map_err(|_| anyhow::anyhow!("The {side} diff run panicked"))?
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })
}
