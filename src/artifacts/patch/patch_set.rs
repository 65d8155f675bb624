use crate::artifacts::diff::diff_target::{FileSnapshot, SnapshotSet};
use crate::artifacts::diff::unified;
use colored::{ColoredString, Colorize};
use derive_new::new;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeMarker {
    Added,
    Removed,
    Modified,
}

impl ChangeMarker {
    pub fn from_snapshots(old: Option<&FileSnapshot>, new: Option<&FileSnapshot>) -> Option<Self> {
        match (old, new) {
            (None, Some(_)) => Some(ChangeMarker::Added),
            (Some(_), None) => Some(ChangeMarker::Removed),
            (Some(old), Some(new)) if old.lines() != new.lines() => Some(ChangeMarker::Modified),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            ChangeMarker::Added => '+',
            ChangeMarker::Removed => '-',
            ChangeMarker::Modified => '*',
        }
    }

    pub fn paint(&self) -> ColoredString {
        match self {
            ChangeMarker::Added => "+".green(),
            ChangeMarker::Removed => "-".red(),
            ChangeMarker::Modified => "*".yellow(),
        }
    }
}

impl From<&ChangeMarker> for &str {
    fn from(marker: &ChangeMarker) -> Self {
        match marker {
            ChangeMarker::Added => "added",
            ChangeMarker::Removed => "removed",
            ChangeMarker::Modified => "modified",
        }
    }
}

impl std::fmt::Display for ChangeMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One summary record: `<marker> <name>` once rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct ReportLine {
    marker: ChangeMarker,
    name: String,
}

impl ReportLine {
    pub fn marker(&self) -> ChangeMarker {
        self.marker
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Same order as the rendered text lines.
impl Ord for ReportLine {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.marker.symbol(), &self.name).cmp(&(other.marker.symbol(), &other.name))
    }
}

impl PartialOrd for ReportLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.marker, self.name)
    }
}

/// Rendered unified diff of one changed file.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffBlock {
    name: String,
    lines: Vec<String>,
}

impl DiffBlock {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

/// Diff result for one comparison scope: a sorted summary plus the per-file
/// diffs. The empty set is the neutral element of [`PatchSet::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    report: Vec<ReportLine>,
    files: Vec<DiffBlock>,
}

impl PatchSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &[ReportLine] {
        &self.report
    }

    pub fn files(&self) -> &[DiffBlock] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }

    pub fn count(&self, marker: ChangeMarker) -> usize {
        self.report
            .iter()
            .filter(|line| line.marker == marker)
            .count()
    }

    /// Diffs every name present in either snapshot set. Unchanged files are
    /// left out.
    pub fn from_snapshots(old: &SnapshotSet, new: &SnapshotSet) -> Self {
        let names = old.names().chain(new.names()).collect::<BTreeSet<_>>();

        let mut report = Vec::new();
        let mut files = Vec::new();
        for name in names {
            let (old_file, new_file) = (old.get(name), new.get(name));

            let lines = unified::render(old_file, new_file);
            if lines.is_empty() {
                continue;
            }

            let Some(marker) = ChangeMarker::from_snapshots(old_file, new_file) else {
                continue;
            };

            report.push(ReportLine::new(marker, name.to_string()));
            files.push(DiffBlock::new(name.to_string(), lines));
        }

        report.sort();
        Self { report, files }
    }

    /// Combines two patch sets into a new one. Files keep their relative
    /// order, `self`'s first; the summary is re-sorted as a whole.
    pub fn merge(mut self, other: PatchSet) -> anyhow::Result<Self> {
        let names = self
            .files
            .iter()
            .map(DiffBlock::name)
            .collect::<HashSet<_>>();

        if let Some(block) = other.files.iter().find(|block| names.contains(block.name())) {
            anyhow::bail!(
                "File {} was matched by more than one filter; filter tokens must not overlap",
                block.name()
            );
        }

        self.files.extend(other.files);
        self.report.extend(other.report);
        self.report.sort();

        Ok(self)
    }

    pub fn aggregate(patch_sets: impl IntoIterator<Item = PatchSet>) -> anyhow::Result<Self> {
        patch_sets
            .into_iter()
            .try_fold(PatchSet::empty(), PatchSet::merge)
    }

    /// The summary as persisted: one line per change, newline terminated.
    pub fn render_report(&self) -> String {
        self.report
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}
