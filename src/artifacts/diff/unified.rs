use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::diff::diff_target::FileSnapshot;

/// Unchanged lines shown around every change.
pub const CONTEXT_LINES: usize = 5;

/// Renders the unified diff between two versions of a file.
///
/// `None` stands for a side on which the file does not exist; it diffs as an
/// empty file. Both header lines carry the same filter-relative name. The
/// result is empty when there is nothing to record.
pub fn render(old: Option<&FileSnapshot>, new: Option<&FileSnapshot>) -> Vec<String> {
    let Some(name) = old.or(new).map(FileSnapshot::name) else {
        return Vec::new();
    };

    let a = old.map(FileSnapshot::lines).unwrap_or_default();
    let b = new.map(FileSnapshot::lines).unwrap_or_default();

    let hunks = MyersDiff::new(a, b).hunks(CONTEXT_LINES);
    if hunks.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("--- {name}"), format!("+++ {name}")];
    for hunk in &hunks {
        lines.push(hunk.header());
        lines.extend(hunk.edits().iter().map(Edit::as_string));
    }

    lines
}
