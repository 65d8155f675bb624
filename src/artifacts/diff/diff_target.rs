use derive_new::new;
use std::collections::BTreeMap;

pub type LineSet = Vec<String>;

/// One source file as read at diff time, keyed by its filter-relative name.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSnapshot {
    name: String,
    lines: LineSet,
}

impl FileSnapshot {
    /// Splits on `\n`, dropping a trailing `\r` from each line. A final
    /// newline does not produce an extra empty line.
    pub fn from_content(name: String, content: &str) -> Self {
        Self {
            name,
            lines: content.lines().map(|line| line.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// All snapshots of one tree under one filter. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSet {
    files: BTreeMap<String, FileSnapshot>,
}

impl SnapshotSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snapshot: FileSnapshot) -> anyhow::Result<()> {
        if self.files.contains_key(snapshot.name()) {
            anyhow::bail!(
                "Two files resolve to the same name {}; filter tokens must not overlap",
                snapshot.name()
            );
        }

        self.files.insert(snapshot.name.clone(), snapshot);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FileSnapshot> {
        self.files.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl TryFrom<Vec<FileSnapshot>> for SnapshotSet {
    type Error = anyhow::Error;

    fn try_from(snapshots: Vec<FileSnapshot>) -> Result<Self, Self::Error> {
        let mut set = SnapshotSet::empty();
        for snapshot in snapshots {
            set.insert(snapshot)?;
        }
        Ok(set)
    }
}
