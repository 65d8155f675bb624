use crate::areas::patch_store::PatchStore;
use crate::areas::workspace::Workspace;
use std::path::Path;

/// One diff run: an old and a new source tree, and where the result goes.
///
/// Runs share no state, so the runs of different sides can execute on
/// separate threads.
#[derive(Debug, Clone)]
pub struct Comparison {
    old: Workspace,
    new: Workspace,
    store: PatchStore,
}

impl Comparison {
    pub fn new(old: &Path, new: &Path, destination: &Path) -> Self {
        Comparison {
            old: Workspace::new(old.into()),
            new: Workspace::new(new.into()),
            store: PatchStore::new(destination.into()),
        }
    }

    pub fn old_tree(&self) -> &Workspace {
        &self.old
    }

    pub fn new_tree(&self) -> &Workspace {
        &self.new
    }

    pub fn store(&self) -> &PatchStore {
        &self.store
    }
}
