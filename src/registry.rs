//! Root lookup: which registered module root owns a file
//!
//! Ownership is decided by normalized path prefixes, not by walking parent
//! directories: the innermost registered root whose path is a prefix of the
//! file wins. Built per query from a borrowed [`Project`] so results always
//! reflect current root configuration.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::paths::canonicalize_path;
use crate::project::{ModuleRoot, Project};

/// Per-query view over a project's roots answering enclosing-root questions.
///
/// Absence is a normal result: most files on a machine fall outside any
/// recognized root.
pub struct RootRegistry<'p> {
    project: &'p Project,
}

impl<'p> RootRegistry<'p> {
    pub fn new(project: &'p Project) -> Self {
        Self { project }
    }

    /// Innermost registered root (application or in-repo addon) containing
    /// `file`, or `None` when the file is outside every root.
    pub fn find_enclosing_root(&self, file: &Path) -> Option<&'p ModuleRoot> {
        self.innermost(file, |_| true)
    }

    /// Innermost *application* root containing `file`, skipping in-repo
    /// addon roots. Asset URLs are always namespaced by the owning app, even
    /// for files that live inside a nested addon.
    pub fn find_enclosing_app(&self, file: &Path) -> Option<&'p ModuleRoot> {
        self.innermost(file, |root| !root.in_repo_addon)
    }

    /// Registered in-repo addon roots physically nested inside `app`'s tree,
    /// in project declaration order. Callers rely on the order only for
    /// first-match short-circuiting, not for correctness.
    pub fn in_repo_addons(&self, app: &ModuleRoot) -> Vec<&'p ModuleRoot> {
        self.project
            .roots
            .iter()
            .filter(|root| {
                root.in_repo_addon && root.path != app.path && root.path.starts_with(&app.path)
            })
            .collect()
    }

    fn innermost(
        &self,
        file: &Path,
        keep: impl Fn(&ModuleRoot) -> bool,
    ) -> Option<&'p ModuleRoot> {
        let file = self.normalize(file);
        let found = self
            .project
            .roots
            .iter()
            .filter(|root| keep(root) && file.starts_with(&root.path) && file != root.path)
            .max_by_key(|root| root.path.components().count());
        if let Some(root) = found {
            debug!(file = %file.display(), root = %root.name, "resolved enclosing root");
        }
        found
    }

    fn normalize(&self, file: &Path) -> PathBuf {
        canonicalize_path(file)
    }
}
