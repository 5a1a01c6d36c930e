//! Project data model: module roots and the manifest that declares them
//!
//! Root discovery belongs to the host (ember-cli config, IDE project model).
//! This module only represents an already-discovered root list and, for the
//! CLI, loads one from an `embernav.toml` manifest. The core never creates,
//! caches, or destroys roots; a [`Project`] is handed in per query and read
//! against current filesystem state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmberNavError, Result};
use crate::paths::canonicalize_path;

/// A directory recognized as the top of an application or library source tree.
///
/// `parent` is an index into the owning [`Project`]'s root list — a back
/// reference, not ownership. It is `None` iff this is a top-level application
/// root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRoot {
    /// Filesystem path of the root directory
    pub path: PathBuf,
    /// Name from project metadata (the app name URLs are namespaced by)
    pub name: String,
    /// True for a library nested inside a hosting application's tree
    #[serde(default)]
    pub in_repo_addon: bool,
    /// Index of the enclosing root in the project's root list
    #[serde(skip)]
    pub parent: Option<usize>,
}

impl ModuleRoot {
    /// Create an application root
    pub fn app(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            in_repo_addon: false,
            parent: None,
        }
    }

    /// Create an in-repo addon root
    pub fn in_repo_addon(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            in_repo_addon: true,
            parent: None,
        }
    }
}

/// The set of module roots the host recognizes for one project.
///
/// Read-only for the resolver core. Ownership of the root tree lives in
/// `roots`; parent links are indices into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub roots: Vec<ModuleRoot>,
}

impl Project {
    /// Build a project from a root list, linking each root to its innermost
    /// enclosing root.
    pub fn from_roots(roots: Vec<ModuleRoot>) -> Self {
        let mut project = Self { roots };
        project.link_parents();
        project
    }

    /// Load a project from an `embernav.toml` manifest.
    ///
    /// Relative root paths are resolved against the manifest's directory and
    /// canonicalized, so prefix matching works regardless of how the
    /// manifest spells them.
    pub fn load(manifest: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(manifest).map_err(|e| EmberNavError::ManifestError {
                path: manifest.display().to_string(),
                message: e.to_string(),
            })?;
        let mut project: Project =
            toml::from_str(&text).map_err(|e| EmberNavError::ManifestError {
                path: manifest.display().to_string(),
                message: e.to_string(),
            })?;

        let base = manifest.parent().unwrap_or_else(|| Path::new("."));
        for root in &mut project.roots {
            let absolute = if root.path.is_absolute() {
                root.path.clone()
            } else {
                base.join(&root.path)
            };
            root.path = canonicalize_path(&absolute);
        }
        project.link_parents();
        Ok(project)
    }

    /// Application roots (top-level and nested apps; everything that is not
    /// an in-repo addon), in declaration order.
    pub fn app_roots(&self) -> impl Iterator<Item = &ModuleRoot> {
        self.roots.iter().filter(|r| !r.in_repo_addon)
    }

    /// Link every root to the innermost other root whose path encloses it.
    fn link_parents(&mut self) {
        let parents: Vec<Option<usize>> = self
            .roots
            .iter()
            .map(|root| {
                self.roots
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| {
                        other.path != root.path && root.path.starts_with(&other.path)
                    })
                    .max_by_key(|(_, other)| other.path.components().count())
                    .map(|(i, _)| i)
            })
            .collect();
        for (root, parent) in self.roots.iter_mut().zip(parents) {
            root.parent = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project::from_roots(vec![
            ModuleRoot::app("/work/my-app", "my-app"),
            ModuleRoot::in_repo_addon("/work/my-app/lib/my-addon", "my-addon"),
            ModuleRoot::app("/work/other-app", "other-app"),
        ])
    }

    #[test]
    fn test_link_parents_nested_addon() {
        let project = sample_project();
        assert_eq!(project.roots[1].parent, Some(0));
    }

    #[test]
    fn test_link_parents_top_level_apps_have_none() {
        let project = sample_project();
        assert_eq!(project.roots[0].parent, None);
        assert_eq!(project.roots[2].parent, None);
    }

    #[test]
    fn test_app_roots_skips_addons() {
        let project = sample_project();
        let names: Vec<&str> = project.app_roots().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["my-app", "other-app"]);
    }

    #[test]
    fn test_load_manifest_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lib/ui-kit")).unwrap();
        let manifest = dir.path().join("embernav.toml");
        std::fs::write(
            &manifest,
            r#"
            [[roots]]
            path = "."
            name = "my-app"

            [[roots]]
            path = "lib/ui-kit"
            name = "ui-kit"
            in_repo_addon = true
            "#,
        )
        .unwrap();

        let project = Project::load(&manifest).unwrap();
        assert_eq!(project.roots.len(), 2);
        assert!(project.roots[1].in_repo_addon);
        assert_eq!(project.roots[1].parent, Some(0));
        assert!(project.roots[1].path.is_absolute());
    }

    #[test]
    fn test_load_missing_manifest_is_error() {
        let err = Project::load(Path::new("/nonexistent/embernav.toml")).unwrap_err();
        assert!(matches!(err, EmberNavError::ManifestError { .. }));
    }
}
