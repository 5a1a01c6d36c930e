//! Name-index collaborator boundary
//!
//! The symbol-name index is owned by the host: a precomputed mapping from
//! display name to module key plus containing-file lookup. This module
//! defines the contract the resolver consumes ([`NameIndex`]) and a plain
//! in-memory implementation loaded from a TOML fixture, used by the CLI and
//! the tests. The host runtime supplies its own implementation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmberNavError, Result};
use crate::project::Project;

/// Key of one index entry: a user-facing display name plus the host's
/// opaque module key (e.g. `component:foo-bar`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolKey {
    pub display_name: String,
    pub module_key: String,
}

/// Limits containing-file enumeration to the project's roots, unless
/// non-project items were requested.
#[derive(Debug, Clone)]
pub struct SearchScope {
    roots: Vec<PathBuf>,
    include_non_project: bool,
}

impl SearchScope {
    /// Scope restricted to files under the project's registered roots.
    pub fn project(project: &Project) -> Self {
        Self {
            roots: project.roots.iter().map(|r| r.path.clone()).collect(),
            include_non_project: false,
        }
    }

    /// Unrestricted scope.
    pub fn everything() -> Self {
        Self {
            roots: Vec::new(),
            include_non_project: true,
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.include_non_project || self.roots.iter().any(|root| path.starts_with(root))
    }
}

/// Read-only view of the host's symbol-name index.
pub trait NameIndex {
    /// Every key in the index, duplicates included.
    fn all_keys(&self) -> Vec<SymbolKey>;

    /// Keys matching `pred` that have at least one containing file in scope.
    fn filtered_keys(
        &self,
        scope: &SearchScope,
        pred: &dyn Fn(&SymbolKey) -> bool,
    ) -> Vec<SymbolKey>;

    /// Files containing the symbol behind `key`, restricted to `scope`.
    fn containing_files(&self, key: &SymbolKey, scope: &SearchScope) -> Vec<PathBuf>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    #[serde(flatten)]
    key: SymbolKey,
    files: Vec<PathBuf>,
}

/// TOML-backed [`NameIndex`] for the CLI and tests.
///
/// Fixture format:
///
/// ```toml
/// [[entries]]
/// display_name = "foo-bar"
/// module_key = "component:foo-bar"
/// files = ["/work/my-app/app/components/foo-bar.js"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryNameIndex {
    entries: Vec<IndexEntry>,
}

impl InMemoryNameIndex {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EmberNavError::IndexError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| EmberNavError::IndexError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn insert(&mut self, display_name: &str, module_key: &str, files: Vec<PathBuf>) {
        self.entries.push(IndexEntry {
            key: SymbolKey {
                display_name: display_name.to_string(),
                module_key: module_key.to_string(),
            },
            files,
        });
    }
}

impl NameIndex for InMemoryNameIndex {
    fn all_keys(&self) -> Vec<SymbolKey> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    fn filtered_keys(
        &self,
        scope: &SearchScope,
        pred: &dyn Fn(&SymbolKey) -> bool,
    ) -> Vec<SymbolKey> {
        self.entries
            .iter()
            .filter(|e| pred(&e.key) && e.files.iter().any(|f| scope.contains(f)))
            .map(|e| e.key.clone())
            .collect()
    }

    fn containing_files(&self, key: &SymbolKey, scope: &SearchScope) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| &e.key == key)
            .flat_map(|e| e.files.iter())
            .filter(|f| scope.contains(f))
            .cloned()
            .collect()
    }
}
