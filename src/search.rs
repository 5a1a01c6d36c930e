//! Jump-to-symbol adapter: name index entries to navigation records
//!
//! Thin glue between the host's name index and its goto-symbol UI. The only
//! logic of note is label derivation: each (entry, containing file) pair is
//! resolved to its owning module root and classified, so that same-named
//! hits across roles and roots come back visually distinguishable.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::classify::classify;
use crate::index::{NameIndex, SearchScope};
use crate::paths::canonicalize_path;
use crate::project::Project;
use crate::registry::RootRegistry;

/// Icon hint used when the module key carries no recognizable kind.
pub const DEFAULT_ICON: &str = "ember";

/// One presentable search hit. Icon selection itself is the host's concern;
/// `icon` is a hint derived from the module key's kind segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRecord {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub icon: String,
    pub file: PathBuf,
}

/// All display names known to the index, deduplicated.
pub fn all_display_names(index: &dyn NameIndex) -> BTreeSet<String> {
    index
        .all_keys()
        .into_iter()
        .map(|key| key.display_name)
        .collect()
}

/// Resolve every index entry named `name` to its containing files and emit
/// one record per (entry, file) pair.
///
/// Files whose owning root cannot be resolved are still emitted, without a
/// label; a missing label is not an error.
pub fn find_by_name(
    name: &str,
    project: &Project,
    index: &dyn NameIndex,
    scope: &SearchScope,
) -> Vec<NavigationRecord> {
    let registry = RootRegistry::new(project);
    let mut records = Vec::new();

    for key in index.filtered_keys(scope, &|key| key.display_name == name) {
        let icon = icon_hint(&key.module_key);
        for file in index.containing_files(&key, scope) {
            let file = canonicalize_path(&file);
            let label = registry
                .find_enclosing_root(&file)
                .and_then(|root| classify(&file, root));
            records.push(NavigationRecord {
                display_name: key.display_name.clone(),
                label,
                icon: icon.clone(),
                file,
            });
        }
    }
    records
}

fn icon_hint(module_key: &str) -> String {
    match module_key.split_once(':') {
        Some((kind, _)) if !kind.is_empty() => kind.to_string(),
        _ => DEFAULT_ICON.to_string(),
    }
}
