//! Location labels for search-result disambiguation
//!
//! A label is a short suffix like `(addon)` or `(ui-kit app)` shown next to
//! a search hit so that same-named files in different roles can be told
//! apart. `None` means the location is the unambiguous default (plain
//! application code) and needs no suffix.
//!
//! Precedence is load-bearing: a file can textually match several prefixes
//! (an in-repo addon has its own `tests/` tree), and membership in an
//! in-repo addon must win over path-shape rules. The rules below are
//! ordered, first match wins.

use std::path::Path;

use crate::paths::slash_prefix;
use crate::project::ModuleRoot;

/// Derive the location label for `file` given its owning module root.
///
/// Returns `None` when `file` is not under `root` or when its location is
/// the default (application code directly under `app/`, or an unrecognized
/// layout).
pub fn classify(file: &Path, root: &ModuleRoot) -> Option<String> {
    let prefix = slash_prefix(file, &root.path)?;

    if root.in_repo_addon && prefix.starts_with("/app/") {
        Some(format!("({} app)", root.name))
    } else if root.in_repo_addon {
        Some(format!("({} addon)", root.name))
    } else if prefix.starts_with("/app/") {
        None
    } else if prefix.starts_with("/addon/") {
        Some("(addon)".to_string())
    } else if prefix.starts_with("/tests/dummy/app/") {
        Some("(dummy app)".to_string())
    } else if prefix.starts_with("/tests/") {
        Some("(test)".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ModuleRoot;

    fn app_root() -> ModuleRoot {
        ModuleRoot::app("/work/my-app", "my-app")
    }

    fn addon_root() -> ModuleRoot {
        ModuleRoot::in_repo_addon("/work/my-app/lib/ui-kit", "ui-kit")
    }

    #[test]
    fn test_app_code_has_no_label() {
        let root = app_root();
        let file = Path::new("/work/my-app/app/components/foo.js");
        assert_eq!(classify(file, &root), None);
    }

    #[test]
    fn test_addon_dir_in_app_root() {
        let root = app_root();
        let file = Path::new("/work/my-app/addon/components/foo.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(addon)"));
    }

    #[test]
    fn test_dummy_app_beats_plain_test() {
        let root = app_root();
        let file = Path::new("/work/my-app/tests/dummy/app/routes/index.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(dummy app)"));
    }

    #[test]
    fn test_test_code() {
        let root = app_root();
        let file = Path::new("/work/my-app/tests/integration/components/foo-test.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(test)"));
    }

    #[test]
    fn test_in_repo_addon_app_tree() {
        let root = addon_root();
        let file = Path::new("/work/my-app/lib/ui-kit/app/components/button.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(ui-kit app)"));
    }

    #[test]
    fn test_in_repo_addon_everything_else() {
        let root = addon_root();
        let file = Path::new("/work/my-app/lib/ui-kit/addon/components/button.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(ui-kit addon)"));
    }

    #[test]
    fn test_in_repo_addon_membership_beats_tests_prefix() {
        // An addon's own tests/ tree still reads as addon membership
        let root = addon_root();
        let file = Path::new("/work/my-app/lib/ui-kit/tests/unit/button-test.js");
        assert_eq!(classify(file, &root).as_deref(), Some("(ui-kit addon)"));
    }

    #[test]
    fn test_unrecognized_layout_has_no_label() {
        let root = app_root();
        let file = Path::new("/work/my-app/config/environment.js");
        assert_eq!(classify(file, &root), None);
    }

    #[test]
    fn test_file_outside_root_has_no_label() {
        let root = app_root();
        let file = Path::new("/work/elsewhere/app/foo.js");
        assert_eq!(classify(file, &root), None);
    }
}
