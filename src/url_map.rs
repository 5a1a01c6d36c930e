//! Bidirectional mapping between dev-server asset URLs and source files
//!
//! A running dev server exposes application code under
//! `http://<authority>/assets/<app-name>/<path>`; the authoring-time file
//! lives at `<module-root>/app/<path>`, where the module root is either the
//! application itself or one of its in-repo addons.
//!
//! The two directions are deliberately not strict inverses: `url_to_file`
//! always inserts `app/` into the candidate path (asset URLs only ever serve
//! `app/` trees), while `file_to_urls` strips a leading `app` segment only
//! when the file actually has one, so test files and other root-level files
//! still map to a URL.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::paths::{canonicalize_path, slash_prefix};
use crate::project::Project;
use crate::registry::RootRegistry;

/// A dev-server asset URL, decomposed. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServedUrl {
    pub authority: String,
    pub app_name: String,
    pub relative_path: String,
}

impl ServedUrl {
    /// Decompose `url` against a known application name. Returns `None`
    /// unless the URL path starts with `/assets/<app_name>/`.
    pub fn from_url(url: &Url, app_name: &str) -> Option<Self> {
        let prefix = format!("/assets/{}/", app_name);
        let relative = url.path().strip_prefix(&prefix)?;
        Some(Self {
            authority: url.authority().to_string(),
            app_name: app_name.to_string(),
            relative_path: relative.to_string(),
        })
    }

    /// Render back to a full http URL.
    pub fn to_url(&self) -> Option<Url> {
        Url::parse(&format!(
            "http://{}/assets/{}/{}",
            self.authority, self.app_name, self.relative_path
        ))
        .ok()
    }
}

/// Find the source file a dev-server URL is served from.
///
/// For every application root whose name matches the URL's
/// `/assets/<app-name>/` prefix, the application root itself is probed
/// first, then each of its in-repo addons, for an existing file at
/// `<root>/app/<relative-path>`. First existing file wins; a well-formed
/// project has at most one.
pub fn url_to_file(url: &Url, project: &Project) -> Option<PathBuf> {
    let registry = RootRegistry::new(project);

    for app in project.app_roots() {
        let Some(served) = ServedUrl::from_url(url, &app.name) else {
            continue;
        };

        let mut roots = vec![app];
        roots.extend(registry.in_repo_addons(app));

        let candidates: Vec<PathBuf> = roots
            .iter()
            .map(|root| root.path.join("app").join(&served.relative_path))
            .filter(|candidate| candidate.is_file())
            .collect();

        if candidates.len() > 1 {
            // Two roots serving the same relative path is a project
            // misconfiguration; resolve to the first like the dev server does.
            debug!(url = %url, count = candidates.len(), "ambiguous asset URL");
        }
        if let Some(found) = candidates.into_iter().next() {
            return Some(found);
        }
    }
    None
}

/// Compute the URLs a dev server would serve `file` under.
///
/// Empty when the authority is unknown, or when the file has no resolvable
/// owning application or module root. Otherwise exactly one URL, namespaced
/// by the owning application's name even when the file lives in a nested
/// addon.
pub fn file_to_urls(file: &Path, project: &Project, authority: Option<&str>) -> Vec<Url> {
    let Some(authority) = authority else {
        return Vec::new();
    };
    let file = canonicalize_path(file);
    let registry = RootRegistry::new(project);

    let Some(app) = registry.find_enclosing_app(&file) else {
        return Vec::new();
    };
    let Some(module) = registry.find_enclosing_root(&file) else {
        return Vec::new();
    };
    let Some(prefix) = slash_prefix(&file, &module.path) else {
        return Vec::new();
    };

    // "/app/components/foo.js" -> "components/foo.js";
    // "/tests/unit/foo-test.js" -> "tests/unit/foo-test.js"
    let relative = prefix.trim_start_matches('/');
    let relative = if relative == "app" {
        ""
    } else {
        relative.strip_prefix("app/").unwrap_or(relative)
    };

    let served = ServedUrl {
        authority: authority.to_string(),
        app_name: app.name.clone(),
        relative_path: relative.to_string(),
    };
    served.to_url().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ModuleRoot, Project};

    fn project() -> Project {
        Project::from_roots(vec![
            ModuleRoot::app("/work/my-app", "my-app"),
            ModuleRoot::in_repo_addon("/work/my-app/lib/ui-kit", "ui-kit"),
        ])
    }

    #[test]
    fn test_served_url_from_url() {
        let url = Url::parse("http://localhost:4200/assets/my-app/components/foo.js").unwrap();
        let served = ServedUrl::from_url(&url, "my-app").unwrap();
        assert_eq!(served.authority, "localhost:4200");
        assert_eq!(served.relative_path, "components/foo.js");
    }

    #[test]
    fn test_served_url_wrong_app_name() {
        let url = Url::parse("http://localhost:4200/assets/my-app/components/foo.js").unwrap();
        assert_eq!(ServedUrl::from_url(&url, "other-app"), None);
    }

    #[test]
    fn test_served_url_round_trip() {
        let served = ServedUrl {
            authority: "localhost:4200".to_string(),
            app_name: "my-app".to_string(),
            relative_path: "components/foo.js".to_string(),
        };
        assert_eq!(
            served.to_url().unwrap().as_str(),
            "http://localhost:4200/assets/my-app/components/foo.js"
        );
    }

    #[test]
    fn test_file_to_urls_requires_authority() {
        let project = project();
        let file = Path::new("/work/my-app/app/components/foo.js");
        assert!(file_to_urls(file, &project, None).is_empty());
    }

    #[test]
    fn test_file_to_urls_app_file() {
        let project = project();
        let file = Path::new("/work/my-app/app/components/foo.js");
        let urls = file_to_urls(file, &project, Some("localhost:4200"));
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0].as_str(),
            "http://localhost:4200/assets/my-app/components/foo.js"
        );
    }

    #[test]
    fn test_file_to_urls_addon_file_uses_app_namespace() {
        let project = project();
        let file = Path::new("/work/my-app/lib/ui-kit/app/components/button.js");
        let urls = file_to_urls(file, &project, Some("localhost:4200"));
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0].as_str(),
            "http://localhost:4200/assets/my-app/components/button.js"
        );
    }

    #[test]
    fn test_file_to_urls_test_file_keeps_tests_segment() {
        let project = project();
        let file = Path::new("/work/my-app/tests/integration/components/foo-test.js");
        let urls = file_to_urls(file, &project, Some("localhost:4200"));
        assert_eq!(
            urls[0].as_str(),
            "http://localhost:4200/assets/my-app/tests/integration/components/foo-test.js"
        );
    }

    #[test]
    fn test_file_to_urls_outside_any_root() {
        let project = project();
        let file = Path::new("/work/dist/bundle.js");
        assert!(file_to_urls(file, &project, Some("localhost:4200")).is_empty());
    }

    #[test]
    fn test_url_to_file_unknown_app_name() {
        let project = project();
        let url = Url::parse("http://localhost:4200/assets/unknown/components/foo.js").unwrap();
        assert_eq!(url_to_file(&url, &project), None);
    }
}
