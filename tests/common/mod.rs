//! Shared test fixture: build real Ember-shaped directory trees in a temp dir
//!
//! URL resolution probes the filesystem, so these tests need actual files.
//! The fixture creates them on demand and hands back canonicalized paths so
//! prefix matching is immune to symlinked temp directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use embernav::{ModuleRoot, Project};
use tempfile::TempDir;

pub struct EmberFixture {
    dir: TempDir,
    root: PathBuf,
}

impl EmberFixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a fixture-relative path, without creating anything.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Create an empty file (and its parent directories) at a
    /// fixture-relative path; returns the absolute path.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "").expect("Failed to write fixture file");
        path
    }

    /// Create a directory at a fixture-relative path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Project with one app root at `app_rel` plus in-repo addon roots.
    pub fn project(&self, app: (&str, &str), addons: &[(&str, &str)]) -> Project {
        let (app_rel, app_name) = app;
        let mut roots = vec![ModuleRoot::app(self.dir(app_rel), app_name)];
        for (rel, name) in addons {
            roots.push(ModuleRoot::in_repo_addon(self.dir(rel), *name));
        }
        Project::from_roots(roots)
    }
}
