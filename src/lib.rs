//! embernav: Ember project layout resolver
//!
//! Locates and labels source files in Ember-style project layouts and maps
//! between on-disk paths and the URLs a dev server serves them under. Two
//! consumers: a jump-to-symbol search facility (resolve a typed name to
//! labeled source files) and a live-debugging URL resolver (served URL to
//! authoring-time file and back).
//!
//! The host's name index, fuzzy-search UI, and root discovery stay external;
//! this crate takes an already-discovered [`Project`] root list per query
//! and re-derives everything from current filesystem state. All operations
//! are synchronous, re-entrant, and unmemoized.
//!
//! # Example
//!
//! ```
//! use embernav::{classify, ModuleRoot, Project, RootRegistry};
//! use std::path::Path;
//!
//! let project = Project::from_roots(vec![
//!     ModuleRoot::app("/work/my-app", "my-app"),
//!     ModuleRoot::in_repo_addon("/work/my-app/lib/ui-kit", "ui-kit"),
//! ]);
//!
//! let registry = RootRegistry::new(&project);
//! let file = Path::new("/work/my-app/lib/ui-kit/addon/components/button.js");
//! let root = registry.find_enclosing_root(file).unwrap();
//! assert_eq!(classify(file, root).as_deref(), Some("(ui-kit addon)"));
//! ```

pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod index;
pub mod paths;
pub mod project;
pub mod registry;
pub mod search;
pub mod url_map;

// Re-export commonly used types
pub use classify::classify;
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{EmberNavError, Result};
pub use index::{InMemoryNameIndex, NameIndex, SearchScope, SymbolKey};
pub use project::{ModuleRoot, Project};
pub use registry::RootRegistry;
pub use search::{all_display_names, find_by_name, NavigationRecord, DEFAULT_ICON};
pub use url_map::{file_to_urls, url_to_file, ServedUrl};
