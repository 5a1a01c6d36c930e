//! `classify` command: owning root and location label for a file

use serde_json::json;

use crate::classify::classify;
use crate::cli::{ClassifyArgs, OutputFormat};
use crate::paths::resolve_path_or_cwd;
use crate::project::Project;
use crate::registry::RootRegistry;
use crate::Result;

pub fn run(args: &ClassifyArgs, project: &Project, format: OutputFormat) -> Result<String> {
    let file = resolve_path_or_cwd(&args.file)?;
    let registry = RootRegistry::new(project);

    let root = registry.find_enclosing_root(&file);
    let label = root.and_then(|root| classify(&file, root));

    let output = match format {
        OutputFormat::Json => {
            let value = json!({
                "file": file,
                "root": root.map(|r| &r.name),
                "in_repo_addon": root.map(|r| r.in_repo_addon),
                "label": label,
            });
            serde_json::to_string_pretty(&value).unwrap_or_default()
        }
        OutputFormat::Text => match (root, &label) {
            (Some(root), Some(label)) => {
                format!("{} {} [root: {}]", file.display(), label, root.name)
            }
            (Some(root), None) => format!("{} [root: {}]", file.display(), root.name),
            (None, _) => format!("{} is outside any recognized root", file.display()),
        },
    };
    Ok(format!("{}\n", output))
}
