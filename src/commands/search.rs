//! `search` and `names` commands over a symbol index fixture

use crate::cli::{NamesArgs, OutputFormat, SearchArgs};
use crate::index::{InMemoryNameIndex, SearchScope};
use crate::project::Project;
use crate::search::{all_display_names, find_by_name};
use crate::Result;

pub fn run_search(args: &SearchArgs, project: &Project, format: OutputFormat) -> Result<String> {
    let index = InMemoryNameIndex::load(&args.index)?;
    let scope = if args.include_non_project {
        SearchScope::everything()
    } else {
        SearchScope::project(project)
    };

    let records = find_by_name(&args.name, project, &index, &scope);
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&records).unwrap_or_default(),
        OutputFormat::Text => {
            if records.is_empty() {
                format!("no matches for '{}'", args.name)
            } else {
                records
                    .iter()
                    .map(|r| match &r.label {
                        Some(label) => {
                            format!("{} {} {}", r.display_name, label, r.file.display())
                        }
                        None => format!("{} {}", r.display_name, r.file.display()),
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    };
    Ok(format!("{}\n", output))
}

pub fn run_names(args: &NamesArgs, format: OutputFormat) -> Result<String> {
    let index = InMemoryNameIndex::load(&args.index)?;
    let names = all_display_names(&index);

    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&names.iter().collect::<Vec<_>>()).unwrap_or_default()
        }
        OutputFormat::Text => names.into_iter().collect::<Vec<_>>().join("\n"),
    };
    Ok(format!("{}\n", output))
}
