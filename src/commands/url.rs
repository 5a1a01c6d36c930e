//! `url-to-file` and `file-to-urls` commands

use serde_json::json;
use url::Url;

use crate::cli::{FileToUrlsArgs, OutputFormat, UrlToFileArgs};
use crate::paths::resolve_path_or_cwd;
use crate::project::Project;
use crate::url_map::{file_to_urls, url_to_file};
use crate::{EmberNavError, Result};

pub fn run_url_to_file(
    args: &UrlToFileArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<String> {
    let url = Url::parse(&args.url).map_err(|_| EmberNavError::InvalidUrl {
        url: args.url.clone(),
    })?;

    let file = url_to_file(&url, project);
    let output = match format {
        OutputFormat::Json => {
            let value = json!({ "url": url.as_str(), "file": file });
            serde_json::to_string_pretty(&value).unwrap_or_default()
        }
        OutputFormat::Text => match file {
            Some(file) => file.display().to_string(),
            None => format!("no file serves {}", url),
        },
    };
    Ok(format!("{}\n", output))
}

pub fn run_file_to_urls(
    args: &FileToUrlsArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<String> {
    let file = resolve_path_or_cwd(&args.file)?;
    let urls = file_to_urls(&file, project, Some(args.authority.as_str()));

    let output = match format {
        OutputFormat::Json => {
            let value = json!({
                "file": file,
                "urls": urls.iter().map(Url::as_str).collect::<Vec<_>>(),
            });
            serde_json::to_string_pretty(&value).unwrap_or_default()
        }
        OutputFormat::Text => {
            if urls.is_empty() {
                format!("no URLs for {}", file.display())
            } else {
                urls.iter()
                    .map(Url::as_str)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    };
    Ok(format!("{}\n", output))
}
