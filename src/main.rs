//! embernav CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use embernav::commands;
use embernav::{Cli, Commands, Project};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> embernav::Result<String> {
    let cli = Cli::parse();
    let project = Project::load(&cli.project)?;

    if cli.verbose {
        eprintln!(
            "Loaded {} module root(s) from {}",
            project.roots.len(),
            cli.project.display()
        );
    }

    match &cli.command {
        Commands::Classify(args) => commands::classify::run(args, &project, cli.format),
        Commands::UrlToFile(args) => commands::url::run_url_to_file(args, &project, cli.format),
        Commands::FileToUrls(args) => commands::url::run_file_to_urls(args, &project, cli.format),
        Commands::Search(args) => commands::search::run_search(args, &project, cli.format),
        Commands::Names(args) => commands::search::run_names(args, cli.format),
    }
}
