use crate::command::DEFAULT_WRITE_COMMAND;
use crate::package_index::DEFAULT_INDEX_URL;
use crate::release_host::DEFAULT_GITHUB_API_URL;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bump-release")]
pub struct Arguments {
    /// Print the next version instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
    /// Package to compare against on the index (defaults to the manifest's name)
    #[arg(long)]
    pub package: Option<String>,
    #[arg(long, default_value = "origin")]
    pub remote: String,
    /// Command that persists the version; the version is appended as its last argument
    #[arg(long, default_value = DEFAULT_WRITE_COMMAND)]
    pub write_command: String,
    /// Use this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Skip comparing the manifest version with the published versions
    #[arg(long)]
    pub skip_checks: bool,
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
    #[arg(long, env = "PYPI_URL", default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,
}
