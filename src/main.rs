use anyhow::{Context, Result};
use bump_release::{
    arguments::Arguments,
    bump::{BumpOptions, BumpRelease},
    command::{SystemCommandRunner, VersionWriteCommand},
    git::GitTracker,
    package_index::PyPiClient,
    release_host::GitHubClient,
};
use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let vcs = GitTracker::open(&args.path)
        .with_context(|| format!("Failed to find git repository at {:?}", args.path))?;
    let options = BumpOptions {
        remote: args.remote,
        package: args.package,
        write_command: VersionWriteCommand::parse(&args.write_command)?,
        dry_run: args.dry_run,
        skip_checks: args.skip_checks,
    };
    let bump = BumpRelease {
        vcs,
        release_host: GitHubClient::new(args.github_api_url, args.github_token)?,
        package_index: PyPiClient::new(args.index_url)?,
        runner: SystemCommandRunner,
        options,
    };

    let today = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let outcome = bump.run(today).await.context("Failed to bump release version")?;

    if !outcome.written {
        println!("{}", outcome.next);
    }

    Ok(())
}
