//! Sequences the collaborators that cut a release: read the manifest,
//! resolve the branch, cross-check what was already published, decide the
//! next version and hand it to the write command.

use crate::command::{CommandRunner, VersionWriteCommand};
use crate::decider::{BranchContext, next_version};
use crate::error::Result;
use crate::git::VersionControl;
use crate::manifest::Manifest;
use crate::package_index::PackageIndex;
use crate::release_host::ReleaseHost;
use crate::version::Version;
use chrono::NaiveDate;
use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub remote: String,
    /// Package name on the index; the manifest's name is used when unset.
    pub package: Option<String>,
    pub write_command: VersionWriteCommand,
    pub dry_run: bool,
    pub skip_checks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub current: Version,
    pub next: String,
    pub branch: BranchContext,
    pub written: bool,
}

pub struct BumpRelease<V, H, P, C> {
    pub vcs: V,
    pub release_host: H,
    pub package_index: P,
    pub runner: C,
    pub options: BumpOptions,
}

impl<V, H, P, C> BumpRelease<V, H, P, C>
where
    V: VersionControl,
    H: ReleaseHost,
    P: PackageIndex,
    C: CommandRunner,
{
    pub async fn run(&self, today: NaiveDate) -> Result<BumpOutcome> {
        let root = self.vcs.root()?;
        let manifest = Manifest::load(&root)?;
        info!("Current version: {}", manifest.version);

        let current_branch = self.vcs.current_branch()?;
        let slug = self.vcs.repository_slug(&self.options.remote)?;
        let repository = self.release_host.repository(&slug).await?;
        let branch = BranchContext::new(current_branch, repository.default_branch);
        debug!("Repository {} on branch '{}' (default '{}')", slug, branch.current, branch.default);

        if branch.is_default() && !self.options.skip_checks {
            self.cross_check(&manifest, &slug).await?;
        }

        let next = next_version(today, &branch, &manifest.version)?;
        info!("Next version: {}", next);

        let written = if self.options.dry_run {
            debug!("Dry run - not writing version");
            false
        } else {
            self.options.write_command.write(&self.runner, &next)?;
            true
        };

        Ok(BumpOutcome { current: manifest.version, next, branch, written })
    }

    /// Warns when the manifest disagrees with what was last published.
    async fn cross_check(&self, manifest: &Manifest, slug: &str) -> Result<()> {
        let package = self
            .options
            .package
            .as_deref()
            .or(manifest.name.as_deref())
            .unwrap_or(crate::package_index::DEFAULT_PACKAGE_NAME);

        let published = self.package_index.latest_version(package).await?;
        if !matches_version(&published, &manifest.version) {
            warn!(
                "Current version {} does not match the version published for {}: {}",
                manifest.version, package, published
            );
        }

        let release = self.release_host.latest_release(slug).await?;
        if !matches_version(&release.tag_name, &manifest.version) {
            warn!(
                "Current version {} does not match the latest release of {}: {}",
                manifest.version, slug, release.tag_name
            );
        }
        Ok(())
    }
}

fn matches_version(published: &str, current: &Version) -> bool {
    match Version::parse(published) {
        Ok(version) => version == *current,
        Err(_) => false,
    }
}
