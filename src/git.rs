use crate::error::{BumpError, Result};
use git2::{ErrorCode, Repository};
use log::debug;
use std::path::{Path, PathBuf};

/// Read-only view of the source-control state the release is cut from.
pub trait VersionControl {
    /// Root directory of the working tree.
    fn root(&self) -> Result<PathBuf>;
    /// Short name of the checked out branch.
    fn current_branch(&self) -> Result<String>;
    /// `owner/repo` for the given remote.
    fn repository_slug(&self, remote: &str) -> Result<String>;
}

pub struct GitTracker {
    pub repository: Repository,
}

impl GitTracker {
    /// Opens the repository containing `path`, searching parent directories
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repository = Repository::discover(path)?;

        debug!("Opened repository at {:?}", repository.path());

        Ok(GitTracker { repository })
    }

    /// Gets the push url of a remote, falling back to its fetch url
    pub fn push_url(&self, remote_name: &str) -> Result<String> {
        let remote = self.repository.find_remote(remote_name)?;
        let url = remote
            .pushurl()
            .or_else(|| remote.url())
            .ok_or_else(|| BumpError::InvalidRemoteUrl {
                remote: remote_name.to_string(),
                url: String::new(),
            })?;
        debug!("Remote '{}' push url: {}", remote_name, url);
        Ok(url.to_string())
    }
}

impl VersionControl for GitTracker {
    fn root(&self) -> Result<PathBuf> {
        self.repository
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| BumpError::BareRepository(self.repository.path().to_path_buf()))
    }

    fn current_branch(&self) -> Result<String> {
        if self.repository.head_detached()? {
            return Err(BumpError::DetachedHead);
        }
        match self.repository.head() {
            Ok(head) => {
                let branch_name = head.shorthand().ok_or(BumpError::DetachedHead)?;
                Ok(branch_name.to_string())
            }
            // No commits yet, HEAD still names the branch it will create
            Err(err) if err.code() == ErrorCode::UnbornBranch => {
                let head = self.repository.find_reference("HEAD")?;
                let target = head.symbolic_target().ok_or(BumpError::DetachedHead)?;
                debug!("HEAD is unborn, pointing at {}", target);
                Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn repository_slug(&self, remote: &str) -> Result<String> {
        let url = self.push_url(remote)?;
        normalize_repository_slug(&url).ok_or_else(|| BumpError::InvalidRemoteUrl {
            remote: remote.to_string(),
            url,
        })
    }
}

const HOST_PREFIXES: [&str; 4] = [
    "git@github.com:",
    "ssh://git@github.com/",
    "https://github.com/",
    "http://github.com/",
];

/// Reduces a GitHub remote url to `owner/repo`.
pub fn normalize_repository_slug(url: &str) -> Option<String> {
    let mut slug = url.trim();
    for prefix in HOST_PREFIXES {
        if let Some(rest) = slug.strip_prefix(prefix) {
            slug = rest;
            break;
        }
    }
    let slug = slug.trim_end_matches('/');
    let slug = slug.strip_suffix(".git").unwrap_or(slug);

    let (owner, repo) = slug.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || owner.contains(':') || repo.contains('/') {
        return None;
    }
    Some(slug.to_string())
}
