use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("Could not find manifest at {}", .0.display())]
    ManifestNotFound(PathBuf),
    #[error("Failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Could not find a version in {} (looked for {keys})", .path.display())]
    VersionFieldMissing { path: PathBuf, keys: &'static str },
    #[error("Invalid calendar version '{0}'")]
    InvalidVersion(String),
    #[error("No next version is defined for branch '{branch}' (default branch is '{default_branch}')")]
    UnsupportedBranch {
        branch: String,
        default_branch: String,
    },
    #[error("HEAD is detached, could not determine the current branch")]
    DetachedHead,
    #[error("Repository at {} has no working directory", .0.display())]
    BareRepository(PathBuf),
    #[error("Remote '{remote}' has an unrecognized url '{url}'")]
    InvalidRemoteUrl { remote: String, url: String },
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
    #[error("Request to {service} failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Command '{command}' failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
    #[error("Invalid command line '{0}'")]
    InvalidCommand(String),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BumpError>;
