use crate::error::{BumpError, Result};
use crate::version::{Version, format_date};
use chrono::NaiveDate;
use log::debug;

/// Name of the pre-release branch.
pub const DEVELOP_BRANCH: &str = "develop";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BranchKind {
    Stable,
    Develop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub current: String,
    pub default: String,
}

impl BranchContext {
    pub fn new(current: impl Into<String>, default: impl Into<String>) -> Self {
        BranchContext { current: current.into(), default: default.into() }
    }

    pub fn is_default(&self) -> bool {
        self.current == self.default
    }

    /// Classifies the checked out branch. A default branch named `develop`
    /// is treated as stable.
    pub fn classify(&self) -> Result<BranchKind> {
        if self.is_default() {
            Ok(BranchKind::Stable)
        } else if self.current == DEVELOP_BRANCH {
            Ok(BranchKind::Develop)
        } else {
            Err(BumpError::UnsupportedBranch {
                branch: self.current.clone(),
                default_branch: self.default.clone(),
            })
        }
    }
}

/// Computes the next version string for `branch` given today's date and the
/// version currently in the manifest.
pub fn next_version(today: NaiveDate, branch: &BranchContext, current: &Version) -> Result<String> {
    let kind = branch.classify()?;
    let is_new_day = today > current.base_date();
    debug!(
        "Deciding next version: today={}, branch={} ({:?}), current={}",
        today, branch.current, kind, current
    );

    let next = match kind {
        BranchKind::Stable if is_new_day => format_date(today),
        BranchKind::Stable => {
            let post = increment(current.post(), current)?;
            format!("{}-post{}", current.base_version(), post)
        }
        BranchKind::Develop if is_new_day => format!("{}.dev0", format_date(today)),
        BranchKind::Develop => {
            let dev = increment(current.dev(), current)?;
            format!("{}-dev{}", current.base_version(), dev)
        }
    };
    Ok(next)
}

fn increment(counter: Option<u64>, current: &Version) -> Result<u64> {
    counter
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| BumpError::InvalidVersion(current.to_string()))
}
