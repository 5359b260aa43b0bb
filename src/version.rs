//! Calendar versions of the form `YYYY.M.D`, optionally followed by a
//! `post` or `dev` counter.

use crate::error::{BumpError, Result};
use chrono::{Datelike, NaiveDate};
use log::debug;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suffix {
    Post(u64),
    Dev(u64),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    base_date: NaiveDate,
    suffix: Option<Suffix>,
}

impl Version {
    pub fn new(base_date: NaiveDate) -> Self {
        Version { base_date, suffix: None }
    }

    pub fn with_post(base_date: NaiveDate, post: u64) -> Self {
        Version { base_date, suffix: Some(Suffix::Post(post)) }
    }

    pub fn with_dev(base_date: NaiveDate, dev: u64) -> Self {
        Version { base_date, suffix: Some(Suffix::Dev(dev)) }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let captures = Self::version_match_regex()?
            .captures(input.trim())
            .ok_or_else(|| BumpError::InvalidVersion(input.to_string()))?;

        let number = |index: usize| -> Result<u32> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| BumpError::InvalidVersion(input.to_string()))
        };
        let base_date = NaiveDate::from_ymd_opt(number(1)? as i32, number(2)?, number(3)?)
            .ok_or_else(|| BumpError::InvalidVersion(input.to_string()))?;

        let counter = match captures.get(6).or_else(|| captures.get(4)) {
            Some(n) => n
                .as_str()
                .parse::<u64>()
                .map_err(|_| BumpError::InvalidVersion(input.to_string()))?,
            None => 0,
        };
        // `2024.3.15-1` is an implicit post release.
        let suffix = match captures.get(5).map(|m| m.as_str().to_ascii_lowercase()) {
            Some(kind) if kind == "dev" => Some(Suffix::Dev(counter)),
            Some(_) => Some(Suffix::Post(counter)),
            None if captures.get(4).is_some() => Some(Suffix::Post(counter)),
            None => None,
        };

        let version = Version { base_date, suffix };
        debug!("Parsed '{}' as {}", input, version);
        Ok(version)
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    /// The base date rendered as `YYYY.M.D`, without any suffix.
    pub fn base_version(&self) -> String {
        format_date(self.base_date)
    }

    pub fn post(&self) -> Option<u64> {
        match self.suffix {
            Some(Suffix::Post(n)) => Some(n),
            _ => None,
        }
    }

    pub fn dev(&self) -> Option<u64> {
        match self.suffix {
            Some(Suffix::Dev(n)) => Some(n),
            _ => None,
        }
    }

    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    fn version_match_regex() -> Result<Regex> {
        Ok(Regex::new(
            r"(?i)^v?(\d{1,4})\.(\d{1,2})\.(\d{1,2})(?:-(\d+)|[-_.]?(post|rev|r|dev)[-_.]?(\d+)?)?$",
        )?)
    }

    // dev releases sort below the plain date, post releases above it.
    fn sort_key(&self) -> (NaiveDate, u8, u64) {
        match self.suffix {
            Some(Suffix::Dev(n)) => (self.base_date, 0, n),
            None => (self.base_date, 1, 0),
            Some(Suffix::Post(n)) => (self.base_date, 2, n),
        }
    }
}

/// Formats a date as `YYYY.M.D` with no zero padding on month or day.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.year(), date.month(), date.day())
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_version())?;
        match self.suffix {
            Some(Suffix::Post(n)) => write!(f, ".post{n}"),
            Some(Suffix::Dev(n)) => write!(f, ".dev{n}"),
            None => Ok(()),
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
