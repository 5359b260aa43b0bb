use crate::error::{BumpError, Result};
use crate::version::Version;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";
const VERSION_KEYS: &str = "tool.poetry.version, project.version";

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Option<Tool>,
    #[serde(default)]
    project: Option<Package>,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    poetry: Option<Package>,
}

#[derive(Debug, Default, Deserialize)]
struct Package {
    name: Option<String>,
    version: Option<String>,
}

/// The project manifest at the repository root.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub name: Option<String>,
    pub version: Version,
}

impl Manifest {
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MANIFEST_FILE_NAME);
        if !path.is_file() {
            return Err(BumpError::ManifestNotFound(path));
        }
        debug!("Reading manifest: '{}'", path.display());
        let contents = std::fs::read_to_string(&path)?;
        Self::from_contents(path, &contents)
    }

    fn from_contents(path: PathBuf, contents: &str) -> Result<Self> {
        let pyproject: PyProject = match toml::from_str(contents) {
            Ok(pyproject) => pyproject,
            Err(source) => return Err(BumpError::ManifestParse { path, source }),
        };

        let poetry = pyproject.tool.and_then(|tool| tool.poetry).unwrap_or_default();
        let project = pyproject.project.unwrap_or_default();

        let Some(raw_version) = poetry.version.or(project.version) else {
            return Err(BumpError::VersionFieldMissing { path, keys: VERSION_KEYS });
        };
        let version = Version::parse(&raw_version)?;
        let name = poetry.name.or(project.name);

        debug!("Found current version {} in '{}'", version, path.display());
        Ok(Manifest { path, name, version })
    }
}
