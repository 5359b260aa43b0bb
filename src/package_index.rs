use crate::error::Result;
use crate::http::{create_client, get_json};
use log::debug;
use serde::Deserialize;

pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";
pub const DEFAULT_PACKAGE_NAME: &str = "sickchill";
const SERVICE: &str = "PyPI";

#[allow(async_fn_in_trait)]
pub trait PackageIndex {
    /// Latest version of `package` published on the index.
    async fn latest_version(&self, package: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ProjectJson {
    info: ProjectInfo,
}

#[derive(Debug, Deserialize)]
struct ProjectInfo {
    version: String,
}

pub struct PyPiClient {
    client: reqwest::Client,
    index_url: String,
}

impl PyPiClient {
    pub fn new(index_url: impl Into<String>) -> Result<Self> {
        Ok(PyPiClient {
            client: create_client(SERVICE)?,
            index_url: index_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn project_url(&self, package: &str) -> String {
        format!("{}/pypi/{}/json", self.index_url, package)
    }
}

impl PackageIndex for PyPiClient {
    async fn latest_version(&self, package: &str) -> Result<String> {
        let url = self.project_url(package);
        debug!("Fetching package info: {}", url);
        let project: ProjectJson = get_json(SERVICE, self.client.get(&url)).await?;
        Ok(project.info.version)
    }
}
