use crate::error::{BumpError, Result};
use log::debug;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) fn create_client(service: &'static str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| BumpError::Http { service, source })
}

/// Sends `request` and decodes a successful JSON response.
pub(crate) async fn get_json<T: DeserializeOwned>(
    service: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let http_error = |source| BumpError::Http { service, source };
    let response = request.send().await.map_err(http_error)?;
    debug!("{} responded {} for {}", service, response.status(), response.url());
    response
        .error_for_status()
        .map_err(http_error)?
        .json::<T>()
        .await
        .map_err(http_error)
}
