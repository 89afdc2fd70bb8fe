use crate::error::FetchError;
use http::HeaderMap;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// GET `url` and return the status with the body text, whatever the status.
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &Url,
    headers: HeaderMap,
) -> Result<(StatusCode, String), FetchError> {
    debug!("GET {}", url);
    let res = client
        .get(url.clone())
        .headers(headers)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;
    debug!("Received {} ({} bytes)", status, body.len());
    Ok((status, body))
}

/// GET `url`, fail on a non-success status, and deserialize the body.
pub async fn fetch_json<T>(client: &reqwest::Client, url: &Url, headers: HeaderMap) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let res = client
        .get(url.clone())
        .headers(headers)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?
        .error_for_status()?
        .text()
        .await?;

    match serde_json::from_str(&res) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", res))),
    }
}
