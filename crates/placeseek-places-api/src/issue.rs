use crate::client::PlacesClient;
use crate::error::FetchError;
use crate::fetch::fetch_text;
use crate::search_request::SearchRequest;
use reqwest::StatusCode;
use std::io::Write;
use tracing::debug;
use tracing::warn;

/// Send `request` once and copy the response body, untouched, into `out`.
///
/// The status code is returned for the caller's information only; a 401
/// body is written exactly like a 200 body. Nothing is written when the
/// request fails to complete.
pub async fn issue_search<W: Write>(
    client: &PlacesClient,
    request: &SearchRequest,
    out: &mut W,
) -> Result<StatusCode, FetchError> {
    let url = request.url();
    let headers = request.headers()?;
    let (status, body) = fetch_text(client.http(), &url, headers).await?;
    if status.is_success() {
        debug!("Search returned {}", status);
    } else {
        warn!("Search returned {}, printing body anyway", status);
    }
    out.write_all(body.as_bytes())?;
    out.flush()?;
    Ok(status)
}
