use thiserror::Error;

/// Why a request could not produce a response body.
///
/// A response with a non-success status is not a `FetchError`; the body is
/// still delivered to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error requesting {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed request: {0}")]
    MalformedInput(String),
    #[error("failed to write response body")]
    Output(#[from] std::io::Error),
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            FetchError::Timeout { url, source }
        } else if source.is_builder() {
            FetchError::MalformedInput(source.to_string())
        } else {
            FetchError::Network { url, source }
        }
    }
}
