use crate::config::PlacesConfig;

/// The HTTP transport paired with the configuration it talks with.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    config: PlacesConfig,
}

impl PlacesClient {
    pub fn new(http: reqwest::Client, config: PlacesConfig) -> Self {
        PlacesClient { http, config }
    }

    pub fn from_config(config: PlacesConfig) -> Self {
        PlacesClient::new(reqwest::Client::new(), config)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn config(&self) -> &PlacesConfig {
        &self.config
    }
}
