use crate::bearer_token::BearerToken;
use crate::category_id::CategoryId;
use crate::category_id::join_categories;
use crate::config::PlacesConfig;
use crate::error::FetchError;
use crate::lat_lng::LatLng;
use crate::sort_order::SortOrder;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::header::ACCEPT;
use http::header::AUTHORIZATION;
use url::Url;
use url::form_urlencoded;

pub const API_VERSION_HEADER: &str = "x-places-api-version";

/// One `/places/search` call. Built from a validated [`PlacesConfig`] and
/// then only ever consumed by the `with_*` adjusters, never mutated in place.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    endpoint: Url,
    coordinates: LatLng,
    radius: u32,
    categories: Vec<CategoryId>,
    query: Option<String>,
    limit: u32,
    sort: SortOrder,
    token: BearerToken,
    api_version: String,
}

impl SearchRequest {
    pub fn from_config(config: &PlacesConfig) -> eyre::Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint(["places", "search"])?;
        Ok(SearchRequest {
            endpoint,
            coordinates: config.coordinates,
            radius: config.radius,
            categories: config.categories.clone(),
            query: None,
            limit: config.limit,
            sort: config.sort,
            token: config.token.clone(),
            api_version: config.api_version.clone(),
        })
    }

    pub fn with_coordinates(self, coordinates: LatLng) -> Self {
        SearchRequest { coordinates, ..self }
    }

    pub fn with_radius(self, radius: u32) -> Self {
        SearchRequest { radius, ..self }
    }

    /// An empty list drops the `categories` parameter entirely.
    pub fn with_categories(self, categories: Vec<CategoryId>) -> Self {
        SearchRequest { categories, ..self }
    }

    pub fn with_query(self, query: Option<String>) -> Self {
        SearchRequest { query, ..self }
    }

    pub fn with_limit(self, limit: u32) -> Self {
        SearchRequest { limit, ..self }
    }

    pub fn with_sort(self, sort: SortOrder) -> Self {
        SearchRequest { sort, ..self }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn coordinates(&self) -> LatLng {
        self.coordinates
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ll", self.coordinates.to_string()),
            ("radius", self.radius.to_string()),
        ];
        if !self.categories.is_empty() {
            pairs.push(("categories", join_categories(&self.categories)));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("sort", self.sort.to_string()));
        pairs
    }

    /// Full request URL. Commas stay literal so `ll` and `categories` read
    /// the way the API documents them.
    pub fn url(&self) -> Url {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, encode_value(&v)))
            .collect::<Vec<_>>()
            .join("&");
        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        url
    }

    pub fn headers(&self) -> Result<HeaderMap, FetchError> {
        api_headers(&self.token, &self.api_version)
    }
}

/// Headers every Places API call carries.
pub fn api_headers(token: &BearerToken, api_version: &str) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&token.header_value())
        .map_err(|e| FetchError::MalformedInput(format!("authorization header: {}", e)))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        HeaderName::from_static(API_VERSION_HEADER),
        HeaderValue::from_str(api_version)
            .map_err(|e| FetchError::MalformedInput(format!("api version header: {}", e)))?,
    );
    Ok(headers)
}

fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        let config = PlacesConfig::new(BearerToken::new("fsq3token").unwrap()).unwrap();
        SearchRequest::from_config(&config).unwrap()
    }

    #[test]
    fn default_url_has_no_leading_space_and_fixed_parameters() {
        let url = request().url();
        assert_eq!(
            url.as_str(),
            "https://places-api.foursquare.com/places/search?ll=21.1458004,79.0881546&radius=1000&categories=17069&limit=10&sort=DISTANCE"
        );
    }

    #[test]
    fn headers_carry_accept_auth_and_version() {
        let headers = request().headers().unwrap();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer fsq3token");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[API_VERSION_HEADER], "2025-06-17");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn query_text_is_encoded_and_empty_categories_are_dropped() {
        let url = request()
            .with_categories(Vec::new())
            .with_query(Some("coffee & tea".to_string()))
            .with_limit(20)
            .url();
        assert_eq!(
            url.query(),
            Some("ll=21.1458004,79.0881546&radius=1000&query=coffee+%26+tea&limit=20&sort=DISTANCE")
        );
    }

    #[test]
    fn control_characters_in_version_are_malformed() {
        let config = PlacesConfig {
            api_version: "2025\n06".to_string(),
            ..PlacesConfig::new(BearerToken::new("t").unwrap()).unwrap()
        };
        let err = SearchRequest::from_config(&config).unwrap().headers().unwrap_err();
        assert!(matches!(err, FetchError::MalformedInput(_)));
    }

    #[test]
    fn invalid_config_is_rejected_before_building() {
        let mut config = PlacesConfig::new(BearerToken::new("t").unwrap()).unwrap();
        config.limit = 0;
        assert!(SearchRequest::from_config(&config).is_err());

        let mut config = PlacesConfig::new(BearerToken::new("t").unwrap()).unwrap();
        config.categories.clear();
        assert!(SearchRequest::from_config(&config).is_err());
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        for base in ["http://proxy.local/foursquare", "http://proxy.local/foursquare/"] {
            let mut config = PlacesConfig::new(BearerToken::new("t").unwrap()).unwrap();
            config.base_url = Url::parse(base).unwrap();
            let request = SearchRequest::from_config(&config).unwrap();
            assert_eq!(
                request.endpoint().as_str(),
                "http://proxy.local/foursquare/places/search"
            );
        }
    }
}
