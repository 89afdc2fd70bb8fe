use crate::bearer_token::BearerToken;
use crate::category_id::CategoryId;
use crate::category_id::parse_category_list;
use crate::lat_lng::LatLng;
use crate::sort_order::SortOrder;
use eyre::Result;
use eyre::WrapErr;
use eyre::bail;
use eyre::eyre;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://places-api.foursquare.com";
pub const DEFAULT_API_VERSION: &str = "2025-06-17";
pub const DEFAULT_LAT: f64 = 21.1458004;
pub const DEFAULT_LNG: f64 = 79.0881546;
pub const DEFAULT_RADIUS: u32 = 1000;
pub const DEFAULT_CATEGORY: &str = "17069";
pub const DEFAULT_LIMIT: u32 = 10;

pub const MAX_RADIUS: u32 = 100_000;
pub const MAX_LIMIT: u32 = 50;

pub const API_KEY_VAR: &str = "FOURSQUARE_API_KEY";

/// Everything needed to issue a place search.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub coordinates: LatLng,
    pub radius: u32,
    pub categories: Vec<CategoryId>,
    pub limit: u32,
    pub sort: SortOrder,
    pub token: BearerToken,
    pub api_version: String,
    pub base_url: Url,
}

impl PlacesConfig {
    pub fn new(token: BearerToken) -> Result<Self> {
        Ok(PlacesConfig {
            coordinates: LatLng::new(DEFAULT_LAT, DEFAULT_LNG)?,
            radius: DEFAULT_RADIUS,
            categories: vec![CategoryId::from(DEFAULT_CATEGORY)],
            limit: DEFAULT_LIMIT,
            sort: SortOrder::Distance,
            token,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL)?,
        })
    }

    /// Build from the process environment. `.env` is loaded by `init`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Missing optional variables
    /// keep their defaults; the API key is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let key = lookup(API_KEY_VAR).ok_or_else(|| eyre!("Missing env var: {}", API_KEY_VAR))?;
        let token = BearerToken::new(key).wrap_err_with(|| format!("Invalid {}", API_KEY_VAR))?;
        let mut config = PlacesConfig::new(token)?;

        if let Some(ll) = lookup("PLACES_LL") {
            config.coordinates = ll.parse().wrap_err("Invalid PLACES_LL")?;
        }
        if let Some(radius) = lookup("PLACES_RADIUS") {
            config.radius = radius.trim().parse().wrap_err("Invalid PLACES_RADIUS")?;
        }
        if let Some(categories) = lookup("PLACES_CATEGORIES") {
            config.categories = parse_category_list(&categories);
        }
        if let Some(limit) = lookup("PLACES_LIMIT") {
            config.limit = limit.trim().parse().wrap_err("Invalid PLACES_LIMIT")?;
        }
        if let Some(sort) = lookup("PLACES_SORT") {
            config.sort = sort.parse().wrap_err("Invalid PLACES_SORT")?;
        }
        if let Some(version) = lookup("PLACES_API_VERSION") {
            config.api_version = version.trim().to_string();
        }
        if let Some(base_url) = lookup("PLACES_BASE_URL") {
            config.base_url = Url::parse(base_url.trim()).wrap_err("Invalid PLACES_BASE_URL")?;
        }

        config.validate()?;
        debug!(
            "Loaded config: ll={} radius={} limit={} sort={}",
            config.coordinates, config.radius, config.limit, config.sort
        );
        Ok(config)
    }

    /// `base_url` with `segments` appended, keeping any path prefix the
    /// base carries. Each segment is percent-encoded on its own.
    pub fn endpoint<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| eyre!("base_url is not a valid base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn validate(&self) -> Result<()> {
        if self.radius == 0 || self.radius > MAX_RADIUS {
            bail!("radius must be between 1 and {}, got {}", MAX_RADIUS, self.radius);
        }
        if self.limit == 0 || self.limit > MAX_LIMIT {
            bail!("limit must be between 1 and {}, got {}", MAX_LIMIT, self.limit);
        }
        if self.categories.is_empty() {
            bail!("at least one category is required");
        }
        if self.api_version.trim().is_empty() {
            bail!("api_version must not be empty");
        }
        if self.base_url.cannot_be_a_base() {
            bail!("base_url is not a valid base: {}", self.base_url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_original_search() {
        let config = PlacesConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "key")])).unwrap();
        assert_eq!(config.coordinates.to_string(), "21.1458004,79.0881546");
        assert_eq!(config.radius, 1000);
        assert_eq!(config.categories, vec![CategoryId::from("17069")]);
        assert_eq!(config.limit, 10);
        assert_eq!(config.sort, SortOrder::Distance);
        assert_eq!(config.api_version, "2025-06-17");
        assert_eq!(config.base_url.as_str(), "https://places-api.foursquare.com/");
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let err = PlacesConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
        assert!(PlacesConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).is_err());
    }

    #[test]
    fn overrides_are_applied() {
        let config = PlacesConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key"),
            ("PLACES_LL", "40.7,-74.0"),
            ("PLACES_RADIUS", "2500"),
            ("PLACES_CATEGORIES", "13065,13066"),
            ("PLACES_LIMIT", "5"),
            ("PLACES_SORT", "rating"),
            ("PLACES_BASE_URL", "http://127.0.0.1:9999"),
        ]))
        .unwrap();
        assert_eq!(config.coordinates.to_string(), "40.7,-74");
        assert_eq!(config.radius, 2500);
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.limit, 5);
        assert_eq!(config.sort, SortOrder::Rating);
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9999/");
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        for (name, value) in [
            ("PLACES_RADIUS", "0"),
            ("PLACES_RADIUS", "100001"),
            ("PLACES_LIMIT", "0"),
            ("PLACES_LIMIT", "51"),
            ("PLACES_CATEGORIES", " , "),
            ("PLACES_API_VERSION", " "),
        ] {
            let result = PlacesConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "key"), (name, value)]));
            assert!(result.is_err(), "{}={} should be rejected", name, value);
        }
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let config = PlacesConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key"),
            ("PLACES_BASE_URL", "http://proxy.local/foursquare"),
        ]))
        .unwrap();
        assert_eq!(
            config.endpoint(["places", "search"]).unwrap().as_str(),
            "http://proxy.local/foursquare/places/search"
        );
    }

    #[test]
    fn endpoint_encodes_each_segment() {
        let config = PlacesConfig::new(BearerToken::new("key").unwrap()).unwrap();
        let url = config.endpoint(["places", "a?b#c/d"]).unwrap();
        assert_eq!(url.path(), "/places/a%3Fb%23c%2Fd");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }
}
