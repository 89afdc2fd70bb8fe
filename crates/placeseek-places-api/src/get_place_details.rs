use crate::client::PlacesClient;
use crate::fetch::fetch_json;
use crate::place::Place;
use crate::place::PlaceResult;
use crate::search_places::fill_distance;
use crate::search_request::api_headers;
use eyre::WrapErr;
use eyre::bail;

pub const DETAIL_FIELDS: &str = "fsq_id,name,location,categories,hours,rating,tel,website,geocodes";

impl PlacesClient {
    /// https://docs.foursquare.com/developer/reference/place-details
    pub async fn get_place_details(&self, place_id: &str) -> eyre::Result<Place> {
        let place_id = place_id.trim();
        if place_id.is_empty() || place_id == "." || place_id == ".." {
            bail!("Invalid place id: {:?}", place_id);
        }
        let config = self.config();
        let mut url = config.endpoint(["places", place_id])?;
        url.query_pairs_mut().append_pair("fields", DETAIL_FIELDS);

        let headers = api_headers(&config.token, &config.api_version)?;
        let result: PlaceResult = fetch_json(self.http(), &url, headers)
            .await
            .wrap_err_with(|| format!("Failed to get details for place {}", place_id))?;

        let category = result
            .categories
            .first()
            .map(|c| c.name.to_lowercase())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "general".to_string());
        let mut place = result.into_place(category);
        fill_distance(&mut place, config.coordinates);
        Ok(place)
    }
}
