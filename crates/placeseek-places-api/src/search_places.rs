use crate::category_map::category_ids_for;
use crate::category_map::query_for;
use crate::client::PlacesClient;
use crate::distance::haversine_meters;
use crate::fetch::fetch_json;
use crate::lat_lng::LatLng;
use crate::place::Place;
use crate::place::PlaceResult;
use crate::place::SearchResponse;
use crate::search_request::SearchRequest;
use crate::sort_order::SortOrder;
use tracing::debug;
use tracing::info;

pub const ERRAND_LIMIT: u32 = 20;
pub const DEFAULT_ERRAND_RADIUS: u32 = 3000;

impl PlacesClient {
    /// Find places for an errand, nearest first.
    ///
    /// Results without numeric coordinates are dropped. When nothing is left,
    /// one more search runs without a category filter, using the category
    /// name as free text.
    pub async fn search_places(
        &self,
        task_type: &str,
        category: &str,
        at: LatLng,
        radius: u32,
    ) -> eyre::Result<Vec<Place>> {
        let base = SearchRequest::from_config(self.config())?
            .with_coordinates(at)
            .with_radius(radius)
            .with_limit(ERRAND_LIMIT)
            .with_sort(SortOrder::Distance);

        let request = base
            .clone()
            .with_categories(category_ids_for(category))
            .with_query(Some(query_for(task_type)));
        let mut results = self.search_with_coordinates(&request).await?;

        if results.is_empty() {
            info!("No results for {:?}/{:?}, retrying by category name", task_type, category);
            let fallback = base
                .with_categories(Vec::new())
                .with_query(Some(category.to_string()));
            results = self.search_with_coordinates(&fallback).await?;
        }

        Ok(results
            .into_iter()
            .map(|result| {
                let mut place = result.into_place(category.to_string());
                fill_distance(&mut place, at);
                place
            })
            .collect())
    }

    async fn search_with_coordinates(&self, request: &SearchRequest) -> eyre::Result<Vec<PlaceResult>> {
        let response: SearchResponse =
            fetch_json(self.http(), &request.url(), request.headers()?).await?;
        let total = response.results.len();
        let kept: Vec<_> = response
            .results
            .into_iter()
            .filter(PlaceResult::has_coordinates)
            .collect();
        debug!("Kept {} of {} results", kept.len(), total);
        Ok(kept)
    }
}

pub(crate) fn fill_distance(place: &mut Place, from: LatLng) {
    if place.distance.is_some() {
        return;
    }
    if let (Some(lat), Some(lng)) = (place.latitude, place.longitude) {
        if let Ok(to) = LatLng::new(lat, lng) {
            place.distance = Some(haversine_meters(from, to).round());
        }
    }
}
