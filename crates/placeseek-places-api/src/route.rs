use crate::distance::haversine_meters;
use crate::lat_lng::LatLng;
use crate::place::Place;
use serde::Deserialize;
use serde::Serialize;

/// Assumed walking pace.
pub const WALKING_METERS_PER_MINUTE: f64 = 80.0;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub places: Vec<Place>,
    /// Sum of each stop's reported distance, in meters.
    pub total_distance: f64,
    /// Seconds at walking pace.
    pub total_time: u64,
}

/// Order stops nearest-first from `start`. Stops without coordinates go last.
pub fn optimize_route(mut places: Vec<Place>, start: LatLng) -> OptimizedRoute {
    let from_start = |place: &Place| match (place.latitude, place.longitude) {
        (Some(lat), Some(lng)) => haversine_meters(start, LatLng { lat, lng }),
        _ => f64::INFINITY,
    };
    places.sort_by(|a, b| from_start(a).total_cmp(&from_start(b)));

    let total_distance: f64 = places.iter().filter_map(|p| p.distance).sum();
    let total_time = (total_distance / WALKING_METERS_PER_MINUTE * 60.0).round() as u64;

    OptimizedRoute {
        places,
        total_distance,
        total_time,
    }
}
