use crate::client::PlacesClient;
use crate::lat_lng::LatLng;
use crate::route::OptimizedRoute;
use crate::route::optimize_route;
use crate::task_parser::ParsedTask;
use crate::task_parser::parse_tasks;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;
use tracing::warn;

/// Parsed errands with one stop per errand, in visiting order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrandPlan {
    pub parsed: ParsedTask,
    pub route: OptimizedRoute,
}

impl PlacesClient {
    /// Turn free text into a walking route: parse the errands, take the
    /// nearest place for each, then order the stops from `at`.
    pub async fn plan_errands(&self, input: &str, at: LatLng, radius: u32) -> eyre::Result<ErrandPlan> {
        let parsed = parse_tasks(input);
        info!("Planning {} errands", parsed.tasks.len());

        let mut stops = Vec::new();
        for task in &parsed.tasks {
            let places = self
                .search_places(&task.task_type, &task.category, at, radius)
                .await?;
            match places.into_iter().next() {
                Some(mut place) => {
                    place.task_type = Some(task.task_type.clone());
                    stops.push(place);
                }
                None => warn!("No place found for {:?}", task.task_type),
            }
        }

        Ok(ErrandPlan {
            parsed,
            route: optimize_route(stops, at),
        })
    }
}
