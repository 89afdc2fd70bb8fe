pub mod bearer_token;
pub mod category_id;
pub mod category_map;
pub mod client;
pub mod config;
pub mod distance;
pub mod error;
pub mod fetch;
pub mod get_place_details;
pub mod issue;
pub mod lat_lng;
pub mod place;
pub mod plan;
pub mod route;
pub mod search_places;
pub mod search_request;
pub mod sort_order;
pub mod task_parser;
