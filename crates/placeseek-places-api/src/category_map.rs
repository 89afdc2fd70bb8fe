use crate::category_id::CategoryId;

pub const FALLBACK_CATEGORY: &str = "17000";

/// Foursquare category codes for an errand category such as `grocery`.
pub fn category_ids_for(errand_category: &str) -> Vec<CategoryId> {
    let codes: &[&str] = match errand_category {
        "grocery" => &["17069", "19014", "13000"],
        "pharmacy" => &["17102", "19016"],
        "restaurant" => &["13065", "13066", "13068"],
        "cafe" => &["13032", "13033"],
        "bank" => &["10019", "10020"],
        "gas_station" => &["17110", "19022"],
        "shopping" => &["17000", "17001"],
        "gym" => &["18021", "18077"],
        _ => &[FALLBACK_CATEGORY],
    };
    codes.iter().copied().map(CategoryId::from).collect()
}

/// Search text for a task; common phrasings map to a better query.
pub fn query_for(task_type: &str) -> String {
    match task_type {
        "lunch" | "dinner" => "restaurant",
        "ATM visit" => "ATM",
        "grocery shopping" => "supermarket",
        "coffee break" | "tea break" => "cafe",
        other => other,
    }
    .to_string()
}
