use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

pub const HOURS_NOT_AVAILABLE: &str = "Hours not available";

/// Body of `/places/search`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

/// A place as the API returns it. Most fields are optional in practice.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    #[serde(rename = "fsq_place_id")]
    pub fsq_place_id: Option<String>,
    #[serde(rename = "fsq_id")]
    pub fsq_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_none")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub rating: Option<f64>,
    pub hours: Option<Hours>,
    pub tel: Option<String>,
    pub website: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub locality: Option<String>,
    #[serde(rename = "formatted_address")]
    pub formatted_address: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "fsq_category_id")]
    pub fsq_category_id: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hours {
    pub display: Option<String>,
}

/// Flattened view of a place, ready to show to a user.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    pub distance: Option<f64>,
    pub rating: f64,
    pub hours: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

impl PlaceResult {
    pub fn id(&self) -> String {
        self.fsq_place_id
            .clone()
            .or_else(|| self.fsq_id.clone())
            .unwrap_or_default()
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn address(&self) -> String {
        match &self.location.formatted_address {
            Some(formatted) if !formatted.is_empty() => formatted.clone(),
            _ => format!(
                "{} {}",
                self.location.address.as_deref().unwrap_or(""),
                self.location.locality.as_deref().unwrap_or("")
            )
            .trim()
            .to_string(),
        }
    }

    pub fn hours_display(&self) -> String {
        self.hours
            .as_ref()
            .and_then(|h| h.display.clone())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| HOURS_NOT_AVAILABLE.to_string())
    }

    pub fn into_place(self, category: String) -> Place {
        Place {
            id: self.id(),
            address: self.address(),
            hours: self.hours_display(),
            category,
            distance: self.distance,
            rating: self.rating.unwrap_or(0.0),
            name: self.name,
            phone: self.tel,
            website: self.website,
            latitude: self.latitude,
            longitude: self.longitude,
            task_type: None,
        }
    }
}

/// Accept any JSON value, keeping it only when it is a number.
fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
