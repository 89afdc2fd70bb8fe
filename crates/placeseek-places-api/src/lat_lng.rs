use eyre::OptionExt;
use eyre::WrapErr;
use eyre::bail;
use std::str::FromStr;

/// A WGS84 coordinate pair, rendered as `lat,lng` for the `ll` parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> eyre::Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            bail!("Latitude out of range: {}", lat);
        }
        if !(-180.0..=180.0).contains(&lng) {
            bail!("Longitude out of range: {}", lng);
        }
        Ok(LatLng { lat, lng })
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_eyre(format!("Expected `lat,lng`, got {:?}", s))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .wrap_err_with(|| format!("Invalid latitude in {:?}", s))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .wrap_err_with(|| format!("Invalid longitude in {:?}", s))?;
        LatLng::new(lat, lng)
    }
}
