use eyre::eyre;
use std::str::FromStr;

/// Result ordering accepted by `/places/search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Relevance,
    Rating,
    #[default]
    Distance,
    Popularity,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "RELEVANCE",
            SortOrder::Rating => "RATING",
            SortOrder::Distance => "DISTANCE",
            SortOrder::Popularity => "POPULARITY",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RELEVANCE" => Ok(SortOrder::Relevance),
            "RATING" => Ok(SortOrder::Rating),
            "DISTANCE" => Ok(SortOrder::Distance),
            "POPULARITY" => Ok(SortOrder::Popularity),
            other => Err(eyre!("Unknown sort order: {}", other)),
        }
    }
}
