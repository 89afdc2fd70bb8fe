use std::ops::Deref;

/// Foursquare category code, e.g. `17069` for supermarkets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryId(pub String);
impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Deref for CategoryId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_string())
    }
}

/// Parse a comma separated list such as `17069,19014`.
pub fn parse_category_list(raw: &str) -> Vec<CategoryId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CategoryId::from)
        .collect()
}

pub fn join_categories(categories: &[CategoryId]) -> String {
    categories
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
