use eyre::bail;

/// Foursquare service API key, sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> eyre::Result<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            bail!("Bearer token must not be empty");
        }
        Ok(BearerToken(token.to_string()))
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(len={})", self.0.len())
    }
}
