use crate::errors::ServerError;
use url::form_urlencoded;

/// Decoded query-string or form values. Multi-selects repeat their key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn from_query(query: Option<&str>) -> Self {
        Self::parse(query.unwrap_or_default())
    }

    pub fn from_form(body: &str) -> Self {
        Self::parse(body)
    }

    fn parse(encoded: &str) -> Self {
        let pairs = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First non-blank value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == name && !v.trim().is_empty())
            .map(|(_, v)| v.trim())
            .collect()
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, ServerError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| ServerError::BadRequest(format!("'{name}' must be a number"))),
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(v) if v != "0" && !v.eq_ignore_ascii_case("false"))
    }
}
