use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query string accepted by the relay route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateQrQuery {
    pub url: Option<String>,
}

impl GenerateQrQuery {
    /// Picks the first non-empty `url` pair out of a raw query string.
    /// Repeated keys are allowed; later values are ignored.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let url = raw.and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(key, value)| key == "url" && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        });
        Self { url }
    }

    /// The target url, if one was supplied and is not empty.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Body posted to the generation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpstreamGenerateRequest {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_url() {
        let query = GenerateQrQuery::from_raw(Some("url=https%3A%2F%2Fexample.com%2F%3Fa%3D1"));
        assert_eq!(query.target(), Some("https://example.com/?a=1"));
    }

    #[test]
    fn first_non_empty_url_wins() {
        assert_eq!(GenerateQrQuery::from_raw(Some("url=a&url=b")).target(), Some("a"));
        assert_eq!(GenerateQrQuery::from_raw(Some("url=&url=b")).target(), Some("b"));
    }

    #[test]
    fn absent_or_empty_url_has_no_target() {
        for raw in [None, Some(""), Some("url="), Some("other=1")] {
            assert_eq!(GenerateQrQuery::from_raw(raw).target(), None, "{:?}", raw);
        }
    }
}
