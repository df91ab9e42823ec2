//! Remote endpoints of the recipe service
//!
//! Every request the app can make is one of these five. Each maps to a fixed
//! URL template with at most one substituted parameter.

use super::query::Query;
use crate::error::FetchError;
use reqwest::Url;

/// Public test key used by the free v1 endpoints
const PUBLIC_KEY: &str = "1";

/// A request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SearchByName(Query),
    Latest,
    Random,
    RandomSelection,
    LookupById(String),
}

impl Endpoint {
    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::SearchByName(_) => "search-by-name",
            Endpoint::Latest => "latest",
            Endpoint::Random => "random",
            Endpoint::RandomSelection => "random-selection",
            Endpoint::LookupById(_) => "lookup-by-id",
        }
    }

    /// Whether the template carries the access token
    pub fn requires_access_token(&self) -> bool {
        matches!(self, Endpoint::Latest | Endpoint::RandomSelection)
    }

    /// Lookup requests resolve to exactly one record
    pub fn is_lookup(&self) -> bool {
        matches!(self, Endpoint::LookupById(_))
    }

    /// Build the full request URL
    ///
    /// `base` is the API root, e.g. `https://www.themealdb.com/api/json`.
    pub fn url(&self, base: &str, access_token: Option<&str>) -> Result<Url, FetchError> {
        let base = base.trim_end_matches('/');
        let token = match access_token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None if self.requires_access_token() => {
                return Err(FetchError::MissingAccessToken(self.name()));
            }
            None => "",
        };

        let path = match self {
            Endpoint::SearchByName(_) => format!("{}/v1/{}/search.php", base, PUBLIC_KEY),
            Endpoint::Random => format!("{}/v1/{}/random.php", base, PUBLIC_KEY),
            Endpoint::LookupById(_) => format!("{}/v1/{}/lookup.php", base, PUBLIC_KEY),
            Endpoint::Latest | Endpoint::RandomSelection => {
                let file = if *self == Endpoint::Latest {
                    "latest.php"
                } else {
                    "randomselection.php"
                };
                format!("{}/v2/{}/{}", base, token, file)
            }
        };

        let mut url = Url::parse(&path).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        match self {
            Endpoint::SearchByName(query) => {
                url.query_pairs_mut().append_pair("s", query.as_str());
            }
            Endpoint::LookupById(id) => {
                url.query_pairs_mut().append_pair("i", id);
            }
            _ => {}
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BASE: &str = "https://www.themealdb.com/api/json";

    fn query_param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_search_url_substitutes_query() {
        let endpoint = Endpoint::SearchByName(Query::parse("arrabiata").unwrap());
        let url = endpoint.url(BASE, None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=arrabiata"
        );
    }

    #[test]
    fn test_search_url_round_trips_exact_string() {
        let endpoint = Endpoint::SearchByName(Query::parse("mac & cheese").unwrap());
        let url = endpoint.url(BASE, None).unwrap();
        assert_eq!(query_param(&url, "s").as_deref(), Some("mac & cheese"));
    }

    #[test]
    fn test_lookup_url() {
        let url = Endpoint::LookupById("52772".to_string())
            .url(BASE, None)
            .unwrap();
        assert_eq!(url.path(), "/api/json/v1/1/lookup.php");
        assert_eq!(query_param(&url, "i").as_deref(), Some("52772"));
    }

    #[rstest]
    #[case(Endpoint::Latest, "/api/json/v2/secret/latest.php")]
    #[case(Endpoint::RandomSelection, "/api/json/v2/secret/randomselection.php")]
    fn test_token_endpoints(#[case] endpoint: Endpoint, #[case] path: &str) {
        let url = endpoint.url(BASE, Some("secret")).unwrap();
        assert_eq!(url.path(), path);
        assert!(endpoint.requires_access_token());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn test_token_endpoints_without_token_fail(#[case] token: Option<&str>) {
        let err = Endpoint::Latest.url(BASE, token).unwrap_err();
        assert!(matches!(err, FetchError::MissingAccessToken("latest")));
    }

    #[test]
    fn test_random_ignores_token() {
        let url = Endpoint::Random.url(BASE, Some("secret")).unwrap();
        assert_eq!(url.path(), "/api/json/v1/1/random.php");
        assert!(!Endpoint::Random.requires_access_token());
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = Endpoint::Random
            .url("http://localhost:8080/api/json/", None)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/json/v1/1/random.php");
    }

    #[test]
    fn test_invalid_base() {
        let err = Endpoint::Random.url("not a url", None).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
