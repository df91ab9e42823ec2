//! Fetch client for the recipe service
//!
//! One GET per endpoint, body parsed as `{"meals": null | [..]}`. The HTTP
//! layer sits behind the [`Transport`] trait so tests can swap it out.

use crate::error::FetchError;
use crate::model::{Endpoint, Recipe};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Result of a successful request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSet {
    /// The service answered with the `null` sentinel
    NoResults,
    Records(Vec<Recipe>),
}

impl ResultSet {
    pub fn len(&self) -> usize {
        match self {
            ResultSet::NoResults => 0,
            ResultSet::Records(records) => records.len(),
        }
    }
}

/// Raw GET of a URL, returning the response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String, FetchError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the transport; `None` leaves requests without a timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("recipe-tui/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Issues requests for endpoints and turns bodies into result sets
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    access_token: Option<String>,
}

impl FetchClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            access_token,
        }
    }

    /// Execute one request
    ///
    /// Lookups keep only the first record and fail when there is none.
    pub async fn execute(&self, endpoint: &Endpoint) -> Result<ResultSet, FetchError> {
        let url = endpoint.url(&self.base_url, self.access_token.as_deref())?;
        tracing::debug!(endpoint = endpoint.name(), "sending request");

        let body = self.transport.get(&url).await?;
        let result = parse_meals(&body)?;

        let result = match (endpoint, result) {
            (Endpoint::LookupById(id), ResultSet::NoResults) => {
                return Err(FetchError::RecordNotFound(id.clone()));
            }
            (Endpoint::LookupById(_), ResultSet::Records(mut records)) => {
                records.truncate(1);
                ResultSet::Records(records)
            }
            (_, result) => result,
        };

        tracing::info!(
            endpoint = endpoint.name(),
            records = result.len(),
            "request completed"
        );
        Ok(result)
    }
}

/// Parse a response body
///
/// `null` and an empty array both mean no results. A missing `meals` key is a
/// malformed response, not an empty one.
pub fn parse_meals(body: &str) -> Result<ResultSet, FetchError> {
    let mut value: Value = serde_json::from_str(body)?;

    let meals = value
        .get_mut("meals")
        .map(Value::take)
        .ok_or(FetchError::MissingMeals)?;

    if meals.is_null() {
        return Ok(ResultSet::NoResults);
    }

    let records: Vec<Recipe> = serde_json::from_value(meals)?;
    if records.is_empty() {
        Ok(ResultSet::NoResults)
    } else {
        Ok(ResultSet::Records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Query;
    use crate::services::fake::FakeTransport;
    use rstest::rstest;

    const BASE: &str = "https://www.themealdb.com/api/json";

    fn client(fake: &Arc<FakeTransport>) -> FetchClient {
        FetchClient::new(fake.clone(), BASE, Some("token".to_string()))
    }

    fn search(q: &str) -> Endpoint {
        Endpoint::SearchByName(Query::parse(q).unwrap())
    }

    #[test]
    fn test_parse_null_sentinel() {
        assert_eq!(parse_meals(r#"{"meals": null}"#).unwrap(), ResultSet::NoResults);
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_meals(r#"{"meals": []}"#).unwrap(), ResultSet::NoResults);
    }

    #[test]
    fn test_parse_records_keep_order() {
        let body = r#"{"meals": [
            {"idMeal": "2", "strMeal": "Second"},
            {"idMeal": "1", "strMeal": "First"}
        ]}"#;
        let ResultSet::Records(records) = parse_meals(body).unwrap() else {
            panic!("expected records");
        };
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[rstest]
    #[case::absent_key(r#"{"recipes": []}"#)]
    #[case::not_an_object(r#"[1, 2, 3]"#)]
    fn test_parse_missing_meals(#[case] body: &str) {
        assert!(matches!(parse_meals(body), Err(FetchError::MissingMeals)));
    }

    #[rstest]
    #[case::not_json("<html>502</html>")]
    #[case::truncated(r#"{"meals": [{"idMeal""#)]
    #[case::wrong_shape(r#"{"meals": "nope"}"#)]
    #[case::record_without_id(r#"{"meals": [{"strMeal": "Nameless"}]}"#)]
    fn test_parse_malformed(#[case] body: &str) {
        assert!(matches!(parse_meals(body), Err(FetchError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn test_execute_issues_one_get() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond(
            "search.php",
            r#"{"meals": [{"idMeal": "52771", "strMeal": "Spicy Arrabiata Penne"}]}"#,
        );

        let result = client(&fake).execute(&search("arrabiata")).await.unwrap();

        assert_eq!(result.len(), 1);
        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].as_str(),
            "https://www.themealdb.com/api/json/v1/1/search.php?s=arrabiata"
        );
    }

    #[tokio::test]
    async fn test_execute_propagates_transport_fault() {
        let fake = Arc::new(FakeTransport::new());
        fake.fail("search.php", "connection reset");

        let err = client(&fake).execute(&search("soup")).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(fake.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_takes_first_record() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond(
            "lookup.php",
            r#"{"meals": [
                {"idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole"},
                {"idMeal": "99999", "strMeal": "Extra"}
            ]}"#,
        );

        let result = client(&fake)
            .execute(&Endpoint::LookupById("52772".to_string()))
            .await
            .unwrap();

        let ResultSet::Records(records) = result else {
            panic!("expected records");
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "52772");
    }

    #[rstest]
    #[case(r#"{"meals": null}"#)]
    #[case(r#"{"meals": []}"#)]
    #[tokio::test]
    async fn test_empty_lookup_is_a_fault(#[case] body: &str) {
        let fake = Arc::new(FakeTransport::new());
        fake.respond("lookup.php", body);

        let err = client(&fake)
            .execute(&Endpoint::LookupById("1".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::RecordNotFound(id) if id == "1"));
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let fake = Arc::new(FakeTransport::new());
        let client = FetchClient::new(fake.clone(), BASE, None);

        let err = client.execute(&Endpoint::Latest).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingAccessToken(_)));
        assert!(fake.requests().is_empty());
    }
}
