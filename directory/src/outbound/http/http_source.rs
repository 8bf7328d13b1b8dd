//! Reqwest-backed user source adapter.
//!
//! This adapter owns transport details only: the GET request, optional
//! timeout, HTTP error mapping, and JSON decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::decode_users;
use crate::domain::User;
use crate::domain::ports::{UserSource, UserSourceError};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "user-directory/0.1";

/// Outbound identity and timeout settings for user list requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUserSourceOptions {
    /// HTTP user-agent sent to the source.
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for HttpUserSourceOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }
}

/// User source adapter that issues one HTTP GET per fetch against one endpoint.
pub struct HttpUserSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl HttpUserSource {
    /// Build an adapter with default identity and no explicit timeout.
    /// ```rust,ignore
    /// let source = HttpUserSource::new(endpoint);
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_options(endpoint, HttpUserSourceOptions::default())
    }

    /// Build an adapter with explicit identity and timeout.
    /// ```rust,ignore
    /// let source = HttpUserSource::with_options(endpoint, options);
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_options(
        endpoint: Url,
        options: HttpUserSourceOptions,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
            user_agent: options.user_agent,
        })
    }

    /// Endpoint this adapter fetches from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, UserSourceError> {
        let endpoint = self.endpoint();
        debug!(%endpoint, "fetching user list");
        let response = self
            .client
            .get(endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error))?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "user list response received"
        );
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserSourceError> {
    decode_users(body)
        .map_err(|error| UserSourceError::decode(format!("invalid user list JSON: {error}")))
}

fn map_transport_error(error: &reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    UserSourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    const TWO_USERS: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "address": { "city": "Wisokyburgh" },
            "company": { "name": "Deckow-Crist" }
        }
    ]"#;

    const MISSING_CITY: &str = r#"[{
        "id": 1, "name": "A", "username": "a", "address": {}, "company": {"name": "C"}
    }]"#;

    const STRING_ID: &str = r#"[{
        "id": "1", "name": "A", "username": "a", "address": {"city": "X"}, "company": {"name": "C"}
    }]"#;

    #[test]
    fn parses_user_list_into_domain_records() {
        let users = parse_users(TWO_USERS.as_bytes()).expect("JSON should decode");

        assert_eq!(users.len(), 2, "two users should be decoded");
        assert_eq!(users[0].name(), "Leanne Graham");
        assert_eq!(
            users[0].company().catch_phrase,
            "Multi-layered client-server neural-net"
        );
        assert_eq!(users[0].address().zipcode, "92998-3874");
        assert_eq!(users[0].contact().website, "hildegard.org");
        assert_eq!(users[1].city(), "Wisokyburgh");
        assert!(
            users[1].contact().email.is_empty(),
            "missing email defaults to empty"
        );
    }

    #[rstest]
    #[case::not_an_array(r#"{"users": []}"#)]
    #[case::missing_city(MISSING_CITY)]
    #[case::string_id(STRING_ID)]
    #[case::truncated("[{")]
    fn rejects_bodies_that_are_not_user_lists(#[case] body: &str) {
        let error = parse_users(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, UserSourceError::Decode { .. }),
            "malformed bodies should map to Decode errors",
        );
    }

    #[test]
    fn null_optional_fields_decode_as_empty_strings() {
        let body = br#"[{
            "id": 1,
            "name": "A",
            "username": "a",
            "email": null,
            "phone": null,
            "website": null,
            "address": { "street": null, "suite": null, "city": "X", "zipcode": null },
            "company": { "name": "C", "catchPhrase": null, "bs": null }
        }]"#;

        let users = parse_users(body).expect("null optionals should decode");

        let user = users.first().expect("one user");
        assert_eq!(user.city(), "X");
        assert_eq!(user.company_name(), "C");
        assert_eq!(user.contact(), &crate::domain::Contact::default());
        assert!(user.address().street.is_empty());
        assert!(user.address().zipcode.is_empty());
        assert!(user.company().catch_phrase.is_empty());
        assert!(user.company().bs.is_empty());
    }

    #[test]
    fn null_required_field_is_rejected() {
        let body = br#"[{
            "id": 1,
            "name": "A",
            "username": "a",
            "address": { "city": null },
            "company": { "name": "C" }
        }]"#;
        let error = parse_users(body).expect_err("null city should fail");
        assert!(matches!(error, UserSourceError::Decode { .. }));
    }

    #[test]
    fn adapter_keeps_its_endpoint() {
        let endpoint = Url::parse("http://127.0.0.1:9/users").expect("endpoint URL");
        let source = HttpUserSource::new(endpoint.clone()).expect("build source");
        assert_eq!(source.endpoint(), &endpoint);
    }

    #[test]
    fn empty_array_decodes_to_no_users() {
        let users = parse_users(b"[]").expect("empty list");
        assert!(users.is_empty());
    }

    #[rstest]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::not_found(StatusCode::NOT_FOUND)]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS)]
    fn maps_non_success_statuses_to_status_errors(#[case] status: StatusCode) {
        let error = map_status_error(status, b"{\"error\": \"backend unavailable\"}");
        match error {
            UserSourceError::Status {
                status: code,
                message,
            } => {
                assert_eq!(code, status.as_u16());
                assert!(
                    message.contains("backend unavailable"),
                    "preview kept: {message}"
                );
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn status_message_omits_empty_body() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"  \n ");
        assert_eq!(error.to_string(), "failed to fetch users: status 500");
    }

    #[test]
    fn body_preview_compacts_and_truncates() {
        let long = "word ".repeat(100);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
        assert_eq!(body_preview(b"a\n\n  b"), "a b");
    }
}
