//! API token creation and revocation.
//!
//! The request/response handling is independent of the DOM: [`create_token`]
//! and [`revoke_token`] talk to a [`TokenApi`] and report results through a
//! [`TokenListView`], so both can be exercised natively with fakes.

use std::sync::OnceLock;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::{resolve_endpoint, Endpoints};
use crate::debug::{self, cat};

/// A freshly created token as returned by `PUT /api/v1/tokens`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    /// Plaintext secret, only ever shown once
    pub token: String,
}

/// Servers may send numeric or string ids; both render the same.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "token id must be a string or number, got {other}"
        ))),
    }
}

/// A token name the user actually typed. Empty input is not a name;
/// whitespace is passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenName(String);

impl TokenName {
    pub fn parse(raw: &str) -> Option<TokenName> {
        if raw.is_empty() {
            None
        } else {
            Some(TokenName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize)]
struct CreateTokenRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Error)]
pub enum TokenApiError {
    #[error("server rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid token response: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl TokenApiError {
    /// Text shown in the page's error region: the raw response body when the
    /// server answered, the error message otherwise.
    pub fn display_text(&self) -> String {
        match self {
            TokenApiError::Rejected { body, .. } | TokenApiError::Decode { body, .. } => {
                body.clone()
            }
            TokenApiError::Transport(e) => e.to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait TokenApi {
    async fn create_token(&self, name: &TokenName) -> Result<Token, TokenApiError>;
    async fn revoke_token(&self, id: &str) -> Result<(), TokenApiError>;
}

/// Page-side rendering of token results.
pub trait TokenListView {
    /// Drop the "no tokens yet" placeholder, if present.
    fn remove_empty_placeholder(&self);
    fn append_token(&self, token: &Token);
    fn remove_token(&self, id: &str);
    fn show_error(&self, text: &str);
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Empty name; nothing was sent.
    Skipped,
    Created(Token),
    Failed(TokenApiError),
}

#[derive(Debug)]
pub enum RevokeOutcome {
    /// Item without an id; nothing was sent.
    Skipped,
    Revoked,
    Failed(TokenApiError),
}

/// Create a token named `raw_name` and render the result.
///
/// On success the empty-state placeholder is removed and the token appended;
/// on failure the error region gets the raw response text. Nothing is retried
/// and a previous error is left in place after a later success.
pub async fn create_token<A, V>(api: &A, view: &V, raw_name: &str) -> SubmitOutcome
where
    A: TokenApi + ?Sized,
    V: TokenListView + ?Sized,
{
    let Some(name) = TokenName::parse(raw_name) else {
        debug::log(cat::TOKENS, "empty token name; not submitting");
        return SubmitOutcome::Skipped;
    };

    debug::log(cat::TOKENS, format!("creating token {:?}", name.as_str()));
    match api.create_token(&name).await {
        Ok(token) => {
            log::info!("[tokens] created token {} ({})", token.name, token.id);
            view.remove_empty_placeholder();
            view.append_token(&token);
            SubmitOutcome::Created(token)
        }
        Err(e) => {
            log::warn!("[tokens] create failed: {e}");
            view.show_error(&e.display_text());
            SubmitOutcome::Failed(e)
        }
    }
}

/// Revoke the token with `id` and drop its list item.
pub async fn revoke_token<A, V>(api: &A, view: &V, id: &str) -> RevokeOutcome
where
    A: TokenApi + ?Sized,
    V: TokenListView + ?Sized,
{
    if id.is_empty() {
        debug::log(cat::TOKENS, "token item has no id; not revoking");
        return RevokeOutcome::Skipped;
    }

    match api.revoke_token(id).await {
        Ok(()) => {
            log::info!("[tokens] revoked token {id}");
            view.remove_token(id);
            RevokeOutcome::Revoked
        }
        Err(e) => {
            log::warn!("[tokens] revoke of {id} failed: {e}");
            view.show_error(&e.display_text());
            RevokeOutcome::Failed(e)
        }
    }
}

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

pub(crate) fn http_client() -> &'static reqwest::Client {
    HTTP.get_or_init(reqwest::Client::new)
}

/// [`TokenApi`] over HTTP against the registry server.
#[derive(Clone, Debug)]
pub struct HttpTokenApi {
    endpoint: Url,
}

impl HttpTokenApi {
    pub fn new(endpoint: Url) -> Self {
        HttpTokenApi { endpoint }
    }

    /// Build from configured endpoints, resolving relative paths against
    /// the page origin.
    pub fn from_endpoints(origin: &str, endpoints: &Endpoints) -> anyhow::Result<Self> {
        Ok(HttpTokenApi::new(resolve_endpoint(origin, &endpoints.tokens)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn token_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            urlencoding::encode(id)
        )
    }
}

#[async_trait(?Send)]
impl TokenApi for HttpTokenApi {
    async fn create_token(&self, name: &TokenName) -> Result<Token, TokenApiError> {
        let res = http_client()
            .put(self.endpoint.clone())
            .json(&CreateTokenRequest {
                name: name.as_str(),
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug::log(cat::TOKENS, format!("PUT {} -> {status}", self.endpoint));
        if !status.is_success() {
            return Err(TokenApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|source| TokenApiError::Decode { body, source })
    }

    async fn revoke_token(&self, id: &str) -> Result<(), TokenApiError> {
        let url = self.token_url(id);
        let res = http_client().delete(&url).send().await?;

        let status = res.status();
        debug::log(cat::TOKENS, format!("DELETE {url} -> {status}"));
        if status.is_success() {
            Ok(())
        } else {
            let body = res.text().await?;
            Err(TokenApiError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_not_a_name() {
        assert!(TokenName::parse("").is_none());
        assert_eq!(TokenName::parse(" ").unwrap().as_str(), " ");
        assert_eq!(TokenName::parse("ci-key").unwrap().as_str(), "ci-key");
    }

    #[test]
    fn token_id_accepts_numbers_and_strings() {
        let t: Token =
            serde_json::from_str(r#"{"id": 42, "name": "ci", "token": "s3cr3t", "created_at": "x"}"#)
                .unwrap();
        assert_eq!(t.id, "42");

        let t: Token =
            serde_json::from_str(r#"{"id": "t1", "name": "ci-key", "token": "abc123"}"#).unwrap();
        assert_eq!(t.id, "t1");
        assert_eq!(t.name, "ci-key");
        assert_eq!(t.token, "abc123");

        assert!(serde_json::from_str::<Token>(r#"{"id": null, "name": "a", "token": "b"}"#).is_err());
    }

    #[test]
    fn request_body_is_name_only() {
        let body = serde_json::to_value(CreateTokenRequest { name: "ci-key" }).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "ci-key" }));
    }

    #[test]
    fn rejected_error_shows_raw_body() {
        let e = TokenApiError::Rejected {
            status: 409,
            body: "name already exists".into(),
        };
        assert_eq!(e.display_text(), "name already exists");
    }

    #[test]
    fn token_url_appends_encoded_id() {
        let api = HttpTokenApi::new(Url::parse("https://r.example/api/v1/tokens").unwrap());
        assert_eq!(api.token_url("t1"), "https://r.example/api/v1/tokens/t1");
        assert_eq!(api.token_url("a/b"), "https://r.example/api/v1/tokens/a%2Fb");
    }
}
