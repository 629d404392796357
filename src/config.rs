use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{endpoints, selectors};

/// Selector contract with the server-rendered settings page.
///
/// Selectors marked "scoped" in [`crate::constants::selectors`] are looked up
/// inside their modal or token item, everything else document-wide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub collaborator_triggers: String,
    pub collaborators_modal: String,
    pub owner_triggers: String,
    pub owner_modal: String,
    pub modal_input: String,
    pub modal_submit: String,
    pub modal_cancel: String,
    pub token_item_template: String,
    pub tokens_list: String,
    pub no_tokens: String,
    pub tokens_error: String,
    pub token_item: String,
    pub token_name: String,
    pub token_plaintext: String,
    pub revoke_token: String,
    pub token_created_at: String,
    pub user_email: String,
    pub add_collaborators_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            collaborator_triggers: selectors::COLLABORATOR_TRIGGERS.to_string(),
            collaborators_modal: selectors::COLLABORATORS_MODAL.to_string(),
            owner_triggers: selectors::OWNER_TRIGGERS.to_string(),
            owner_modal: selectors::OWNER_MODAL.to_string(),
            modal_input: selectors::MODAL_INPUT.to_string(),
            modal_submit: selectors::MODAL_SUBMIT.to_string(),
            modal_cancel: selectors::MODAL_CANCEL.to_string(),
            token_item_template: selectors::TOKEN_ITEM_TEMPLATE.to_string(),
            tokens_list: selectors::TOKENS_LIST.to_string(),
            no_tokens: selectors::NO_TOKENS.to_string(),
            tokens_error: selectors::TOKENS_ERROR.to_string(),
            token_item: selectors::TOKEN_ITEM.to_string(),
            token_name: selectors::TOKEN_NAME.to_string(),
            token_plaintext: selectors::TOKEN_PLAINTEXT.to_string(),
            revoke_token: selectors::REVOKE_TOKEN.to_string(),
            token_created_at: selectors::TOKEN_CREATED_AT.to_string(),
            user_email: selectors::USER_EMAIL.to_string(),
            add_collaborators_button: selectors::ADD_COLLABORATORS_BUTTON.to_string(),
        }
    }
}

impl Selectors {
    fn named(&self) -> [(&'static str, &str); 18] {
        [
            ("collaborator_triggers", self.collaborator_triggers.as_str()),
            ("collaborators_modal", self.collaborators_modal.as_str()),
            ("owner_triggers", self.owner_triggers.as_str()),
            ("owner_modal", self.owner_modal.as_str()),
            ("modal_input", self.modal_input.as_str()),
            ("modal_submit", self.modal_submit.as_str()),
            ("modal_cancel", self.modal_cancel.as_str()),
            ("token_item_template", self.token_item_template.as_str()),
            ("tokens_list", self.tokens_list.as_str()),
            ("no_tokens", self.no_tokens.as_str()),
            ("tokens_error", self.tokens_error.as_str()),
            ("token_item", self.token_item.as_str()),
            ("token_name", self.token_name.as_str()),
            ("token_plaintext", self.token_plaintext.as_str()),
            ("revoke_token", self.revoke_token.as_str()),
            ("token_created_at", self.token_created_at.as_str()),
            ("user_email", self.user_email.as_str()),
            ("add_collaborators_button", self.add_collaborators_button.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub tokens: String,
    pub google_callback: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            tokens: endpoints::TOKENS.to_string(),
            google_callback: endpoints::GOOGLE_CALLBACK.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: Selectors,
    pub endpoints: Endpoints,
    /// Dialog submit buttons run the same token creation as Enter.
    /// `false` makes them close-only.
    pub submit_buttons_create_token: bool,
    /// Percent-encode the display name in the sign-in redirect
    pub encode_callback_name: bool,
    /// Debug categories, same syntax as `?rwdebug=`
    pub debug: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            selectors: Selectors::default(),
            endpoints: Endpoints::default(),
            submit_buttons_create_token: true,
            encode_callback_name: true,
            debug: None,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Config> {
        let config: Config =
            serde_json::from_str(raw).context("registry-web config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.endpoints.tokens, "endpoints.tokens")?;
        validate_endpoint(&self.endpoints.google_callback, "endpoints.google_callback")?;
        for (name, selector) in self.selectors.named() {
            validate_selector(selector, name)?;
        }
        Ok(())
    }

    /// Log current configuration (useful for debugging)
    pub fn print_summary(&self) {
        log::info!("registry-web configuration:");
        log::info!("  Tokens endpoint: {}", self.endpoints.tokens);
        log::info!("  Sign-in callback: {}", self.endpoints.google_callback);
        log::info!(
            "  Submit buttons create token: {}",
            self.submit_buttons_create_token
        );
        log::info!("  Encode callback name: {}", self.encode_callback_name);
        if let Some(debug) = &self.debug {
            log::info!("  Debug categories: {debug}");
        }
    }
}

/// Endpoints are either absolute http(s) URLs or paths on the page origin.
fn validate_endpoint(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with /, http:// or https://"))
    }
}

fn validate_selector(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(anyhow!("selectors.{name} cannot be empty"))
    } else {
        Ok(())
    }
}

/// Resolve an endpoint against the page origin (`https://host:port`).
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> Result<Url> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return Url::parse(endpoint).with_context(|| format!("invalid endpoint {endpoint}"));
    }
    let base = Url::parse(origin).with_context(|| format!("invalid page origin {origin}"))?;
    base.join(endpoint)
        .with_context(|| format!("cannot join {endpoint} onto {origin}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "encode_callback_name": false }"#).unwrap();
        assert!(!config.encode_callback_name);
        assert!(config.submit_buttons_create_token);
        assert_eq!(config.endpoints.tokens, "/api/v1/tokens");
        assert_eq!(config.selectors.tokens_list, ".tokens-list");
    }

    #[test]
    fn nested_overrides_apply() {
        let config = Config::from_json(
            r##"{ "selectors": { "tokens_list": "#my-tokens" }, "endpoints": { "tokens": "/api/v2/tokens" } }"##,
        )
        .unwrap();
        assert_eq!(config.selectors.tokens_list, "#my-tokens");
        assert_eq!(config.selectors.no_tokens, ".no-tokens");
        assert_eq!(config.endpoints.tokens, "/api/v2/tokens");
        assert_eq!(config.endpoints.google_callback, "/accounts/google/callback");
    }

    #[test]
    fn rejects_relative_endpoint_without_slash() {
        let err = Config::from_json(r#"{ "endpoints": { "tokens": "api/v1/tokens" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("endpoints.tokens"));
    }

    #[test]
    fn rejects_blank_selector() {
        let err = Config::from_json(r#"{ "selectors": { "tokens_error": "  " } }"#).unwrap_err();
        assert!(err.to_string().contains("selectors.tokens_error"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn resolves_paths_against_origin() {
        let url = resolve_endpoint("https://crates.example.org", "/api/v1/tokens").unwrap();
        assert_eq!(url.as_str(), "https://crates.example.org/api/v1/tokens");

        let url = resolve_endpoint("http://127.0.0.1:8080", "/api/v1/tokens").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/tokens");
    }

    #[test]
    fn absolute_endpoint_ignores_origin() {
        let url = resolve_endpoint("https://a.example", "https://api.example/v1/tokens").unwrap();
        assert_eq!(url.as_str(), "https://api.example/v1/tokens");
    }
}
