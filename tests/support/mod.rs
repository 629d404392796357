//! In-memory stand-ins for the settings page and the token API.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use registry_web::{Dialog, DialogView, Token, TokenApi, TokenApiError, TokenListView, TokenName};

#[derive(Default)]
pub struct FakePage {
    /// Token-name input of the collaborators dialog
    pub input: RefCell<String>,
    pub owner_input: RefCell<String>,
    /// Ordered record of every view call
    pub events: RefCell<Vec<String>>,
    pub items: RefCell<Vec<Token>>,
    pub placeholder: RefCell<bool>,
    pub error: RefCell<Option<String>>,
}

impl FakePage {
    pub fn with_placeholder() -> Self {
        FakePage {
            placeholder: RefCell::new(true),
            ..FakePage::default()
        }
    }

    pub fn type_input(&self, text: &str) {
        self.type_into(Dialog::Collaborators, text);
    }

    pub fn type_into(&self, dialog: Dialog, text: &str) {
        *self.field(dialog).borrow_mut() = text.to_string();
    }

    pub fn field(&self, dialog: Dialog) -> &RefCell<String> {
        match dialog {
            Dialog::Collaborators => &self.input,
            Dialog::TransferOwnership => &self.owner_input,
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: impl Into<String>) {
        self.events.borrow_mut().push(event.into());
    }
}

impl DialogView for FakePage {
    fn open(&self, dialog: Dialog) {
        self.record(format!("open:{}", dialog.label()));
    }

    fn close(&self, dialog: Dialog) {
        self.record(format!("close:{}", dialog.label()));
    }

    fn focus_input(&self, dialog: Dialog) {
        self.record(format!("focus:{}", dialog.label()));
    }

    fn input_value(&self, dialog: Dialog) -> String {
        self.record(format!("read-input:{}", dialog.label()));
        self.field(dialog).borrow().clone()
    }

    fn clear_input(&self, dialog: Dialog) {
        self.record(format!("clear-input:{}", dialog.label()));
        self.field(dialog).borrow_mut().clear();
    }

    fn highlight_add_collaborators(&self) {
        self.record("highlight");
    }
}

impl TokenListView for FakePage {
    fn remove_empty_placeholder(&self) {
        self.record("remove-placeholder");
        *self.placeholder.borrow_mut() = false;
    }

    fn append_token(&self, token: &Token) {
        self.record(format!("append:{}", token.id));
        self.items.borrow_mut().push(token.clone());
    }

    fn remove_token(&self, id: &str) {
        self.record(format!("remove:{id}"));
        self.items.borrow_mut().retain(|t| t.id != id);
    }

    fn show_error(&self, text: &str) {
        self.record("error");
        *self.error.borrow_mut() = Some(text.to_string());
    }
}

/// Answers create requests from a queue; an empty queue echoes the name back.
#[derive(Default)]
pub struct FakeApi {
    pub created: RefCell<Vec<String>>,
    pub revoked: RefCell<Vec<String>>,
    pub responses: RefCell<VecDeque<Result<Token, TokenApiError>>>,
    pub revoke_error: RefCell<Option<TokenApiError>>,
}

impl FakeApi {
    pub fn answering(response: Result<Token, TokenApiError>) -> Self {
        let api = FakeApi::default();
        api.responses.borrow_mut().push_back(response);
        api
    }

    pub fn created(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TokenApi for FakeApi {
    async fn create_token(&self, name: &TokenName) -> Result<Token, TokenApiError> {
        self.created.borrow_mut().push(name.as_str().to_string());
        let next = self.responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(token(&format!("id-{}", name.as_str()), name.as_str(), "secret")))
    }

    async fn revoke_token(&self, id: &str) -> Result<(), TokenApiError> {
        self.revoked.borrow_mut().push(id.to_string());
        match self.revoke_error.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub fn token(id: &str, name: &str, secret: &str) -> Token {
    Token {
        id: id.to_string(),
        name: name.to_string(),
        token: secret.to_string(),
    }
}

pub fn rejected(status: u16, body: &str) -> TokenApiError {
    TokenApiError::Rejected {
        status,
        body: body.to_string(),
    }
}
