//! Collaborator / ownership dialog controller.
//!
//! Translates page gestures into dialog visibility changes and token
//! submissions. The controller never touches the DOM directly: it drives a
//! view implementing [`DialogView`] and [`TokenListView`], and hands token
//! requests back as futures for the caller to spawn. Nothing waits on them,
//! so overlapping submissions are neither de-duplicated nor ordered.

use std::future::Future;
use std::rc::Rc;

use crate::config::Config;
use crate::debug::{self, cat};
use crate::tokens::{self, RevokeOutcome, SubmitOutcome, TokenApi, TokenListView};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialog {
    /// `#new_collaborator_modal`, also hosts the token-name input
    Collaborators,
    /// `#transfer_owner_modal`
    TransferOwnership,
}

impl Dialog {
    pub fn label(self) -> &'static str {
        match self {
            Dialog::Collaborators => "collaborators",
            Dialog::TransferOwnership => "transfer-ownership",
        }
    }
}

/// Dialog side of the settings page. Open/closed state is owned by the UI
/// framework, so there is nothing to query here.
pub trait DialogView {
    fn open(&self, dialog: Dialog);
    fn close(&self, dialog: Dialog);
    fn focus_input(&self, dialog: Dialog);
    /// Current text of the dialog's input; empty if it has none.
    fn input_value(&self, dialog: Dialog) -> String;
    fn clear_input(&self, dialog: Dialog);
    /// Cosmetic cue on the add-collaborators button; does not enable it.
    fn highlight_add_collaborators(&self);
}

pub struct Invitations<V, A> {
    view: Rc<V>,
    api: Rc<A>,
    submit_buttons_create_token: bool,
}

impl<V, A> Invitations<V, A>
where
    V: DialogView + TokenListView + 'static,
    A: TokenApi + 'static,
{
    pub fn new(view: Rc<V>, api: Rc<A>, config: &Config) -> Self {
        Invitations {
            view,
            api,
            submit_buttons_create_token: config.submit_buttons_create_token,
        }
    }

    pub fn view(&self) -> &Rc<V> {
        &self.view
    }

    /// Trigger button clicked.
    pub fn open(&self, dialog: Dialog) {
        debug::log(cat::DIALOG, format!("open {}", dialog.label()));
        self.view.open(dialog);
        self.view.focus_input(dialog);
    }

    /// Cancel clicked: close and drop whatever was typed.
    pub fn cancel(&self, dialog: Dialog) {
        debug::log(cat::DIALOG, format!("cancel {}", dialog.label()));
        self.view.close(dialog);
        self.view.clear_input(dialog);
    }

    /// Submit button clicked: close, then submit the dialog's input unless
    /// submit buttons are configured close-only. The input is cleared either way.
    pub fn submit(&self, dialog: Dialog) -> Option<impl Future<Output = SubmitOutcome> + 'static> {
        debug::log(cat::DIALOG, format!("submit {}", dialog.label()));
        self.view.close(dialog);
        let pending = self.submit_buttons_create_token.then(|| self.submission(dialog));
        self.view.clear_input(dialog);
        pending
    }

    /// Key pressed inside the token-name input. Enter closes the
    /// collaborators dialog, submits the current name and clears the input.
    pub fn key_pressed(&self, key: &str) -> Option<impl Future<Output = SubmitOutcome> + 'static> {
        if key != "Enter" {
            return None;
        }
        self.view.close(Dialog::Collaborators);
        let pending = self.submission(Dialog::Collaborators);
        self.view.clear_input(Dialog::Collaborators);
        Some(pending)
    }

    /// The `#user_email` field changed.
    pub fn user_email_changed(&self) {
        self.view.highlight_add_collaborators();
    }

    /// Revoke button clicked on the token item with `id`.
    pub fn revoke(&self, id: String) -> impl Future<Output = RevokeOutcome> + 'static {
        let view = Rc::clone(&self.view);
        let api = Rc::clone(&self.api);
        async move { tokens::revoke_token(&*api, &*view, &id).await }
    }

    /// Captures the input text now; the request goes out when polled.
    fn submission(&self, dialog: Dialog) -> impl Future<Output = SubmitOutcome> + 'static {
        let name = self.view.input_value(dialog);
        let view = Rc::clone(&self.view);
        let api = Rc::clone(&self.api);
        async move { tokens::create_token(&*api, &*view, &name).await }
    }
}
