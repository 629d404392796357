use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::handles::{all, DomHandles};
use crate::config::Selectors;
use crate::constants::style::HIGHLIGHT_BACKGROUND;
use crate::debug::{self, cat};
use crate::invitations::{Dialog, DialogView};
use crate::timeago;
use crate::tokens::{Token, TokenListView};
use crate::webshim;

/// [`DialogView`] + [`TokenListView`] over the live settings page.
pub struct DomView {
    document: Document,
    handles: DomHandles,
    selectors: Selectors,
}

impl DomView {
    pub fn new(document: Document, handles: DomHandles, selectors: Selectors) -> Self {
        DomView {
            document,
            handles,
            selectors,
        }
    }

    pub fn handles(&self) -> &DomHandles {
        &self.handles
    }

    fn modal(&self, dialog: Dialog) -> &Element {
        match dialog {
            Dialog::Collaborators => &self.handles.collaborators_modal,
            Dialog::TransferOwnership => &self.handles.owner_modal,
        }
    }

    fn input(&self, dialog: Dialog) -> Option<&HtmlInputElement> {
        match dialog {
            Dialog::Collaborators => Some(&self.handles.token_input),
            Dialog::TransferOwnership => self.handles.owner_input.as_ref(),
        }
    }

    /// Rewrite every `.token-created-at` label relative to now.
    pub fn refresh_timestamps(&self) {
        let now = chrono::Utc::now();
        for el in all(self.document.query_selector_all(&self.selectors.token_created_at)) {
            let raw = el
                .get_attribute("datetime")
                .or_else(|| el.get_attribute("title"));
            match raw.as_deref().and_then(timeago::parse_timestamp) {
                Some(then) => el.set_text_content(Some(&timeago::format_relative(then, now))),
                None => debug::log(cat::DOM, format!("unparseable timestamp {raw:?}")),
            }
        }
    }

    fn build_token_item(&self, token: &Token) -> Option<Element> {
        let item = self
            .handles
            .token_item_template
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<Element>()
            .ok()?;
        if let Err(e) = item.set_attribute("data-id", &token.id) {
            log::warn!("[dom] failed to set data-id: {e:?}");
        }
        for el in all(item.query_selector_all(&self.selectors.token_name)) {
            el.set_text_content(Some(&token.name));
        }
        for el in all(item.query_selector_all(&self.selectors.token_plaintext)) {
            el.set_text_content(Some(&token.token));
        }
        Some(item)
    }
}

impl DialogView for DomView {
    fn open(&self, dialog: Dialog) {
        webshim::foundation_open(self.modal(dialog));
    }

    fn close(&self, dialog: Dialog) {
        webshim::foundation_close(self.modal(dialog));
    }

    fn focus_input(&self, dialog: Dialog) {
        if let Some(input) = self.input(dialog) {
            let _ = input.focus();
        }
    }

    fn input_value(&self, dialog: Dialog) -> String {
        self.input(dialog).map(HtmlInputElement::value).unwrap_or_default()
    }

    fn clear_input(&self, dialog: Dialog) {
        if let Some(input) = self.input(dialog) {
            input.set_value("");
        }
    }

    fn highlight_add_collaborators(&self) {
        for el in all(
            self.document
                .query_selector_all(&self.selectors.add_collaborators_button),
        ) {
            if let Some(el) = el.dyn_ref::<HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("background-color", HIGHLIGHT_BACKGROUND);
            }
        }
    }
}

impl TokenListView for DomView {
    fn remove_empty_placeholder(&self) {
        for el in all(self.document.query_selector_all(&self.selectors.no_tokens)) {
            el.remove();
        }
    }

    fn append_token(&self, token: &Token) {
        let Some(item) = self.build_token_item(token) else {
            log::error!("[dom] could not clone token item template");
            return;
        };
        if let Err(e) = self.handles.tokens_list.append_child(&item) {
            log::error!("[dom] failed to append token item: {e:?}");
        }
    }

    fn remove_token(&self, id: &str) {
        for el in all(self.handles.tokens_list.query_selector_all(&self.selectors.token_item)) {
            if el.get_attribute("data-id").as_deref() == Some(id) {
                el.remove();
            }
        }
    }

    fn show_error(&self, text: &str) {
        for el in all(self.document.query_selector_all(&self.selectors.tokens_error)) {
            el.set_text_content(Some(text));
        }
    }
}
