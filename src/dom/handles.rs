use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, NodeList};

use crate::config::Selectors;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no browser window/document available")]
    NoDocument,
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("element {selector} is not an <input>")]
    NotAnInput { selector: String },
    #[error("invalid configuration: {0}")]
    Config(#[from] anyhow::Error),
}

/// Every node the settings page controller touches, resolved once at mount.
///
/// Single nodes the controller cannot work without are required; button
/// sets and the email field may legitimately match nothing.
pub struct DomHandles {
    pub collaborator_triggers: Vec<Element>,
    pub collaborators_modal: Element,
    pub collaborators_submit: Vec<Element>,
    pub collaborators_cancel: Vec<Element>,
    /// Token-name input inside the collaborators modal
    pub token_input: HtmlInputElement,

    pub owner_triggers: Vec<Element>,
    pub owner_modal: Element,
    pub owner_submit: Vec<Element>,
    pub owner_cancel: Vec<Element>,
    pub owner_input: Option<HtmlInputElement>,

    pub token_item_template: Element,
    pub tokens_list: Element,
    pub user_email: Option<Element>,
}

impl DomHandles {
    pub fn resolve(document: &Document, sel: &Selectors) -> Result<Self, MountError> {
        let collaborators_modal = required(
            document.query_selector(&sel.collaborators_modal),
            &sel.collaborators_modal,
        )?;
        let owner_modal = required(document.query_selector(&sel.owner_modal), &sel.owner_modal)?;

        let input_sel = format!("{} {}", sel.collaborators_modal, sel.modal_input);
        let token_input = required(
            collaborators_modal.query_selector(&sel.modal_input),
            &input_sel,
        )?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MountError::NotAnInput { selector: input_sel })?;

        let owner_input = owner_modal
            .query_selector(&sel.modal_input)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        Ok(DomHandles {
            collaborator_triggers: all(document.query_selector_all(&sel.collaborator_triggers)),
            collaborators_submit: all(collaborators_modal.query_selector_all(&sel.modal_submit)),
            collaborators_cancel: all(collaborators_modal.query_selector_all(&sel.modal_cancel)),
            collaborators_modal,
            token_input,

            owner_triggers: all(document.query_selector_all(&sel.owner_triggers)),
            owner_submit: all(owner_modal.query_selector_all(&sel.modal_submit)),
            owner_cancel: all(owner_modal.query_selector_all(&sel.modal_cancel)),
            owner_modal,
            owner_input,

            token_item_template: required(
                document.query_selector(&sel.token_item_template),
                &sel.token_item_template,
            )?,
            tokens_list: required(document.query_selector(&sel.tokens_list), &sel.tokens_list)?,
            user_email: document.query_selector(&sel.user_email).ok().flatten(),
        })
    }
}

fn required(
    found: Result<Option<Element>, wasm_bindgen::JsValue>,
    selector: &str,
) -> Result<Element, MountError> {
    match found {
        Ok(Some(el)) => Ok(el),
        Ok(None) | Err(_) => Err(MountError::MissingElement {
            selector: selector.to_string(),
        }),
    }
}

/// Collect a query result into elements. A selector that fails to parse
/// behaves like one that matches nothing.
pub(crate) fn all(found: Result<NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(list) = found else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
