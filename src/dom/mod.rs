//! DOM wiring for the account settings page.
//!
//! `mount` resolves every node once, builds the [`Invitations`] controller
//! over a [`DomView`], and binds event listeners. Listeners live as long as
//! the page, so their closures are leaked on purpose.

mod browser;
mod handles;
mod view;

pub use browser::BrowserHost;
pub use handles::{DomHandles, MountError};
pub use view::DomView;

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

use crate::config::{Config, Selectors};
use crate::constants::config::ELEMENT_ID;
use crate::debug::{self, cat};
use crate::invitations::{Dialog, Invitations};
use crate::tokens::HttpTokenApi;
use crate::webshim;

pub type PageController = Invitations<DomView, HttpTokenApi>;

/// Read the page's `<script type="application/json" id="registry-web-config">`
/// block. Missing or invalid config falls back to defaults.
pub fn load_config(document: &Document) -> Config {
    let Some(el) = document.get_element_by_id(ELEMENT_ID) else {
        return Config::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[config] {e:#}; using defaults");
            Config::default()
        }
    }
}

/// Wire the settings page. Fails if a required element is missing.
pub fn mount(config: &Config) -> Result<Rc<PageController>, MountError> {
    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| MountError::NoDocument)?;

    let api = HttpTokenApi::from_endpoints(&origin, &config.endpoints)?;
    debug::log(cat::TOKENS, format!("token endpoint {}", api.endpoint()));
    let handles = DomHandles::resolve(&document, &config.selectors)?;

    webshim::foundation_init(&document);

    let view = Rc::new(DomView::new(document, handles, config.selectors.clone()));
    view.refresh_timestamps();

    let controller = Rc::new(Invitations::new(Rc::clone(&view), Rc::new(api), config));
    bind(&controller, &config.selectors);

    log::info!("[dom] settings page controller mounted");
    Ok(controller)
}

fn bind(controller: &Rc<PageController>, selectors: &Selectors) {
    let h = controller.view().handles();

    bind_dialog(
        controller,
        Dialog::Collaborators,
        &h.collaborator_triggers,
        &h.collaborators_submit,
        &h.collaborators_cancel,
    );
    bind_dialog(
        controller,
        Dialog::TransferOwnership,
        &h.owner_triggers,
        &h.owner_submit,
        &h.owner_cancel,
    );

    let c = Rc::clone(controller);
    on(&h.token_input, "keypress", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(pending) = c.key_pressed(&key) {
            spawn(pending);
        }
    });

    if let Some(email) = &h.user_email {
        let c = Rc::clone(controller);
        on(email, "change", move |_| c.user_email_changed());
    }

    // Delegated so items appended after mount are covered too.
    let c = Rc::clone(controller);
    let revoke_sel = selectors.revoke_token.clone();
    let item_sel = selectors.token_item.clone();
    on(&h.tokens_list, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(item) = target
            .closest(&revoke_sel)
            .ok()
            .flatten()
            .and_then(|button| button.closest(&item_sel).ok().flatten())
        else {
            return;
        };
        event.prevent_default();
        let id = item.get_attribute("data-id").unwrap_or_default();
        spawn(c.revoke(id));
    });

    debug::log(
        cat::DOM,
        format!(
            "bound {} collaborator / {} owner triggers",
            h.collaborator_triggers.len(),
            h.owner_triggers.len()
        ),
    );
}

fn bind_dialog(
    controller: &Rc<PageController>,
    dialog: Dialog,
    triggers: &[Element],
    submit: &[Element],
    cancel: &[Element],
) {
    for el in triggers {
        let c = Rc::clone(controller);
        on(el, "click", move |_| c.open(dialog));
    }
    for el in cancel {
        let c = Rc::clone(controller);
        on(el, "click", move |_| c.cancel(dialog));
    }
    for el in submit {
        let c = Rc::clone(controller);
        on(el, "click", move |_| {
            if let Some(pending) = c.submit(dialog) {
                spawn(pending);
            }
        });
    }
}

fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to bind {event}: {e:?}");
    }
    closure.forget();
}

/// Fire and forget; outcomes are logged and rendered by the token layer.
fn spawn<F>(pending: F)
where
    F: Future + 'static,
{
    spawn_local(async move {
        let _ = pending.await;
    });
}
