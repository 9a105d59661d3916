//! Rollcall - live search for the member directory page
//!
//! Browser entry point. Binds the page's search input, cards and fallback
//! media to a [`rollcall_core::Engine`].
//!
//! ## Usage
//!
//! ```js
//! import init, { attach } from "./pkg/rollcall.js";
//!
//! await init();
//! // Defaults bind #inputSearch, .purdoobah-card and .archives-incomplete
//! attach().forget();
//!
//! // Or override selectors and logging
//! const search = attach(JSON.stringify({ card_class: "purdoobahCard", log_filter: "debug" }));
//! ```

mod console;
mod context;
pub mod dom;

use gloo::events::EventListener;
use rollcall_core::{Engine, SelectorConfig};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use context::SharedEngine;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// An attached directory search.
///
/// Dropping the handle (or calling `free()` from JS) removes the input
/// listener; call `forget()` to keep it for the page's lifetime.
#[wasm_bindgen]
pub struct DirectorySearch {
    engine: SharedEngine,
    listener: Option<EventListener>,
}

#[wasm_bindgen]
impl DirectorySearch {
    /// Run one pass for `term` and return the number of hidden cards.
    pub fn search(&self, term: &str) -> usize {
        self.engine.borrow_mut().on_input(term).hidden
    }

    #[wasm_bindgen(getter, js_name = cardCount)]
    pub fn card_count(&self) -> usize {
        self.engine.borrow().card_count()
    }

    /// False when the page has no search input to listen on.
    #[wasm_bindgen(getter, js_name = isListening)]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Leave the listener attached without keeping this handle alive.
    pub fn forget(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }
}

/// Attach to the current document.
///
/// `config` is an optional JSON [`SelectorConfig`]. Fails on invalid
/// configuration or malformed card data; a missing search input only leaves
/// the search inert.
#[wasm_bindgen]
pub fn attach(config: Option<String>) -> Result<DirectorySearch, JsError> {
    let config = SelectorConfig::from_optional_json(config.as_deref())?;
    console::init(&config.log_filter);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsError::new("no document to attach to"))?;

    let cards = dom::card_elements(&document, &config.card_class);
    let media = dom::fallback_media(&document, &config.indicator_class);
    let engine = context::share(Engine::attach(cards, media, &config.data_keys)?);

    let listener = document
        .get_element_by_id(&config.search_input_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| listen(&input, engine.clone()));

    if listener.is_none() {
        debug!(
            id = %config.search_input_id,
            "Search input not found; directory search is inert"
        );
    }

    Ok(DirectorySearch { engine, listener })
}

fn listen(input: &HtmlInputElement, engine: SharedEngine) -> EventListener {
    let source = input.clone();
    EventListener::new(input, "input", move |_event| {
        engine.borrow_mut().on_input(&source.value());
    })
}
