//! Browser binding over `web-sys`.
//!
//! Reads an optional JSON configuration from
//! `<script type="application/json" id="dropdown-config">` and installs the
//! controllers once the document has been parsed. Listeners stay registered
//! for the life of the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::config::DropdownConfig;
use crate::dom::{Activation, Dom};
use crate::error::DropdownError;
use crate::registry::Dropdowns;

/// ID of the script element holding the page's JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "dropdown-config";

/// A browser document seen through [`Dom`].
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn next_element_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            log::warn!("[dropdown] removing class {} failed: {:?}", class, e);
        }
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or_else(|e| {
            log::warn!("[dropdown] toggling class {} failed: {:?}", class, e);
            false
        })
    }

    fn elements_with_classes(&self, classes: &[&str]) -> Vec<Element> {
        // Snapshot the live collection before callers mutate classes
        let collection = self.document.get_elements_by_class_name(&classes.join(" "));
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }
}

impl Activation for Event {
    fn prevent_default(&mut self) {
        Event::prevent_default(self);
    }

    fn stop_propagation(&mut self) {
        Event::stop_propagation(self);
    }
}

fn js_error(value: JsValue) -> DropdownError {
    DropdownError::Js(format!("{value:?}"))
}

fn document() -> Result<Document, DropdownError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DropdownError::Js("no document available".to_string()))
}

/// Read the page's configuration element, falling back to the default.
pub fn page_config(document: &Document) -> Result<DropdownConfig, DropdownError> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    DropdownConfig::from_page_text(text.as_deref())
}

/// Install the controllers now if the document is parsed, otherwise on
/// `DOMContentLoaded`.
pub fn install(config: DropdownConfig) -> Result<(), DropdownError> {
    config.validate()?;
    let document = document()?;

    if document.ready_state() != "loading" {
        return wire(&document, &config);
    }

    let loaded_document = document.clone();
    let listener = Closure::once_into_js(move |_: Event| {
        if let Err(e) = wire(&loaded_document, &config) {
            report(&e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        .map_err(js_error)
}

fn wire(document: &Document, config: &DropdownConfig) -> Result<(), DropdownError> {
    let dropdowns = Rc::new(Dropdowns::install(&WebDom::new(document.clone()), config)?);
    if dropdowns.is_empty() {
        return Ok(());
    }

    for (index, controller) in dropdowns.controllers().iter().enumerate() {
        let dropdowns = Rc::clone(&dropdowns);
        let mut dom = WebDom::new(document.clone());
        let listener = Closure::<dyn FnMut(Event)>::new(move |mut event: Event| {
            dropdowns.on_trigger_click(index, &mut dom, &mut event);
        });
        controller
            .trigger()
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        listener.forget();
    }

    let mut dom = WebDom::new(document.clone());
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        dropdowns.on_document_click(&mut dom, &target);
    });
    document
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(js_error)?;
    listener.forget();

    Ok(())
}

fn report(error: &DropdownError) {
    web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
}

/// Module entry point: install from the page's configuration.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let result = document()
        .and_then(|document| page_config(&document))
        .and_then(install);
    if let Err(e) = result {
        report(&e);
    }
}
