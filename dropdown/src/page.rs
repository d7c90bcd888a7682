//! Binding for the in-memory [`pagedom`] document.

use std::rc::Rc;

use log::{debug, warn};
use pagedom::{ClickEvent, Document, Page, ReadyState};

use crate::config::DropdownConfig;
use crate::dom::{Activation, Dom};
use crate::error::DropdownError;
use crate::registry::Dropdowns;

impl Dom for Document {
    type Node = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.get(id).map(|element| element.id.clone())
    }

    fn next_element_sibling(&self, node: &String) -> Option<String> {
        Document::next_element_sibling(self, node).map(|element| element.id.clone())
    }

    fn contains(&self, ancestor: &String, node: &String) -> bool {
        Document::contains(self, ancestor, node)
    }

    fn has_class(&self, node: &String, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn remove_class(&mut self, node: &String, class: &str) {
        Document::remove_class(self, node, class);
    }

    fn toggle_class(&mut self, node: &String, class: &str) -> bool {
        Document::toggle_class(self, node, class)
    }

    fn elements_with_classes(&self, classes: &[&str]) -> Vec<String> {
        self.query_class_all(classes)
    }
}

impl Activation for ClickEvent {
    fn prevent_default(&mut self) {
        ClickEvent::prevent_default(self);
    }

    fn stop_propagation(&mut self) {
        ClickEvent::stop_propagation(self);
    }
}

/// Install dropdown behavior on a page.
///
/// Controllers are wired when the page's content-loaded phase fires, or
/// right away if it already has. The configuration is validated up front.
pub fn install(page: &mut Page, config: DropdownConfig) -> Result<(), DropdownError> {
    config.validate()?;

    match page.ready_state() {
        ReadyState::Loading => page.on_content_loaded(move |page| wire(page, &config)),
        ReadyState::Complete => wire(page, &config),
    }
    Ok(())
}

fn wire(page: &mut Page, config: &DropdownConfig) {
    let dropdowns = match Dropdowns::install(page.document(), config) {
        Ok(dropdowns) => Rc::new(dropdowns),
        Err(e) => {
            warn!("[dropdown] install failed: {}", e);
            return;
        }
    };

    if dropdowns.is_empty() {
        debug!("[dropdown] no triggers on page, nothing to wire");
        return;
    }

    for (index, controller) in dropdowns.controllers().iter().enumerate() {
        let dropdowns = Rc::clone(&dropdowns);
        page.add_click_listener(controller.trigger_id(), move |event, document| {
            dropdowns.on_trigger_click(index, document, event);
        });
    }

    page.add_document_click_listener(move |event, document| {
        let target = event.target().to_string();
        dropdowns.on_document_click(document, &target);
    });
}
