//! Page lifecycle and click dispatch.
//!
//! A [`Page`] owns the document and every registered listener. Clicks bubble
//! from the target up to the root and finally reach document-level
//! listeners, unless a listener stops propagation on the way.

use std::collections::HashMap;

use log::{debug, trace};

use crate::document::Document;
use crate::event::{ClickEvent, MouseButton};

pub type ClickListener = Box<dyn FnMut(&mut ClickEvent, &mut Document)>;
pub type LoadListener = Box<dyn FnOnce(&mut Page)>;

/// Whether the content-loaded phase has happened yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Markup is still being parsed; content-loaded listeners are pending.
    #[default]
    Loading,
    /// Content-loaded has fired. It never fires again.
    Complete,
}

pub struct Page {
    document: Document,
    ready: ReadyState,
    element_listeners: HashMap<String, Vec<ClickListener>>,
    document_listeners: Vec<ClickListener>,
    load_listeners: Vec<LoadListener>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("ready", &self.ready)
            .field("element_listeners", &self.element_listener_count())
            .field("document_listeners", &self.document_listeners.len())
            .field("load_listeners", &self.load_listeners.len())
            .finish()
    }
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ready: ReadyState::Loading,
            element_listeners: HashMap::new(),
            document_listeners: Vec::new(),
            load_listeners: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready
    }

    /// Run `listener` once the content-loaded phase fires.
    ///
    /// Listeners registered after the phase has fired are dropped, matching
    /// a browser where the event has already gone by. Check
    /// [`Page::ready_state`] first when that matters.
    pub fn on_content_loaded(&mut self, listener: impl FnOnce(&mut Page) + 'static) {
        if self.ready == ReadyState::Complete {
            debug!("[page] content-loaded listener registered after load, ignoring");
            return;
        }
        self.load_listeners.push(Box::new(listener));
    }

    /// Fire the content-loaded phase. Returns false if it already fired.
    pub fn load(&mut self) -> bool {
        if self.ready == ReadyState::Complete {
            return false;
        }
        self.ready = ReadyState::Complete;

        let listeners = std::mem::take(&mut self.load_listeners);
        debug!("[page] content loaded, running {} listeners", listeners.len());
        for listener in listeners {
            listener(self);
        }
        true
    }

    /// Listen for clicks on an element or anything inside it.
    pub fn add_click_listener(
        &mut self,
        id: impl Into<String>,
        listener: impl FnMut(&mut ClickEvent, &mut Document) + 'static,
    ) {
        self.element_listeners
            .entry(id.into())
            .or_default()
            .push(Box::new(listener));
    }

    /// Listen for every click that bubbles up to the document.
    pub fn add_document_click_listener(
        &mut self,
        listener: impl FnMut(&mut ClickEvent, &mut Document) + 'static,
    ) {
        self.document_listeners.push(Box::new(listener));
    }

    pub fn element_listener_count(&self) -> usize {
        self.element_listeners.values().map(Vec::len).sum()
    }

    pub fn document_listener_count(&self) -> usize {
        self.document_listeners.len()
    }

    /// Click the element with the given ID and return the dispatched event.
    pub fn click(&mut self, target: &str) -> ClickEvent {
        self.dispatch(ClickEvent::new(target))
    }

    /// Dispatch a click through the target's ancestors, then the document.
    ///
    /// Only primary-button clicks are dispatched, as only they produce a
    /// `click` in a browser. Clicks on unknown IDs are not dispatched at all.
    pub fn dispatch(&mut self, mut event: ClickEvent) -> ClickEvent {
        if event.button != MouseButton::Left {
            trace!(
                "[page] {:?} button on {} is not a click, not dispatched",
                event.button,
                event.target()
            );
            return event;
        }

        let path = self.document.propagation_path(event.target());
        if path.is_empty() {
            debug!("[page] click on unknown element {}, not dispatched", event.target());
            return event;
        }

        for id in path {
            if let Some(listeners) = self.element_listeners.get_mut(&id) {
                event.set_current_target(Some(id.clone()));
                trace!("[page] click on {} reached {}", event.target(), id);
                for listener in listeners.iter_mut() {
                    listener(&mut event, &mut self.document);
                }
            }
            if event.propagation_stopped() {
                trace!("[page] propagation stopped at {}", id);
                event.set_current_target(None);
                return event;
            }
        }

        event.set_current_target(None);
        for listener in self.document_listeners.iter_mut() {
            listener(&mut event, &mut self.document);
        }
        event
    }
}
