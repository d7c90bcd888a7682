use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{ClickEvent, Document, Element, MouseButton, Page, ReadyState};

fn page() -> Page {
    Page::new(Document::body([Element::div()
        .id("outer")
        .child(Element::button().id("inner").text("Click"))]))
}

fn recorder() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Bubbling
// ============================================================================

#[test]
fn test_click_bubbles_to_document() {
    let mut page = page();
    let log = recorder();

    for id in ["inner", "outer", "body"] {
        let log = Rc::clone(&log);
        page.add_click_listener(id, move |event, _| {
            log.borrow_mut()
                .push(event.current_target().unwrap_or_default().to_string());
        });
    }
    let doc_log = Rc::clone(&log);
    page.add_document_click_listener(move |event, _| {
        assert_eq!(event.current_target(), None);
        doc_log.borrow_mut().push(format!("document:{}", event.target()));
    });

    page.click("inner");
    assert_eq!(
        *log.borrow(),
        vec!["inner", "outer", "body", "document:inner"]
    );
}

#[test]
fn test_stop_propagation_skips_ancestors_and_document() {
    let mut page = page();
    let log = recorder();

    let inner_log = Rc::clone(&log);
    page.add_click_listener("inner", move |event, _| {
        event.stop_propagation();
        inner_log.borrow_mut().push("inner-1".to_string());
    });
    // Listeners on the same element still run
    let inner_log = Rc::clone(&log);
    page.add_click_listener("inner", move |_, _| {
        inner_log.borrow_mut().push("inner-2".to_string());
    });
    let outer_log = Rc::clone(&log);
    page.add_click_listener("outer", move |_, _| {
        outer_log.borrow_mut().push("outer".to_string());
    });
    let doc_log = Rc::clone(&log);
    page.add_document_click_listener(move |_, _| {
        doc_log.borrow_mut().push("document".to_string());
    });

    let event = page.click("inner");
    assert!(event.propagation_stopped());
    assert_eq!(*log.borrow(), vec!["inner-1", "inner-2"]);

    // Clicking the ancestor directly is unaffected
    log.borrow_mut().clear();
    page.click("outer");
    assert_eq!(*log.borrow(), vec!["outer", "document"]);
}

#[test]
fn test_prevent_default_is_reported() {
    let mut page = page();
    page.add_click_listener("inner", |event, _| event.prevent_default());

    assert!(page.click("inner").default_prevented());
    assert!(!page.click("outer").default_prevented());
}

#[test]
fn test_listener_mutates_document() {
    let mut page = page();
    page.add_click_listener("inner", |event, document| {
        document.toggle_class(event.target(), "active");
    });

    page.click("inner");
    assert!(page.document().has_class("inner", "active"));
    page.click("inner");
    assert!(!page.document().has_class("inner", "active"));
}

#[test]
fn test_click_unknown_target_not_dispatched() {
    let mut page = page();
    let log = recorder();
    let doc_log = Rc::clone(&log);
    page.add_document_click_listener(move |_, _| {
        doc_log.borrow_mut().push("document".to_string());
    });

    let event = page.click("missing");
    assert_eq!(event.target(), "missing");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_only_primary_button_is_dispatched() {
    let mut page = page();
    let log = recorder();
    let inner_log = Rc::clone(&log);
    page.add_click_listener("inner", move |event, _| {
        event.prevent_default();
        inner_log.borrow_mut().push("inner".to_string());
    });
    let doc_log = Rc::clone(&log);
    page.add_document_click_listener(move |_, _| {
        doc_log.borrow_mut().push("document".to_string());
    });

    for button in [MouseButton::Right, MouseButton::Middle] {
        let event = page.dispatch(ClickEvent::new("inner").button(button));
        assert_eq!(event.button, button);
        assert!(!event.default_prevented());
    }
    assert!(log.borrow().is_empty());

    let event = page.dispatch(ClickEvent::new("inner").button(MouseButton::Left));
    assert!(event.default_prevented());
    assert_eq!(*log.borrow(), vec!["inner", "document"]);
}

// ============================================================================
// Content Loaded
// ============================================================================

#[test]
fn test_content_loaded_fires_once() {
    let mut page = page();
    let count = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&count);
    page.on_content_loaded(move |_| *counter.borrow_mut() += 1);

    assert_eq!(page.ready_state(), ReadyState::Loading);
    assert!(page.load());
    assert_eq!(page.ready_state(), ReadyState::Complete);
    assert!(!page.load());
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_content_loaded_listener_can_register_click_listeners() {
    let mut page = page();
    page.on_content_loaded(|page| {
        page.add_click_listener("inner", |event, _| event.prevent_default());
    });

    assert!(!page.click("inner").default_prevented());
    page.load();
    assert_eq!(page.element_listener_count(), 1);
    assert!(page.click("inner").default_prevented());
}

#[test]
fn test_content_loaded_after_load_is_ignored() {
    let mut page = page();
    page.load();

    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    page.on_content_loaded(move |_| *counter.borrow_mut() += 1);
    page.load();
    assert_eq!(*count.borrow(), 0);
}
