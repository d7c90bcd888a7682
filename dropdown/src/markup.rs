//! Navbar dropdown markup.
//!
//! Builds the trigger and menu elements the controllers expect: an anchor
//! trigger followed by a `ul` menu of links, wrapped in a `li` nav item.

use pagedom::Element;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MENU_CLASS, DEFAULT_TRIGGER_ID};

/// One link in a dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    /// Link target. Derived from the label when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The link target, falling back to the label's page slug.
    pub fn href(&self) -> String {
        self.url.clone().unwrap_or_else(|| page_slug(&self.label))
    }
}

/// Page file name for a label: lowercased, spaces as underscores.
///
/// `"French Horn"` becomes `"french_horn.html"`.
pub fn page_slug(label: &str) -> String {
    format!("{}.html", label.to_lowercase().replace(' ', "_"))
}

/// Build a navbar dropdown using the default trigger ID.
pub fn navbar_dropdown(label: &str, entries: impl IntoIterator<Item = MenuEntry>) -> Element {
    nav_dropdown(DEFAULT_TRIGGER_ID, label, entries)
}

/// Build a `li.nav-item.dropdown` holding the trigger anchor and its menu.
///
/// Entries are listed in label order. The menu is the trigger's next
/// sibling, so the default sibling binding finds it.
pub fn nav_dropdown(
    trigger_id: &str,
    label: &str,
    entries: impl IntoIterator<Item = MenuEntry>,
) -> Element {
    let mut entries: Vec<MenuEntry> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.label.cmp(&b.label));

    let trigger = Element::anchor("#")
        .id(trigger_id)
        .classes("nav-link dropdown-toggle")
        .attr("role", "button")
        .attr("aria-expanded", "false")
        .text(label);

    let menu = Element::list()
        .class(DEFAULT_MENU_CLASS)
        .attr("aria-labelledby", trigger_id)
        .children(entries.iter().map(|entry| {
            Element::item().child(
                Element::anchor(entry.href())
                    .class("dropdown-item")
                    .text(&entry.label),
            )
        }));

    Element::item()
        .classes("nav-item dropdown")
        .child(trigger)
        .child(menu)
}
