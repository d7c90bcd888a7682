//! A single trigger and the menu it toggles.

use std::rc::Rc;

use log::{debug, trace};

use crate::config::{Binding, DropdownConfig};
use crate::dom::Dom;

/// Marker classes shared by every controller of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub menu_class: String,
    pub show_class: String,
}

impl Markers {
    pub fn new(menu_class: impl Into<String>, show_class: impl Into<String>) -> Self {
        Self {
            menu_class: menu_class.into(),
            show_class: show_class.into(),
        }
    }

    pub fn from_config(config: &DropdownConfig) -> Self {
        Self::new(&config.menu_class, &config.show_class)
    }
}

/// Where a controller finds its menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLocator {
    /// The trigger's next element sibling.
    Sibling,
    /// The element with this ID.
    Id(String),
}

/// Toggles one menu from one trigger.
///
/// The menu is resolved on every use rather than cached, so markup that
/// changes after installation is picked up.
#[derive(Debug)]
pub struct DropdownController<D: Dom> {
    trigger_id: String,
    trigger: D::Node,
    menu: MenuLocator,
    markers: Rc<Markers>,
}

impl<D: Dom> DropdownController<D> {
    /// Look up the binding's trigger. Returns None when the page has no
    /// such element, which disables this dropdown.
    pub fn attach(dom: &D, binding: &Binding, markers: Rc<Markers>) -> Option<Self> {
        let Some(trigger) = dom.element_by_id(&binding.trigger) else {
            debug!("[dropdown] trigger {} not found, skipping", binding.trigger);
            return None;
        };

        let menu = match &binding.menu {
            Some(id) => MenuLocator::Id(id.clone()),
            None => MenuLocator::Sibling,
        };
        debug!("[dropdown] attached trigger {} ({:?})", binding.trigger, menu);

        Some(Self {
            trigger_id: binding.trigger.clone(),
            trigger,
            menu,
            markers,
        })
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    pub fn trigger(&self) -> &D::Node {
        &self.trigger
    }

    pub fn locator(&self) -> &MenuLocator {
        &self.menu
    }

    /// The associated element, whether or not it is marked as a menu.
    pub fn menu(&self, dom: &D) -> Option<D::Node> {
        match &self.menu {
            MenuLocator::Sibling => dom.next_element_sibling(&self.trigger),
            MenuLocator::Id(id) => dom.element_by_id(id),
        }
    }

    /// The associated element, only if it carries the menu class.
    pub fn dropdown_menu(&self, dom: &D) -> Option<D::Node> {
        self.menu(dom)
            .filter(|menu| dom.has_class(menu, &self.markers.menu_class))
    }

    pub fn is_open(&self, dom: &D) -> bool {
        self.menu(dom)
            .is_some_and(|menu| dom.has_class(&menu, &self.markers.show_class))
    }

    /// True if `node` is inside the trigger or inside its menu.
    pub fn owns(&self, dom: &D, node: &D::Node) -> bool {
        dom.contains(&self.trigger, node)
            || self
                .menu(dom)
                .is_some_and(|menu| dom.contains(&menu, node))
    }

    /// Flip the menu's show marker. Returns the menu and its new state, or
    /// None when there is no element marked as a menu to toggle.
    pub fn toggle(&self, dom: &mut D) -> Option<(D::Node, bool)> {
        let Some(menu) = self.dropdown_menu(dom) else {
            debug!("[dropdown] {} has no menu to toggle", self.trigger_id);
            return None;
        };
        let shown = dom.toggle_class(&menu, &self.markers.show_class);
        trace!("[dropdown] {} toggled, shown={}", self.trigger_id, shown);
        Some((menu, shown))
    }

    /// Hide the menu if it is shown. Returns true if it was closed.
    pub fn close(&self, dom: &mut D) -> bool {
        if !self.is_open(dom) {
            return false;
        }
        let Some(menu) = self.menu(dom) else {
            return false;
        };
        dom.remove_class(&menu, &self.markers.show_class);
        trace!("[dropdown] {} closed", self.trigger_id);
        true
    }

    /// React to a click anywhere in the document: close the menu when the
    /// click landed outside both trigger and menu. Returns true if closed.
    pub fn dismiss_outside(&self, dom: &mut D, target: &D::Node) -> bool {
        if self.owns(dom, target) {
            return false;
        }
        self.close(dom)
    }
}
