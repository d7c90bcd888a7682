//! All dropdown controllers installed on a page.

use std::rc::Rc;

use log::{debug, trace};

use crate::config::{DropdownConfig, ExclusivePolicy};
use crate::controller::{DropdownController, Markers};
use crate::dom::{Activation, Dom};
use crate::error::DropdownError;

/// Installed controllers plus the page-wide mutual exclusion policy.
#[derive(Debug)]
pub struct Dropdowns<D: Dom> {
    controllers: Vec<DropdownController<D>>,
    markers: Rc<Markers>,
    exclusive: ExclusivePolicy,
}

impl<D: Dom> Dropdowns<D> {
    /// Attach a controller for every binding whose trigger exists.
    ///
    /// Bindings whose trigger is absent are skipped silently; only an
    /// invalid configuration is an error.
    pub fn install(dom: &D, config: &DropdownConfig) -> Result<Self, DropdownError> {
        config.validate()?;

        let markers = Rc::new(Markers::from_config(config));
        let controllers: Vec<_> = config
            .bindings
            .iter()
            .filter_map(|binding| DropdownController::attach(dom, binding, Rc::clone(&markers)))
            .collect();

        debug!(
            "[dropdown] installed {} of {} bindings",
            controllers.len(),
            config.bindings.len()
        );

        Ok(Self {
            controllers,
            markers,
            exclusive: config.exclusive,
        })
    }

    pub fn controllers(&self) -> &[DropdownController<D>] {
        &self.controllers
    }

    pub fn get(&self, trigger_id: &str) -> Option<&DropdownController<D>> {
        self.controllers
            .iter()
            .find(|controller| controller.trigger_id() == trigger_id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Every element currently marked as an open menu, in document order.
    pub fn open_menus(&self, dom: &D) -> Vec<D::Node> {
        dom.elements_with_classes(&[
            self.markers.menu_class.as_str(),
            self.markers.show_class.as_str(),
        ])
    }

    /// Handle a click on the trigger of the controller at `index`.
    ///
    /// Cancels the click's default action and bubbling, flips the menu, then
    /// closes every other open menu the exclusion policy covers.
    pub fn on_trigger_click(&self, index: usize, dom: &mut D, event: &mut impl Activation) {
        let Some(controller) = self.controllers.get(index) else {
            return;
        };

        event.prevent_default();
        event.stop_propagation();

        let toggled = controller.toggle(dom).map(|(menu, _)| menu);
        self.close_others(dom, toggled.as_ref());
    }

    /// Handle a click that bubbled up to the document.
    pub fn on_document_click(&self, dom: &mut D, target: &D::Node) {
        for controller in &self.controllers {
            if controller.dismiss_outside(dom, target) {
                trace!("[dropdown] outside click closed {}", controller.trigger_id());
            }
        }
    }

    fn close_others(&self, dom: &mut D, keep: Option<&D::Node>) {
        for menu in self.open_menus(dom) {
            if keep == Some(&menu) {
                continue;
            }
            if self.exclusive == ExclusivePolicy::Registered
                && !self.is_registered_menu(dom, &menu)
            {
                continue;
            }
            dom.remove_class(&menu, &self.markers.show_class);
            trace!("[dropdown] closed other menu {:?}", menu);
        }
    }

    fn is_registered_menu(&self, dom: &D, menu: &D::Node) -> bool {
        self.controllers
            .iter()
            .any(|controller| controller.menu(dom).as_ref() == Some(menu))
    }
}
