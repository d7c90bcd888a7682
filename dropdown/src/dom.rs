//! The document operations a dropdown needs.
//!
//! Controllers are generic over [`Dom`] so the same behavior drives the
//! in-memory [`pagedom::Document`] and, with the `web` feature, a browser
//! document.

use std::fmt::Debug;

/// Structural queries and class mutation on a document.
pub trait Dom {
    /// Handle to an element. Equal handles refer to the same element.
    type Node: Clone + PartialEq + Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// True if `node` is `ancestor` or inside it.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip a class. Returns true if it is present afterwards.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool;

    /// Every element carrying all of `classes`, in document order.
    fn elements_with_classes(&self, classes: &[&str]) -> Vec<Self::Node>;
}

/// The parts of a click event a trigger handler acts on.
pub trait Activation {
    fn prevent_default(&mut self);

    fn stop_propagation(&mut self);
}
