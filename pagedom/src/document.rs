//! Document tree with structural queries and class mutation.
//!
//! Elements are addressed by ID. Lookups return the first match in
//! document order, as `getElementById` does.

use crate::element::{element_at, find_element, find_element_mut, find_path, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Wrap `children` in a `body` element.
    pub fn body(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(Element::new("body").id("body").children(children))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// ID of the parent element, None for the root or unknown IDs.
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        let mut path = find_path(&self.root, id)?;
        path.pop()?;
        element_at(&self.root, &path).map(|parent| parent.id.as_str())
    }

    /// IDs from the element itself up to the root, the order a click bubbles.
    pub fn propagation_path(&self, id: &str) -> Vec<String> {
        let Some(path) = find_path(&self.root, id) else {
            return Vec::new();
        };

        let mut ids: Vec<String> = (0..=path.len())
            .filter_map(|depth| element_at(&self.root, &path[..depth]))
            .map(|element| element.id.clone())
            .collect();
        ids.reverse();
        ids
    }

    /// The element immediately following this one among its parent's children.
    pub fn next_element_sibling(&self, id: &str) -> Option<&Element> {
        let mut path = find_path(&self.root, id)?;
        let index = path.pop()?;
        let parent = element_at(&self.root, &path)?;
        parent.child_elements().get(index + 1)
    }

    /// True if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: &str, node: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|element| find_element(element, node).is_some())
    }

    /// IDs of every element carrying all of `classes`, in document order.
    pub fn query_class_all(&self, classes: &[&str]) -> Vec<String> {
        let mut found = Vec::new();
        collect_with_classes(&self.root, classes, &mut found);
        found
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|element| element.has_class(class))
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id)
            .is_some_and(|element| element.classes.add(class))
    }

    /// Returns true if the class was removed.
    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id)
            .is_some_and(|element| element.classes.remove(class))
    }

    /// Returns true if the class is present afterwards. Unknown IDs yield false.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        self.get_mut(id)
            .is_some_and(|element| element.classes.toggle(class))
    }
}

fn collect_with_classes(element: &Element, classes: &[&str], found: &mut Vec<String>) {
    if element.classes.contains_all(classes) {
        found.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_with_classes(child, classes, found);
    }
}
