use crate::element::{find_element, find_element_mut, query_data, Element};
use crate::types::Display;

/// An owned element tree with lookup and mutation by ID.
///
/// This is the controller's collaborator: everything the menu does to the
/// page goes through a `Document`, so tests can drive the controller with a
/// hand-built tree.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// IDs of all elements whose data attribute `key` equals `value`,
    /// in tree order.
    pub fn query_data(&self, key: &str, value: &str) -> Vec<String> {
        query_data(&self.root, key, value)
    }

    /// Set or clear the inline display of an element.
    /// Returns false if the element does not exist.
    pub fn set_inline_display(&mut self, id: &str, display: Option<Display>) -> bool {
        match self.find_mut(id) {
            Some(element) => {
                element.inline_display = display;
                true
            }
            None => false,
        }
    }

    /// Add a class to an element. Returns true if it was added.
    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.find_mut(id)
            .map(|element| element.add_class(class))
            .unwrap_or(false)
    }

    /// Remove a class from an element. Returns true if it was present.
    pub fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.find_mut(id)
            .map(|element| element.remove_class(class))
            .unwrap_or(false)
    }

    /// Toggle a class on an element.
    /// Returns true if the class is present afterwards.
    pub fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        self.find_mut(id)
            .map(|element| element.toggle_class(class))
            .unwrap_or(false)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.find(id)
            .map(|element| element.has_class(class))
            .unwrap_or(false)
    }
}
