mod node;

pub use node::{Content, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of all elements whose data attribute `key` equals `value`,
/// in tree order.
pub fn query_data(root: &Element, key: &str, value: &str) -> Vec<String> {
    let mut result = Vec::new();
    query_data_recursive(root, key, value, &mut result);
    result
}

fn query_data_recursive(element: &Element, key: &str, value: &str, result: &mut Vec<String>) {
    if element.get_data(key).map(String::as_str) == Some(value) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            query_data_recursive(child, key, value, result);
        }
    }
}
