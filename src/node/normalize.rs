use super::{Element, Node};

/// What a normalization pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Text nodes folded into a preceding sibling.
    pub merged: usize,
    /// Empty text nodes dropped after merging.
    pub removed: usize,
}

impl NormalizeStats {
    pub fn is_unchanged(&self) -> bool {
        self.merged == 0 && self.removed == 0
    }
}

/// Walks the subtree with an explicit worklist, so depth is bounded by the
/// heap rather than the call stack.
pub(crate) fn normalize_element(element: &mut Element, stats: &mut NormalizeStats) {
    let mut pending: Vec<&mut Element> = vec![element];
    while let Some(element) = pending.pop() {
        normalize_children(element, stats);
        pending.extend(
            element
                .children_mut()
                .iter_mut()
                .filter_map(Node::as_element_mut),
        );
    }
}

fn normalize_children(element: &mut Element, stats: &mut NormalizeStats) {
    let children = std::mem::take(element.children_mut());
    let mut normalized: Vec<Node> = Vec::with_capacity(children.len());

    for child in children {
        match child {
            Node::Text(text) => match normalized.last_mut() {
                Some(Node::Text(previous)) => {
                    previous.push_str(&text);
                    stats.merged += 1;
                }
                _ => normalized.push(Node::Text(text)),
            },
            other => normalized.push(other),
        }
    }

    // Every text run is a single node now, so dropping empties cannot create
    // new adjacent pairs.
    let before = normalized.len();
    normalized.retain(|node| !matches!(node, Node::Text(text) if text.is_empty()));
    stats.removed += before - normalized.len();

    *element.children_mut() = normalized;
}
