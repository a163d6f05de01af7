//! Read-side lookups for hosts that consume a built tree.

use tracing::{debug, instrument};

use crate::{
    config::DomConfig,
    document::Document,
    error::Result,
    node::{Element, Node, NodeKind},
    walker::Walker,
};

#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: DomConfig,
}

impl Processor {
    pub fn new(config: DomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DomConfig {
        &self.config
    }

    /// First element named `tag_name` below a root named `root_name`, in
    /// document order. The root itself is never returned.
    #[instrument(skip(self, document))]
    pub fn search_node<'a>(
        &self,
        document: &'a Document,
        root_name: &str,
        tag_name: &str,
    ) -> Result<Option<&'a Element>> {
        let root = document.root();
        if !self.config.names_match(root.name(), root_name) {
            debug!(actual = root.name(), "root name does not match");
            return Ok(None);
        }

        let found = self
            .elements(root)?
            .skip(1)
            .find(|element| self.config.names_match(element.name(), tag_name));
        Ok(found)
    }

    /// Every element of the subtree in document order, `element` first,
    /// within the configured node budget.
    pub fn elements<'a>(&self, element: &'a Element) -> Result<impl Iterator<Item = &'a Element>> {
        let walker = Walker::new(element, &self.config, Some(NodeKind::Element))?;
        Ok(walker.filter_map(|node| node.as_element()))
    }

    /// First direct child element named `name`.
    pub fn retrieve_sub_node<'a>(&self, element: &'a Element, name: &str) -> Option<&'a Element> {
        element
            .child_elements()
            .find(|child| self.config.names_match(child.name(), name))
    }

    pub fn node_attribute_value<'a>(&self, element: &'a Element, name: &str) -> Option<&'a str> {
        if self.config.strict_names {
            return element.attribute(name);
        }
        element
            .attributes()
            .find(|(key, _)| self.config.names_match(key, name))
            .map(|(_, value)| value)
    }

    /// Concatenated Text and CDATA children of `element`, or `None` when it
    /// has no character data of its own.
    pub fn node_value(&self, element: &Element) -> Option<String> {
        let mut value: Option<String> = None;
        for child in element.children() {
            if let Node::Text(text) | Node::CData(text) = child {
                value.get_or_insert_with(String::new).push_str(text);
            }
        }
        value
    }
}
