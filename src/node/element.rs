use indexmap::IndexMap;

use super::{
    name::validate_name,
    normalize::{self, NormalizeStats},
    Node,
};
use crate::error::{DomError, DomErrorKind, Result};

/// A structural node: a validated name, insertion-ordered attributes and an
/// ordered list of owned children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    ///
    /// Fails with [`DomErrorKind::InvalidName`] unless `name` matches the XML
    /// `Name` production.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Sets an attribute, returning the previous value. Replacing an existing
    /// key keeps its original position.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let key = key.into();
        validate_name(&key)?;
        Ok(self.attributes.insert(key, value.into()))
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.set_attribute(key, value)?;
        Ok(self)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn append_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn insert_child(&mut self, index: usize, child: impl Into<Node>) -> Result<()> {
        if index > self.children.len() {
            return Err(DomError::new(DomErrorKind::InvalidIndex(index)));
        }
        self.children.insert(index, child.into());
        Ok(())
    }

    pub fn remove_child(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_element_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index).and_then(Node::as_element_mut)
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    /// Concatenated Text and CDATA payloads of the whole subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Merges adjacent Text children and drops empty ones, for this element
    /// and every element below it.
    pub fn normalize(&mut self) -> NormalizeStats {
        let mut stats = NormalizeStats::default();
        normalize::normalize_element(self, &mut stats);
        stats
    }
}
