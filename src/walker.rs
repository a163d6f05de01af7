//! Stack-based depth-first traversal.

use tracing::warn;

use crate::{
    config::DomConfig,
    error::Result,
    node::{Element, Node, NodeKind},
};

/// Borrowed view of a node met during a walk. Elements always come out as
/// [`NodeRef::Element`], so the root and nested elements look the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Element(&'a Element),
    Leaf(&'a Node),
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Leaf(node) => node.kind(),
        }
    }

    pub fn as_element(self) -> Option<&'a Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Leaf(_) => None,
        }
    }

    pub fn children(self) -> &'a [Node] {
        match self {
            Self::Element(element) => element.children(),
            Self::Leaf(_) => &[],
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Element(element) => Self::Element(element),
            other => Self::Leaf(other),
        }
    }
}

impl<'a> From<&'a Element> for NodeRef<'a> {
    fn from(element: &'a Element) -> Self {
        Self::Element(element)
    }
}

/// Pre-order walk over a subtree, root first.
///
/// Nodes whose kind does not match the filter are still descended into but
/// not yielded. The walk stops after `max_nodes` visits.
#[derive(Debug)]
pub struct Walker<'a> {
    stack: Vec<NodeRef<'a>>,
    filter: Option<NodeKind>,
    max_nodes: usize,
    visited: usize,
    limit_reached: bool,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a Element, config: &DomConfig, filter: Option<NodeKind>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stack: vec![NodeRef::Element(root)],
            filter,
            max_nodes: config.max_nodes,
            visited: 0,
            limit_reached: false,
        })
    }

    /// Every node of the subtree, no filter and no budget.
    pub fn unbounded(root: &'a Element) -> Self {
        Self {
            stack: vec![NodeRef::Element(root)],
            filter: None,
            max_nodes: usize::MAX,
            visited: 0,
            limit_reached: false,
        }
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    /// True once the walk was cut short by the node budget.
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.visited >= self.max_nodes {
                if !self.stack.is_empty() && !self.limit_reached {
                    self.limit_reached = true;
                    warn!(max_nodes = self.max_nodes, "node budget exhausted, walk truncated");
                }
                return None;
            }

            let node = self.stack.pop()?;
            self.visited += 1;
            self.stack
                .extend(node.children().iter().rev().map(NodeRef::from));

            if self.filter.map_or(true, |kind| kind == node.kind()) {
                return Some(node);
            }
        }
    }
}
