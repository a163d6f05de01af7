use tracing::{debug, instrument, warn};

use crate::{
    error::Result,
    node::{Element, NodeKind, NormalizeStats},
    printer::Printer,
    walker::Walker,
};

/// A tree anchored at exactly one root element. The document owns every node
/// below the root; dropping it drops the whole tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Builds a document whose root is an empty element named `name`.
    ///
    /// Fails with `InvalidName` when `name` is empty or not an XML `Name`;
    /// nothing is allocated in that case.
    #[instrument(level = "debug")]
    pub fn new(name: &str) -> Result<Self> {
        let root = Element::new(name).inspect_err(|e| warn!("rejected root name: {}", e))?;
        debug!("document created");
        Ok(Self { root })
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Puts every text region of the tree into normal form: no adjacent Text
    /// siblings and no empty Text nodes anywhere below the root.
    #[instrument(skip(self), fields(root = %self.root.name()))]
    pub fn normalize(&mut self) -> NormalizeStats {
        let stats = self.root.normalize();
        debug!(merged = stats.merged, removed = stats.removed, "normalized");
        stats
    }

    /// Number of element nodes in the tree, root included.
    pub fn element_node_count(&self) -> usize {
        Walker::unbounded(&self.root)
            .filter(|node| node.kind() == NodeKind::Element)
            .count()
    }

    /// Number of nodes of every kind in the tree, root included.
    pub fn node_count(&self) -> usize {
        Walker::unbounded(&self.root).count()
    }

    pub fn walk(&self) -> Walker<'_> {
        Walker::unbounded(&self.root)
    }

    /// Serializes with the default [`Printer`].
    pub fn print(&self) -> Result<String> {
        Printer::default().print(self)
    }
}
