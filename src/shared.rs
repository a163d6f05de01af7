use parking_lot::RwLock;
use std::sync::Arc;

use crate::{document::Document, error::Result, node::NormalizeStats};

/// A document that several threads can reach. Mutations take the write lock,
/// so they are serialized against each other and against readers.
#[derive(Debug, Clone)]
pub struct SharedDocument {
    inner: Arc<RwLock<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn normalize(&self) -> NormalizeStats {
        self.inner.write().normalize()
    }

    pub fn print(&self) -> Result<String> {
        self.inner.read().print()
    }

    pub fn element_node_count(&self) -> usize {
        self.inner.read().element_node_count()
    }

    /// Copy of the current tree.
    pub fn snapshot(&self) -> Document {
        self.inner.read().clone()
    }
}

impl From<Document> for SharedDocument {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}
