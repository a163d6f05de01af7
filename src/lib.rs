//! zdom: a minimal in-memory DOM tree
//!
//! This crate provides functionality to:
//! - Build a document anchored at a single root element
//! - Normalize text content across the whole tree
//! - Serialize the tree to compact XML
//! - Walk and query the tree, and count its element nodes
//!
//! # Examples
//! ```
//! use zdom::{print_document, Document, Node, Result};
//!
//! fn example() -> Result<()> {
//!     let mut document = Document::new("doc")?;
//!     document
//!         .root_mut()
//!         .append_child(Node::text("hi"))
//!         .append_child(Node::text(""));
//!     document.normalize();
//!     assert_eq!(print_document(Some(&document))?, "<doc>hi</doc>");
//!     assert_eq!(document.element_node_count(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod node;
pub mod printer;
pub mod processor;
pub mod shared;
pub mod utils;
pub mod walker;

// Re-exports
pub use config::{DomConfig, DEFAULT_MAX_NODES};
pub use document::Document;
pub use error::{DomError, DomErrorKind, Result};
pub use node::{Element, Node, NodeKind, NormalizeStats, ProcessingInstruction};
pub use printer::{PrintConfig, Printer};
pub use processor::Processor;
pub use shared::SharedDocument;
pub use utils::{build, print_document};
pub use walker::{NodeRef, Walker};
