mod escape;

pub use self::escape::{escape_attribute, escape_text};

use tracing::{debug, instrument, warn};

use crate::{
    document::Document,
    error::{DomError, DomErrorKind, Result},
    node::{name::is_valid_name, Element, Node, ProcessingInstruction},
};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>";

/// Configuration options for printing
#[derive(Debug, Clone, Default)]
pub struct PrintConfig {
    /// Prefix the output with `<?xml version="1.0"?>`
    pub xml_declaration: bool,
    /// Write attributes sorted by key instead of insertion order
    pub sort_attributes: bool,
}

/// Serializes a tree as compact XML, depth-first pre-order.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrintConfig,
}

enum Frame<'a> {
    Open { node: &'a Node, position: usize },
    Close { element: &'a Element, position: usize },
}

impl Printer {
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Renders the whole document. Fails with `InvalidDocument` when a node
    /// cannot be written well-formed; no partial output is returned.
    #[instrument(skip_all, fields(root = %document.root().name()))]
    pub fn print(&self, document: &Document) -> Result<String> {
        let mut out = String::new();
        if self.config.xml_declaration {
            out.push_str(XML_DECLARATION);
        }
        self.write_element(document.root(), &mut out)
            .inspect_err(|e| warn!("document not printable: {}", e))?;
        debug!(bytes = out.len(), "document printed");
        Ok(out)
    }

    /// Renders a single subtree, never with a declaration.
    pub fn print_element(&self, element: &Element) -> Result<String> {
        let mut out = String::new();
        self.write_element(element, &mut out)?;
        Ok(out)
    }

    fn write_element<'a>(&self, root: &'a Element, out: &mut String) -> Result<()> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        self.open_element(root, 0, out, &mut stack);

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Close { element, .. } => {
                    out.push_str("</");
                    out.push_str(element.name());
                    out.push('>');
                }
                Frame::Open { node, position } => {
                    if let Err(reason) = write_leaf_or_open(self, node, position, out, &mut stack) {
                        let path = node_path(root, &stack, position);
                        return Err(DomError::new(DomErrorKind::InvalidDocument(reason))
                            .with_location(path));
                    }
                }
            }
        }
        Ok(())
    }

    fn open_element<'a>(
        &self,
        element: &'a Element,
        position: usize,
        out: &mut String,
        stack: &mut Vec<Frame<'a>>,
    ) {
        out.push('<');
        out.push_str(element.name());

        let mut attributes: Vec<(&str, &str)> = element.attributes().collect();
        if self.config.sort_attributes {
            attributes.sort_by_key(|(key, _)| *key);
        }
        for (key, value) in attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }

        if !element.has_child_nodes() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        stack.push(Frame::Close { element, position });
        stack.extend(
            element
                .children()
                .iter()
                .enumerate()
                .rev()
                .map(|(index, node)| Frame::Open {
                    node,
                    position: index + 1,
                }),
        );
    }
}

fn write_leaf_or_open<'a>(
    printer: &Printer,
    node: &'a Node,
    position: usize,
    out: &mut String,
    stack: &mut Vec<Frame<'a>>,
) -> std::result::Result<(), String> {
    match node {
        Node::Element(element) => printer.open_element(element, position, out, stack),
        Node::Text(text) => escape_text(text, out),
        Node::Comment(text) => {
            if text.contains("--") || text.ends_with('-') {
                return Err("comment contains \"--\" or ends with \"-\"".to_string());
            }
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::ProcessingInstruction(pi) => write_processing_instruction(pi, out)?,
        Node::CData(text) => {
            if text.contains("]]>") {
                return Err("CDATA section contains \"]]>\"".to_string());
            }
            out.push_str("<![CDATA[");
            out.push_str(text);
            out.push_str("]]>");
        }
        Node::EntityReference(name) => {
            if !is_valid_name(name) {
                return Err(format!("invalid entity name {:?}", name));
            }
            out.push('&');
            out.push_str(name);
            out.push(';');
        }
    }
    Ok(())
}

fn write_processing_instruction(
    pi: &ProcessingInstruction,
    out: &mut String,
) -> std::result::Result<(), String> {
    if !is_valid_name(&pi.target) || pi.target.eq_ignore_ascii_case("xml") {
        return Err(format!("invalid processing instruction target {:?}", pi.target));
    }
    if pi.data.contains("?>") {
        return Err("processing instruction data contains \"?>\"".to_string());
    }
    out.push_str("<?");
    out.push_str(&pi.target);
    if !pi.data.is_empty() {
        out.push(' ');
        out.push_str(&pi.data);
    }
    out.push_str("?>");
    Ok(())
}

/// XPath-style path of a node, e.g. `/doc/item[2]/#comment[1]`: `[n]` counts
/// earlier siblings with the same name (or kind, for non-elements). The open
/// ancestors are exactly the `Close` frames still on the stack.
fn node_path(root: &Element, stack: &[Frame<'_>], position: usize) -> String {
    let mut path = format!("/{}", root.name());
    let mut parent = root;
    for frame in stack {
        if let Frame::Close { element, position } = frame {
            if *position > 0 {
                path.push_str(&path_step(parent, *position));
                parent = *element;
            }
        }
    }
    path.push_str(&path_step(parent, position));
    path
}

/// `position` is the 1-based index of the child among all of `parent`'s children.
fn path_step(parent: &Element, position: usize) -> String {
    let Some((node, preceding)) = parent
        .children()
        .get(..position)
        .and_then(<[Node]>::split_last)
    else {
        return String::new();
    };
    let name = step_name(node);
    let ordinal = preceding
        .iter()
        .filter(|sibling| step_name(sibling) == name)
        .count()
        + 1;
    format!("/{}[{}]", name, ordinal)
}

fn step_name(node: &Node) -> String {
    match node {
        Node::Element(element) => element.name().to_string(),
        other => format!("#{}", other.kind()).replace(' ', "-"),
    }
}
