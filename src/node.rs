mod element;
pub mod name;
mod normalize;

use std::fmt;

pub use self::{element::Element, normalize::NormalizeStats};
use crate::error::Result;
use self::name::validate_name;

/// A unit of the tree. Only [`Node::Element`] carries children; only Text,
/// Comment and CDATA carry a text payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    ProcessingInstruction(ProcessingInstruction),
    CData(String),
    /// Name of the referenced entity, without `&` and `;`.
    EntityReference(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub target: String,
    pub data: String,
}

/// Kind tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    ProcessingInstruction,
    CData,
    EntityReference,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Element => "element",
            Self::Text => "text",
            Self::Comment => "comment",
            Self::ProcessingInstruction => "processing instruction",
            Self::CData => "cdata",
            Self::EntityReference => "entity reference",
        };
        f.write_str(name)
    }
}

impl Node {
    pub fn element(name: impl Into<String>) -> Result<Self> {
        Element::new(name).map(Self::Element)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn cdata(text: impl Into<String>) -> Self {
        Self::CData(text.into())
    }

    pub fn processing_instruction(
        target: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Self> {
        let target = target.into();
        validate_name(&target)?;
        Ok(Self::ProcessingInstruction(ProcessingInstruction {
            target,
            data: data.into(),
        }))
    }

    pub fn entity_reference(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::EntityReference(name))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::Comment(_) => NodeKind::Comment,
            Self::ProcessingInstruction(_) => NodeKind::ProcessingInstruction,
            Self::CData(_) => NodeKind::CData,
            Self::EntityReference(_) => NodeKind::EntityReference,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Payload of Text, Comment and CDATA nodes.
    pub fn text_payload(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Comment(text) | Self::CData(text) => Some(text),
            Self::Element(_) | Self::ProcessingInstruction(_) | Self::EntityReference(_) => None,
        }
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => element.children(),
            _ => &[],
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Text(text) | Self::CData(text) => out.push_str(text),
                Self::Element(element) => pending.extend(element.children().iter().rev()),
                Self::Comment(_) | Self::ProcessingInstruction(_) | Self::EntityReference(_) => {}
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}
