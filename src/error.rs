use std::{error::Error, fmt};

#[derive(Debug)]
pub struct DomError {
    kind: DomErrorKind,
    location: Option<String>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomErrorKind {
    /// Empty or syntactically invalid element, attribute or entity name.
    InvalidName(String),
    /// Absent document, or a node that cannot be rendered well-formed.
    InvalidDocument(String),
    InvalidIndex(usize),
    InvalidConfig(String),
    IoError(String),
}

impl DomError {
    pub fn new(kind: DomErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
        }
    }

    /// Attaches the path of the node the error refers to, e.g. `/doc/item[2]`
    /// for the second `item` child of `doc`.
    pub fn with_location(mut self, path: impl Into<String>) -> Self {
        self.location = Some(path.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &DomErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl fmt::Display for DomErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid name {:?}", name),
            Self::InvalidDocument(reason) => write!(f, "invalid document: {}", reason),
            Self::InvalidIndex(index) => write!(f, "child index {} out of range", index),
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            Self::IoError(reason) => write!(f, "io error: {}", reason),
        }
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(path) = &self.location {
            write!(f, " at {}", path)?;
        }
        Ok(())
    }
}

impl Error for DomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

pub type Result<T> = std::result::Result<T, DomError>;
