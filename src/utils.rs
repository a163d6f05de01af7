use crate::{
    document::Document,
    error::{DomError, DomErrorKind, Result},
    printer::Printer,
};
use std::fs;

/// Builds a document from a possibly absent root name.
pub fn build(name: Option<&str>) -> Result<Document> {
    match name {
        Some(name) => Document::new(name),
        None => Err(DomError::new(DomErrorKind::InvalidName(String::new()))),
    }
}

/// Renders `document` with the default printer; an absent document is an
/// `InvalidDocument` error.
pub fn print_document(document: Option<&Document>) -> Result<String> {
    let document = document.ok_or_else(|| {
        DomError::new(DomErrorKind::InvalidDocument(
            "document is absent".to_string(),
        ))
    })?;
    Printer::default().print(document)
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        DomError::new(DomErrorKind::IoError(format!(
            "Cannot write to file: {}",
            path
        )))
        .with_source(e)
    })
}
