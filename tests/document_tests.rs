#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod document_tests {
    use zdom::{build, print_document, Document, DomErrorKind, Element, Node, NodeKind};

    #[test]
    fn test_build_creates_empty_root() -> Result<(), Box<dyn std::error::Error>> {
        let document = Document::new("doc")?;
        let root = document.root();
        assert_eq!(root.name(), "doc");
        assert_eq!(root.attribute_count(), 0);
        assert!(!root.has_child_nodes());
        Ok(())
    }

    #[test]
    fn test_build_rejects_empty_and_absent_names() {
        for result in [build(Some("")), build(None)] {
            let err = result.unwrap_err();
            assert!(matches!(err.kind(), DomErrorKind::InvalidName(_)));
        }
    }

    #[test]
    fn test_build_rejects_invalid_names() {
        for name in ["1doc", "has space", "<doc>", "-x"] {
            let err = Document::new(name).unwrap_err();
            assert_eq!(err.kind(), &DomErrorKind::InvalidName(name.to_string()));
        }
    }

    #[test]
    fn test_element_node_count() -> Result<(), Box<dyn std::error::Error>> {
        let mut document = Document::new("doc")?;
        document
            .root_mut()
            .append_child(Node::element("a")?)
            .append_child(Node::element("b")?)
            .append_child(Node::text("hi"));

        assert_eq!(document.element_node_count(), 3);
        assert_eq!(document.node_count(), 4);
        Ok(())
    }

    #[test]
    fn test_element_node_count_deep_tree() -> Result<(), Box<dyn std::error::Error>> {
        let leaf = Element::new("leaf")?
            .with_child(Node::comment("c"))
            .with_child(Node::cdata("x"))
            .with_child(Node::entity_reference("amp")?)
            .with_child(Node::processing_instruction("pi", "")?);
        let middle = Element::new("middle")?
            .with_child(leaf.clone())
            .with_child(Node::text("t"))
            .with_child(leaf);
        let document = Document::from_root(Element::new("root")?.with_child(middle));

        assert_eq!(document.element_node_count(), 4);
        assert_eq!(document.node_count(), 13);
        Ok(())
    }

    #[test]
    fn test_print_empty_and_text_documents() -> Result<(), Box<dyn std::error::Error>> {
        let mut document = build(Some("doc"))?;
        assert_eq!(print_document(Some(&document))?, "<doc/>");

        document.root_mut().append_child(Node::text("hi"));
        assert_eq!(print_document(Some(&document))?, "<doc>hi</doc>");
        Ok(())
    }

    #[test]
    fn test_print_absent_document_fails() {
        let err = print_document(None).unwrap_err();
        assert!(matches!(err.kind(), DomErrorKind::InvalidDocument(_)));
    }

    #[test]
    fn test_node_kinds_and_payloads() -> Result<(), Box<dyn std::error::Error>> {
        let nodes = [
            (Node::element("e")?, NodeKind::Element, None),
            (Node::text("t"), NodeKind::Text, Some("t")),
            (Node::comment("c"), NodeKind::Comment, Some("c")),
            (Node::cdata("d"), NodeKind::CData, Some("d")),
            (Node::entity_reference("lt")?, NodeKind::EntityReference, None),
            (
                Node::processing_instruction("target", "data")?,
                NodeKind::ProcessingInstruction,
                None,
            ),
        ];
        for (node, kind, payload) in &nodes {
            assert_eq!(node.kind(), *kind);
            assert_eq!(node.text_payload(), *payload);
            assert!(node.children().is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_attributes_keep_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new("e")?;
        element.set_attribute("zeta", "1")?;
        element.set_attribute("alpha", "2")?;
        element.set_attribute("mid", "3")?;
        assert_eq!(element.set_attribute("zeta", "4")?, Some("1".to_string()));

        let keys: Vec<&str> = element.attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(element.attribute("zeta"), Some("4"));

        assert_eq!(element.remove_attribute("alpha"), Some("2".to_string()));
        let keys: Vec<&str> = element.attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zeta", "mid"]);

        let err = element.set_attribute("bad key", "x").unwrap_err();
        assert!(matches!(err.kind(), DomErrorKind::InvalidName(_)));
        Ok(())
    }

    #[test]
    fn test_child_insertion_and_removal() -> Result<(), Box<dyn std::error::Error>> {
        let mut element = Element::new("list")?;
        element.append_child(Node::text("b"));
        element.insert_child(0, Node::text("a"))?;
        element.insert_child(2, Node::text("c"))?;

        let err = element.insert_child(10, Node::text("z")).unwrap_err();
        assert_eq!(err.kind(), &DomErrorKind::InvalidIndex(10));

        assert_eq!(element.remove_child(1), Some(Node::text("b")));
        assert_eq!(element.remove_child(5), None);
        assert_eq!(element.children(), [Node::text("a"), Node::text("c")]);
        Ok(())
    }

    #[test]
    fn test_text_content_skips_markup() -> Result<(), Box<dyn std::error::Error>> {
        let element = Element::new("p")?
            .with_child(Node::text("one "))
            .with_child(Node::comment("ignored"))
            .with_child(Element::new("b")?.with_child(Node::text("two")))
            .with_child(Node::cdata(" three"));
        assert_eq!(element.text_content(), "one two three");
        Ok(())
    }

    #[test]
    fn test_into_root_returns_tree() -> Result<(), Box<dyn std::error::Error>> {
        let mut document = Document::new("doc")?;
        document.root_mut().append_child(Node::text("x"));
        let root = document.into_root();
        assert_eq!(root.children(), [Node::text("x")]);
        Ok(())
    }
}
