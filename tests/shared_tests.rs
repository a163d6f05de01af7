#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::thread;
use zdom::{Document, Node, SharedDocument};

#[test]
fn test_writers_are_serialized() {
    let shared = SharedDocument::new(Document::new("log").unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                for j in 0..25 {
                    shared.write(|document| {
                        let entry = Node::element("entry").unwrap();
                        document
                            .root_mut()
                            .append_child(entry)
                            .append_child(Node::text(format!("{i}-{j}")));
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.element_node_count(), 1 + 8 * 25);
    assert_eq!(shared.read(|document| document.root().children().len()), 400);
}

#[test]
fn test_readers_see_consistent_tree() {
    let mut document = Document::new("doc").unwrap();
    document
        .root_mut()
        .append_child(Node::text("a"))
        .append_child(Node::text("b"));
    let shared = SharedDocument::from(document);

    let reader = {
        let shared = shared.clone();
        thread::spawn(move || shared.print().unwrap())
    };
    let stats = shared.normalize();

    assert_eq!(reader.join().unwrap(), "<doc>ab</doc>");
    assert_eq!(stats.merged, 1);
    assert_eq!(shared.snapshot().root().children(), [Node::text("ab")]);
}
