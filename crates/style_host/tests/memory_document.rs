#![allow(
    clippy::unwrap_used,
    clippy::tests_outside_test_module,
    clippy::let_underscore_must_use,
    reason = "integration tests assert by unwrapping"
)]
//! Tests for the in-memory document used by headless hosts.

use style_host::{CssRuleInfo, Document as _, DocumentUpdate, HostError, MemoryDocument, NodeKey, StyleSheetInfo};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn queries_return_document_order() {
    init_logging();
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let header = doc.append_element(body, "header");
    let main = doc.append_element(body, "main");
    let nested = doc.append_element(main, "header");
    let footer = doc.append_element(body, "footer");

    assert_eq!(doc.query_selector_all("header"), vec![header, nested]);
    assert_eq!(doc.query_selector_all("footer, header"), vec![header, nested, footer]);
    assert_eq!(doc.query_selector("footer"), Some(footer));
    assert!(doc.query_selector_all("aside").is_empty());
}

#[test]
fn class_and_id_selectors() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let first = doc.append_element(body, "div");
    let second = doc.append_element(body, "p");
    doc.set_attribute(first, "class", "spacing card").unwrap();
    doc.set_attribute(second, "class", "spacing").unwrap();
    doc.set_attribute(second, "id", "intro").unwrap();

    assert_eq!(doc.query_selector_all(".spacing"), vec![first, second]);
    assert_eq!(doc.query_selector_all("div.card"), vec![first]);
    assert_eq!(doc.query_selector("#intro"), Some(second));
    assert_eq!(doc.query_selector_all("p#intro.spacing"), vec![second]);
    assert!(doc.query_selector_all("div > p").is_empty());
}

#[test]
fn class_list_add_remove_is_idempotent() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    doc.add_class(body, "dark").unwrap();
    doc.add_class(body, "dark").unwrap();
    assert_eq!(doc.class_list(body), vec!["dark"]);
    doc.remove_class(body, "dark").unwrap();
    doc.remove_class(body, "dark").unwrap();
    assert!(doc.class_list(body).is_empty());
}

#[test]
fn class_tokens_must_be_single_words() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    doc.add_class(body, "dark").unwrap();

    assert_eq!(
        doc.add_class(body, ""),
        Err(HostError::InvalidClassToken(String::new()))
    );
    assert_eq!(
        doc.add_class(body, "dark high"),
        Err(HostError::InvalidClassToken(String::from("dark high")))
    );
    assert_eq!(
        doc.remove_class(body, "dark\thigh"),
        Err(HostError::InvalidClassToken(String::from("dark\thigh")))
    );
    assert_eq!(doc.class_list(body), vec!["dark"]);
    // Token validation runs before the node lookup.
    assert_eq!(
        doc.add_class(NodeKey(999), " "),
        Err(HostError::InvalidClassToken(String::from(" ")))
    );
}

#[test]
fn mutating_unknown_node_fails() {
    let mut doc = MemoryDocument::with_body();
    let ghost = NodeKey(999);
    assert_eq!(doc.add_class(ghost, "x"), Err(HostError::NodeNotFound(ghost)));
    assert_eq!(
        doc.set_style(ghost, "opacity", "0"),
        Err(HostError::NodeNotFound(ghost))
    );
    assert!(doc
        .apply_update(DocumentUpdate::InsertElement {
            parent: ghost,
            node: NodeKey(1000),
            tag: String::from("div"),
            pos: 0,
        })
        .is_err());
}

#[test]
fn computed_style_resolution_order() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let section = doc.append_element(body, "section");
    let para = doc.append_element(section, "p");

    assert_eq!(doc.computed_style(para, "font-size").as_deref(), Some("16px"));

    doc.set_attribute(section, "style", "font-size: 20px").unwrap();
    assert_eq!(doc.computed_style(para, "font-size").as_deref(), Some("20px"));

    doc.set_computed_style(para, "font-size", "24px");
    assert_eq!(doc.computed_style(para, "font-size").as_deref(), Some("24px"));

    // Non-inherited properties do not walk up the tree.
    doc.set_style(section, "margin-bottom", "4px").unwrap();
    assert_eq!(doc.computed_style(para, "margin-bottom"), None);
}

#[test]
fn removing_a_subtree_drops_descendants() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let list = doc.append_element(body, "ul");
    let item = doc.append_element(list, "li");
    doc.apply_update(DocumentUpdate::RemoveNode { node: list }).unwrap();
    assert!(doc.query_selector_all("li").is_empty());
    assert!(doc.tag_name(item).is_none());
    assert!(doc.children(body).is_empty());
}

#[test]
fn explicit_insert_position() {
    let mut doc = MemoryDocument::with_body();
    let body = doc.body().unwrap();
    let last = doc.append_element(body, "div");
    doc.apply_update(DocumentUpdate::InsertElement {
        parent: body,
        node: NodeKey(500),
        tag: String::from("DIV"),
        pos: 0,
    })
    .unwrap();
    assert_eq!(doc.query_selector_all("div"), vec![NodeKey(500), last]);
    // Keys minted afterwards do not collide with explicit ones.
    let next = doc.append_element(body, "span");
    assert!(next.0 > 500);
}

#[test]
fn style_sheets_in_load_order() {
    let mut doc = MemoryDocument::new();
    doc.add_style_sheet(StyleSheetInfo {
        href: Some(String::from("https://example.com/site.css")),
        rules: vec![CssRuleInfo::style_rule("body", "margin: 0")],
    });
    doc.add_style_sheet(StyleSheetInfo::default());
    let sheets = doc.style_sheets();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].rules[0].css_text, "body { margin: 0 }");
    assert!(sheets[1].href.is_none());
}
