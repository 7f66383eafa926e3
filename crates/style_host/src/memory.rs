//! A small in-memory document for headless hosts and tests.
//!
//! The document is fed with [`DocumentUpdate`] values (or the convenience
//! builders) and keeps just enough state for the styling helpers: tags, ids,
//! class lists, inline styles, computed-style overrides, tree order and the
//! loaded style sheets. Selector support is limited to compound simple
//! selectors (`tag`, `.class`, `#id`) and comma-separated lists of them.

use crate::{Document, HostError, NodeKey, StyleSheetInfo, validate_class_token};
use anyhow::{Result, bail};
use log::{debug, warn};
use std::collections::HashMap;

/// A batchable update applied to the in-memory document.
#[derive(Debug, Clone)]
pub enum DocumentUpdate {
    InsertElement {
        parent: NodeKey,
        node: NodeKey,
        tag: String,
        pos: usize,
    },
    SetAttr {
        node: NodeKey,
        name: String,
        value: String,
    },
    RemoveNode {
        node: NodeKey,
    },
}

/// Properties that inherit from the parent when no value is set on a node.
const INHERITED_PROPERTIES: &[&str] = &["font-size", "line-height", "color", "font-family"];

/// Initial values used when nothing in the ancestor chain sets a property.
fn initial_value(property: &str) -> Option<&'static str> {
    match property {
        "font-size" => Some("16px"),
        "line-height" => Some("normal"),
        "color" => Some("rgb(0, 0, 0)"),
        "opacity" => Some("1"),
        "background-color" => Some("rgba(0, 0, 0, 0)"),
        _ => None,
    }
}

/// In-memory document state.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    /// Map node -> tag name, lowercase.
    tag_by_key: HashMap<NodeKey, String>,
    /// Map node -> id attribute.
    id_by_key: HashMap<NodeKey, String>,
    /// Map node -> class tokens in insertion order.
    classes_by_key: HashMap<NodeKey, Vec<String>>,
    /// Map node -> inline declarations in insertion order.
    styles_by_key: HashMap<NodeKey, Vec<(String, String)>>,
    /// Map node -> computed values supplied by the host's style engine.
    computed_by_key: HashMap<NodeKey, HashMap<String, String>>,
    children_by_parent: HashMap<NodeKey, Vec<NodeKey>>,
    parent_by_child: HashMap<NodeKey, NodeKey>,
    body: Option<NodeKey>,
    sheets: Vec<StyleSheetInfo>,
    next_key: u64,
}

impl MemoryDocument {
    /// Create an empty document (root only, no body).
    pub fn new() -> Self {
        Self {
            next_key: 1,
            ..Self::default()
        }
    }

    /// Create a document containing `<html><body></body></html>`.
    pub fn with_body() -> Self {
        let mut document = Self::new();
        let html = document.append_element(NodeKey::ROOT, "html");
        document.append_element(html, "body");
        document
    }

    /// Apply a single update.
    pub fn apply_update(&mut self, update: DocumentUpdate) -> Result<()> {
        match update {
            DocumentUpdate::InsertElement {
                parent,
                node,
                tag,
                pos,
            } => {
                if parent != NodeKey::ROOT && !self.tag_by_key.contains_key(&parent) {
                    bail!("cannot insert {node:?}: unknown parent {parent:?}");
                }
                self.parent_by_child.insert(node, parent);
                let siblings = self.children_by_parent.entry(parent).or_default();
                if !siblings.contains(&node) {
                    siblings.insert(pos.min(siblings.len()), node);
                }
                let tag_lc = tag.to_ascii_lowercase();
                if tag_lc == "body" && self.body.is_none() {
                    self.body = Some(node);
                }
                self.tag_by_key.insert(node, tag_lc);
                self.next_key = self.next_key.max(node.0.saturating_add(1));
            }
            DocumentUpdate::SetAttr { node, name, value } => {
                if !self.tag_by_key.contains_key(&node) {
                    bail!("cannot set attribute {name} on unknown node {node:?}");
                }
                match name.to_ascii_lowercase().as_str() {
                    "id" => {
                        if value.is_empty() {
                            self.id_by_key.remove(&node);
                        } else {
                            self.id_by_key.insert(node, value);
                        }
                    }
                    "class" => {
                        let mut tokens: Vec<String> = Vec::new();
                        for token in value.split_whitespace() {
                            if !tokens.iter().any(|existing| existing == token) {
                                tokens.push(token.to_owned());
                            }
                        }
                        self.classes_by_key.insert(node, tokens);
                    }
                    "style" => {
                        let declarations = parse_style_attribute(&value);
                        self.styles_by_key.insert(node, declarations);
                    }
                    other => debug!("MemoryDocument: ignoring attribute {other}"),
                }
            }
            DocumentUpdate::RemoveNode { node } => {
                if let Some(parent) = self.parent_by_child.get(&node).copied() {
                    if let Some(siblings) = self.children_by_parent.get_mut(&parent) {
                        siblings.retain(|child| *child != node);
                    }
                }
                self.remove_recursively(node);
            }
        }
        Ok(())
    }

    /// Append a new element as the last child of `parent` and return its key.
    ///
    /// Unknown parents are logged and the element is attached to the root.
    pub fn append_element(&mut self, parent: NodeKey, tag: &str) -> NodeKey {
        let node = NodeKey(self.next_key);
        let known_parent = if parent == NodeKey::ROOT || self.tag_by_key.contains_key(&parent) {
            parent
        } else {
            warn!("MemoryDocument: unknown parent {parent:?}, attaching to root");
            NodeKey::ROOT
        };
        let pos = self
            .children_by_parent
            .get(&known_parent)
            .map_or(0, Vec::len);
        if let Err(err) = self.apply_update(DocumentUpdate::InsertElement {
            parent: known_parent,
            node,
            tag: tag.to_owned(),
            pos,
        }) {
            warn!("MemoryDocument: {err}");
        }
        node
    }

    /// Set an attribute on an existing element.
    pub fn set_attribute(&mut self, node: NodeKey, name: &str, value: &str) -> Result<()> {
        self.apply_update(DocumentUpdate::SetAttr {
            node,
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Record a computed value for a node, as a host style engine would resolve it.
    pub fn set_computed_style(&mut self, node: NodeKey, property: &str, value: &str) {
        self.computed_by_key
            .entry(node)
            .or_default()
            .insert(property.to_ascii_lowercase(), value.to_owned());
    }

    /// Register a loaded style sheet.
    pub fn add_style_sheet(&mut self, sheet: StyleSheetInfo) {
        self.sheets.push(sheet);
    }

    /// Tag name of a node, lowercase.
    pub fn tag_name(&self, node: NodeKey) -> Option<&str> {
        self.tag_by_key.get(&node).map(String::as_str)
    }

    /// Direct children of a node in order.
    pub fn children(&self, node: NodeKey) -> &[NodeKey] {
        self.children_by_parent
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn remove_recursively(&mut self, node: NodeKey) {
        if let Some(children) = self.children_by_parent.remove(&node) {
            for child in children {
                self.remove_recursively(child);
            }
        }
        self.parent_by_child.remove(&node);
        self.tag_by_key.remove(&node);
        self.id_by_key.remove(&node);
        self.classes_by_key.remove(&node);
        self.styles_by_key.remove(&node);
        self.computed_by_key.remove(&node);
        if self.body == Some(node) {
            self.body = None;
        }
    }

    fn require(&self, node: NodeKey) -> Result<(), HostError> {
        if self.tag_by_key.contains_key(&node) {
            Ok(())
        } else {
            Err(HostError::NodeNotFound(node))
        }
    }

    /// Pre-order traversal of every element below the root.
    fn elements_in_order(&self) -> Vec<NodeKey> {
        fn walk(document: &MemoryDocument, node: NodeKey, out: &mut Vec<NodeKey>) {
            if let Some(children) = document.children_by_parent.get(&node) {
                for child in children {
                    if document.tag_by_key.contains_key(child) {
                        out.push(*child);
                    }
                    walk(document, *child, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self, NodeKey::ROOT, &mut out);
        out
    }

    fn matches(&self, node: NodeKey, selector: &CompoundSelector) -> bool {
        if let Some(tag) = &selector.tag {
            if self.tag_by_key.get(&node) != Some(tag) {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if self.id_by_key.get(&node) != Some(id) {
                return false;
            }
        }
        selector
            .classes
            .iter()
            .all(|class| self.has_class(node, class))
    }
}

impl Document for MemoryDocument {
    fn body(&self) -> Option<NodeKey> {
        self.body
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeKey> {
        let Some(compounds) = parse_selector_list(selector) else {
            warn!("MemoryDocument: unsupported selector '{selector}'");
            return Vec::new();
        };
        self.elements_in_order()
            .into_iter()
            .filter(|node| compounds.iter().any(|compound| self.matches(*node, compound)))
            .collect()
    }

    fn add_class(&mut self, node: NodeKey, class: &str) -> Result<(), HostError> {
        validate_class_token(class)?;
        self.require(node)?;
        let tokens = self.classes_by_key.entry(node).or_default();
        if !tokens.iter().any(|token| token == class) {
            tokens.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeKey, class: &str) -> Result<(), HostError> {
        validate_class_token(class)?;
        self.require(node)?;
        if let Some(tokens) = self.classes_by_key.get_mut(&node) {
            tokens.retain(|token| token != class);
        }
        Ok(())
    }

    fn has_class(&self, node: NodeKey, class: &str) -> bool {
        self.classes_by_key
            .get(&node)
            .is_some_and(|tokens| tokens.iter().any(|token| token == class))
    }

    fn class_list(&self, node: NodeKey) -> Vec<String> {
        self.classes_by_key.get(&node).cloned().unwrap_or_default()
    }

    fn set_style(&mut self, node: NodeKey, property: &str, value: &str) -> Result<(), HostError> {
        self.require(node)?;
        let name = property.trim().to_ascii_lowercase();
        let declarations = self.styles_by_key.entry(node).or_default();
        if let Some(existing) = declarations.iter_mut().find(|(prop, _)| *prop == name) {
            existing.1 = value.to_owned();
        } else {
            declarations.push((name, value.to_owned()));
        }
        Ok(())
    }

    fn inline_style(&self, node: NodeKey, property: &str) -> Option<String> {
        let name = property.trim().to_ascii_lowercase();
        self.styles_by_key
            .get(&node)?
            .iter()
            .find(|(prop, _)| *prop == name)
            .map(|(_, value)| value.clone())
    }

    fn computed_style(&self, node: NodeKey, property: &str) -> Option<String> {
        let name = property.trim().to_ascii_lowercase();
        let mut current = node;
        loop {
            if !self.tag_by_key.contains_key(&current) {
                return None;
            }
            if let Some(value) = self
                .computed_by_key
                .get(&current)
                .and_then(|values| values.get(&name))
            {
                return Some(value.clone());
            }
            if let Some(value) = self.inline_style(current, &name) {
                return Some(value);
            }
            if !INHERITED_PROPERTIES.contains(&name.as_str()) {
                break;
            }
            match self.parent_by_child.get(&current) {
                Some(parent) if *parent != NodeKey::ROOT => current = *parent,
                _ => break,
            }
        }
        initial_value(&name).map(str::to_owned)
    }

    fn style_sheets(&self) -> Vec<StyleSheetInfo> {
        self.sheets.clone()
    }
}

/// A compound selector: optional tag, optional id, any number of classes.
#[derive(Debug, Default, PartialEq, Eq)]
struct CompoundSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

/// Parse `a.b#c, .d` into compounds. Returns `None` for unsupported syntax.
fn parse_selector_list(input: &str) -> Option<Vec<CompoundSelector>> {
    let mut out = Vec::new();
    for part in input.split(',') {
        out.push(parse_compound(part.trim())?);
    }
    Some(out)
}

fn parse_compound(input: &str) -> Option<CompoundSelector> {
    if input.is_empty() {
        return None;
    }
    let mut selector = CompoundSelector::default();
    let mut rest = input;
    let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
    if tag_end > 0 {
        let tag = &rest[..tag_end];
        if tag != "*" {
            if !is_ident(tag) {
                return None;
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
    }
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_ident(name) {
            return None;
        }
        if marker == '.' {
            selector.classes.push(name.to_owned());
        } else {
            selector.id = Some(name.to_owned());
        }
        rest = &body[end..];
    }
    Some(selector)
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// Parse `prop: value; prop2: value2` into ordered declarations.
fn parse_style_attribute(input: &str) -> Vec<(String, String)> {
    let mut declarations: Vec<(String, String)> = Vec::new();
    for chunk in input.split(';') {
        let Some((prop, value)) = chunk.split_once(':') else {
            continue;
        };
        let name = prop.trim().to_ascii_lowercase();
        if name.is_empty() {
            continue;
        }
        let value = value.trim().to_owned();
        if let Some(existing) = declarations.iter_mut().find(|(prop_name, _)| *prop_name == name) {
            existing.1 = value;
        } else {
            declarations.push((name, value));
        }
    }
    declarations
}
