use crate::{HostError, NodeKey};

/// A single rule of a loaded style sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssRuleInfo {
    /// Selector list of a style rule, empty for at-rules.
    pub selector_text: String,
    /// Serialized rule text.
    pub css_text: String,
}

impl CssRuleInfo {
    /// Build a style rule from its selector and declaration block body.
    pub fn style_rule(selector: &str, declarations: &str) -> Self {
        Self {
            selector_text: selector.trim().to_owned(),
            css_text: format!("{} {{ {} }}", selector.trim(), declarations.trim()),
        }
    }
}

/// Check that `class` is usable as a single class token.
///
/// Empty tokens and tokens containing ASCII whitespace are rejected, as a
/// browser `classList` does.
pub fn validate_class_token(class: &str) -> Result<(), HostError> {
    if class.is_empty() || class.contains(|ch: char| ch.is_ascii_whitespace()) {
        return Err(HostError::InvalidClassToken(class.to_owned()));
    }
    Ok(())
}

/// A style sheet as exposed by the host, in load order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheetInfo {
    /// Location the sheet was loaded from; `None` for inline `<style>` sheets.
    pub href: Option<String>,
    pub rules: Vec<CssRuleInfo>,
}

/// Document capability used by the styling helpers.
///
/// Queries return elements in document order. A query that matches nothing
/// yields an empty result rather than an error; mutating an unknown node
/// yields [`HostError::NodeNotFound`]. Class mutations reject tokens that
/// fail [`validate_class_token`].
pub trait Document: Send {
    /// The `body` element, if the document has one.
    fn body(&self) -> Option<NodeKey>;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<NodeKey>;

    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<NodeKey> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// Add a class token. Adding a present token is a no-op.
    fn add_class(&mut self, node: NodeKey, class: &str) -> Result<(), HostError>;

    /// Remove a class token. Removing an absent token is a no-op.
    fn remove_class(&mut self, node: NodeKey, class: &str) -> Result<(), HostError>;

    /// Whether the node's class list contains `class`.
    fn has_class(&self, node: NodeKey, class: &str) -> bool;

    /// The node's class tokens in insertion order.
    fn class_list(&self, node: NodeKey) -> Vec<String>;

    /// Set an inline style property (CSS property name, e.g. `margin-bottom`).
    fn set_style(&mut self, node: NodeKey, property: &str, value: &str) -> Result<(), HostError>;

    /// Read back an inline style property.
    fn inline_style(&self, node: NodeKey, property: &str) -> Option<String>;

    /// Resolved value of `property` after the cascade.
    fn computed_style(&self, node: NodeKey, property: &str) -> Option<String>;

    /// Loaded style sheets in load order.
    fn style_sheets(&self) -> Vec<StyleSheetInfo>;
}
