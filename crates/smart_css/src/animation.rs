//! Contextual animations keyed by a user action.

use log::debug;
use style_host::{Environment, HostError, NodeKey};

/// Selector of elements that opt into animation tuning.
pub const ANIMATE_SELECTOR: &str = ".animate";
pub const OPTIMIZED_ANIMATION_CLASS: &str = "optimized-animation";

/// A user action that may trigger an animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Click,
    Hover,
    Other(String),
}

impl Action {
    /// Map an event label; matching is exact, like DOM event type names.
    pub fn parse(label: &str) -> Self {
        match label {
            "click" => Self::Click,
            "hover" => Self::Hover,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Inline declarations for this action, or none for unknown actions.
    pub fn declarations(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Click => &[
                ("transition", "transform 0.3s ease-in-out"),
                ("transform", "scale(1.1)"),
            ],
            Self::Hover => &[
                ("transition", "background-color 0.3s ease"),
                ("background-color", "rgba(0, 0, 0, 0.1)"),
            ],
            Self::Other(_) => &[],
        }
    }
}

/// Apply the transition and effect for `action` to `element`.
///
/// Returns whether anything was applied.
pub fn animate_on_action(
    env: &mut Environment,
    element: NodeKey,
    action: &Action,
) -> Result<bool, HostError> {
    let declarations = action.declarations();
    if declarations.is_empty() {
        debug!("animate_on_action: no animation for {action:?}");
        return Ok(false);
    }
    let document = env.document_mut();
    for (property, value) in declarations {
        document.set_style(element, property, value)?;
    }
    Ok(true)
}

/// Add [`OPTIMIZED_ANIMATION_CLASS`] to every `.animate` element.
pub fn optimize_animation_for_context(env: &mut Environment) -> Result<usize, HostError> {
    let elements = env.document().query_selector_all(ANIMATE_SELECTOR);
    let document = env.document_mut();
    for &element in &elements {
        document.add_class(element, OPTIMIZED_ANIMATION_CLASS)?;
    }
    Ok(elements.len())
}
