//! Dynamic layout selection from connection quality, viewport and content size.

use crate::config::SmartCssConfig;
use crate::responsive::content_length;
use core::fmt::{Display, Formatter, Result as FmtResult};
use log::debug;
use style_host::{EffectiveType, Environment, HostError};

/// Body class for fast connections.
pub const HIGH_SPEED_LAYOUT_CLASS: &str = "high-speed-layout";
/// Body class for everything else, including unknown connections.
pub const LOW_SPEED_LAYOUT_CLASS: &str = "low-speed-layout";

/// Layout mode recommended for a block of content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Flex,
    Grid,
    Block,
}

impl LayoutMode {
    /// The CSS `display` keyword for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::Block => "block",
        }
    }
}

impl Display for LayoutMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

/// Connection class chosen by [`switch_layout_based_on_conditions`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConnectionLayout {
    HighSpeed,
    LowSpeed,
}

impl ConnectionLayout {
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::HighSpeed => HIGH_SPEED_LAYOUT_CLASS,
            Self::LowSpeed => LOW_SPEED_LAYOUT_CLASS,
        }
    }

    const fn opposite(self) -> Self {
        match self {
            Self::HighSpeed => Self::LowSpeed,
            Self::LowSpeed => Self::HighSpeed,
        }
    }
}

/// Tag the body with the layout class matching the current connection.
///
/// Only a `4g` effective type counts as high speed. A host without network
/// information is treated as an unknown, low-speed connection. The opposite
/// class is removed so a changed connection flips the layout.
pub fn switch_layout_based_on_conditions(
    env: &mut Environment,
) -> Result<ConnectionLayout, HostError> {
    let body = env.body()?;
    let layout = match env.effective_type() {
        Ok(EffectiveType::FourG) => ConnectionLayout::HighSpeed,
        Ok(other) => {
            debug!("switch_layout_based_on_conditions: effective type {other}");
            ConnectionLayout::LowSpeed
        }
        Err(err) => {
            debug!("switch_layout_based_on_conditions: {err}, assuming low speed");
            ConnectionLayout::LowSpeed
        }
    };
    let document = env.document_mut();
    document.remove_class(body, layout.opposite().class_name())?;
    document.add_class(body, layout.class_name())?;
    Ok(layout)
}

/// Recommend a layout mode: flex on narrow bodies, otherwise grid for long
/// content and block for short content.
pub fn detect_best_layout(
    config: &SmartCssConfig,
    env: &Environment,
    content: &str,
) -> Result<LayoutMode, HostError> {
    let width = env.body_offset_width()?;
    Ok(best_layout_for(config, width, content_length(content)))
}

/// Pure decision rule behind [`detect_best_layout`].
pub fn best_layout_for(config: &SmartCssConfig, width: f32, length: usize) -> LayoutMode {
    if config.is_mobile_width(width) {
        LayoutMode::Flex
    } else if length > config.grid_content_threshold {
        LayoutMode::Grid
    } else {
        LayoutMode::Block
    }
}
