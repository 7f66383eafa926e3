//! Spacing adjustment derived from font metrics and viewport width.

use crate::config::SmartCssConfig;
use crate::values::{FontBasis, font_size_whole_px, px};
use log::{debug, warn};
use style_host::{Environment, HostError, NodeKey};

/// Selector of the elements whose spacing follows the viewport.
pub const SPACING_SELECTOR: &str = ".spacing";
/// Class toggled on spacing elements for narrow viewports.
pub const MOBILE_SPACING_CLASS: &str = "mobile-spacing";

/// Set each element's `margin-bottom` to half of its computed font size.
///
/// Elements whose font size cannot be resolved are skipped. Returns the
/// number of elements that received a margin.
pub fn auto_spacing(env: &mut Environment, elements: &[NodeKey]) -> Result<usize, HostError> {
    let basis = FontBasis::default();
    let mut applied = 0usize;
    for &element in elements {
        let computed = env.document().computed_style(element, "font-size");
        let Some(font_size) = computed
            .as_deref()
            .and_then(|value| font_size_whole_px(value, &basis))
        else {
            warn!("auto_spacing: no usable font-size on {element:?} ({computed:?}), skipping");
            continue;
        };
        let margin = px(font_size / 2.0);
        debug!("auto_spacing: {element:?} font-size {font_size}px -> margin-bottom {margin}");
        env.document_mut()
            .set_style(element, "margin-bottom", &margin)?;
        applied += 1;
    }
    Ok(applied)
}

/// Toggle [`MOBILE_SPACING_CLASS`] on every `.spacing` element from the window width.
///
/// Returns the number of elements visited; an empty match is not an error.
pub fn optimize_spacing_for_responsive(
    config: &SmartCssConfig,
    env: &mut Environment,
) -> Result<usize, HostError> {
    let elements = env.document().query_selector_all(SPACING_SELECTOR);
    if elements.is_empty() {
        return Ok(0);
    }
    let mobile = config.is_mobile_width(env.inner_width()?);
    let document = env.document_mut();
    for &element in &elements {
        if mobile {
            document.add_class(element, MOBILE_SPACING_CLASS)?;
        } else {
            document.remove_class(element, MOBILE_SPACING_CLASS)?;
        }
    }
    Ok(elements.len())
}
