//! Semantic region tagging and baseline accessible typography.

use csscolorparser::Color as CssColor;
use log::{debug, warn};
use style_host::{Environment, HostError};

pub const SEMANTIC_HEADER_CLASS: &str = "semantic-header";
pub const SEMANTIC_FOOTER_CLASS: &str = "semantic-footer";

/// Body text color set by [`optimize_for_accessibility`].
pub const ACCESSIBLE_TEXT_COLOR: &str = "#333";
/// Body background color set by [`optimize_for_accessibility`].
pub const ACCESSIBLE_BACKGROUND_COLOR: &str = "#f4f4f4";

/// Inline declarations applied to the body by [`optimize_for_accessibility`].
pub const ACCESSIBLE_BODY_STYLES: [(&str, &str); 4] = [
    ("font-size", "1rem"),
    ("line-height", "1.5"),
    ("color", ACCESSIBLE_TEXT_COLOR),
    ("background-color", ACCESSIBLE_BACKGROUND_COLOR),
];

/// Mark every `header` and `footer` element with its semantic class.
///
/// Returns the number of elements tagged.
pub fn apply_semantic_styles(env: &mut Environment) -> Result<usize, HostError> {
    let mut tagged = 0usize;
    for (selector, class) in [("header", SEMANTIC_HEADER_CLASS), ("footer", SEMANTIC_FOOTER_CLASS)] {
        let elements = env.document().query_selector_all(selector);
        for element in elements {
            env.document_mut().add_class(element, class)?;
            tagged += 1;
        }
    }
    Ok(tagged)
}

/// Apply readable baseline typography and colors to the body.
pub fn optimize_for_accessibility(env: &mut Environment) -> Result<(), HostError> {
    let body = env.body()?;
    let document = env.document_mut();
    for (property, value) in ACCESSIBLE_BODY_STYLES {
        document.set_style(body, property, value)?;
    }
    match contrast_ratio(ACCESSIBLE_TEXT_COLOR, ACCESSIBLE_BACKGROUND_COLOR) {
        Some(ratio) => debug!("optimize_for_accessibility: body contrast ratio {ratio:.2}:1"),
        None => warn!("optimize_for_accessibility: could not compute body contrast"),
    }
    Ok(())
}

/// WCAG contrast ratio between two CSS colors, from 1.0 to 21.0.
///
/// Alpha is ignored. Returns `None` if either color fails to parse.
pub fn contrast_ratio(foreground: &str, background: &str) -> Option<f64> {
    let fg = relative_luminance(foreground)?;
    let bg = relative_luminance(background)?;
    let (lighter, darker) = if fg >= bg { (fg, bg) } else { (bg, fg) };
    Some((lighter + 0.05) / (darker + 0.05))
}

fn relative_luminance(input: &str) -> Option<f64> {
    let parsed: CssColor = input.parse().ok()?;
    let rgba = parsed.to_rgba8();
    let linear = |channel: u8| {
        let srgb = f64::from(channel) / 255.0;
        if srgb <= 0.039_28 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.0722f64.mul_add(
        linear(rgba[2]),
        0.2126f64.mul_add(linear(rgba[0]), 0.7152 * linear(rgba[1])),
    ))
}
