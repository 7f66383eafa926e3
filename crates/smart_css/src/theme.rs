//! Theme names composed from user preference flags.

use serde::{Deserialize, Serialize};
use style_host::{Environment, HostError, validate_class_token};

/// User display preferences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

/// `dark` or `light`, with `-high-contrast` appended when requested.
pub fn generate_theme(preferences: ThemePreferences) -> String {
    let base = if preferences.dark_mode { "dark" } else { "light" };
    if preferences.high_contrast {
        format!("{base}-high-contrast")
    } else {
        base.to_owned()
    }
}

/// Add `theme` as a class on the body.
///
/// `theme` must be a single class token; empty or whitespace-separated names
/// are rejected with [`HostError::InvalidClassToken`] and the body is left alone.
pub fn apply_user_theme(env: &mut Environment, theme: &str) -> Result<(), HostError> {
    validate_class_token(theme)?;
    let body = env.body()?;
    env.document_mut().add_class(body, theme)
}
