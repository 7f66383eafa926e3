//! Reading numeric lengths back out of computed style strings.
//!
//! Hosts usually report a computed `font-size` in px, but headless documents
//! may hand back the declared value, so the relative font units are resolved
//! too. Keywords and viewport units are not lengths here.

/// Font sizes that relative font units resolve against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontBasis {
    /// Font size of the element's parent, for `em` and `%`.
    pub parent_px: f32,
    /// Font size of the root element, for `rem`.
    pub root_px: f32,
}

impl Default for FontBasis {
    fn default() -> Self {
        Self {
            parent_px: 16.0,
            root_px: 16.0,
        }
    }
}

/// A font length as it appears in a style string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontLength {
    Px(f32),
    Em(f32),
    Rem(f32),
    Percent(f32),
}

impl FontLength {
    /// Parse `16px`, `1.5em`, `2rem` or `120%`. A bare number is read as px.
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_ascii_lowercase();
        // `rem` before `em`: both end in "em".
        if let Some(number) = lower.strip_suffix("rem") {
            return finite_number(number).map(Self::Rem);
        }
        if let Some(number) = lower.strip_suffix("em") {
            return finite_number(number).map(Self::Em);
        }
        if let Some(number) = lower.strip_suffix("px") {
            return finite_number(number).map(Self::Px);
        }
        if let Some(number) = lower.strip_suffix('%') {
            return finite_number(number).map(Self::Percent);
        }
        finite_number(&lower).map(Self::Px)
    }

    pub fn to_px(self, basis: &FontBasis) -> f32 {
        match self {
            Self::Px(value) => value,
            Self::Em(value) => value * basis.parent_px,
            Self::Rem(value) => value * basis.root_px,
            Self::Percent(value) => value * basis.parent_px / 100.0,
        }
    }
}

/// Resolve a computed `font-size` to whole pixels, truncating toward zero.
pub fn font_size_whole_px(input: &str, basis: &FontBasis) -> Option<f32> {
    let pixels = FontLength::parse(input)?.to_px(basis);
    pixels.is_finite().then(|| pixels.trunc())
}

/// Format a pixel value the way inline styles carry it (`8px`, `8.5px`).
pub fn px(value: f32) -> String {
    format!("{value}px")
}

/// A plain decimal number. `inf`, `NaN` and anything with trailing text are rejected.
fn finite_number(text: &str) -> Option<f32> {
    let starts_numeric = text.starts_with(|ch: char| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.'));
    if !starts_numeric {
        return None;
    }
    text.parse::<f32>().ok().filter(|value| value.is_finite())
}
