//! Responsive design: breakpoint selection and the mobile layout toggle.

use crate::config::SmartCssConfig;
use core::fmt::{Display, Formatter, Result as FmtResult};
use log::debug;
use style_host::{Environment, HostError};

/// Class toggled on the body for narrow documents.
pub const MOBILE_LAYOUT_CLASS: &str = "mobile-layout";

/// Named responsive breakpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Md,
    Lg,
}

impl Breakpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl Display for Breakpoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

/// Length of caller content in UTF-16 code units, as a browser host counts it.
pub fn content_length(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Breakpoints worth generating for `content`, smallest first.
///
/// Nothing up to the `md` threshold, `md` above it, `md` and `lg` above the
/// `lg` threshold. `lg` is only emitted together with `md`, even when the
/// configured `lg` threshold is the smaller one.
pub fn auto_breakpoints(config: &SmartCssConfig, content: &str) -> Vec<Breakpoint> {
    let length = content_length(content);
    let mut breakpoints = Vec::with_capacity(2);
    if length > config.md_content_threshold {
        breakpoints.push(Breakpoint::Md);
        if length > config.lg_content_threshold {
            breakpoints.push(Breakpoint::Lg);
        }
    }
    breakpoints
}

/// Toggle [`MOBILE_LAYOUT_CLASS`] on the body from the body's offset width.
///
/// Returns whether the mobile layout is active afterwards.
pub fn adjust_layout_based_on_content(
    config: &SmartCssConfig,
    env: &mut Environment,
) -> Result<bool, HostError> {
    let body = env.body()?;
    let width = env.body_offset_width()?;
    let mobile = config.is_mobile_width(width);
    debug!("adjust_layout_based_on_content: body width {width}px, mobile={mobile}");
    let document = env.document_mut();
    if mobile {
        document.add_class(body, MOBILE_LAYOUT_CLASS)?;
    } else {
        document.remove_class(body, MOBILE_LAYOUT_CLASS)?;
    }
    Ok(mobile)
}
