//! Configuration for the styling helpers.
//!
//! This module defines the thresholds behind the responsive, layout and
//! transition rules. Configuration can be loaded from environment variables
//! or constructed programmatically; [`SmartCssConfig::default`] carries the
//! stock thresholds used by the free functions of each group.

use core::time::Duration;
use log::warn;
use std::env;

/// Default viewport width (CSS px) below which mobile rules apply.
pub const MOBILE_MAX_WIDTH: f32 = 600.0;
/// Default content length above which the `md` breakpoint is emitted.
pub const MD_CONTENT_THRESHOLD: usize = 1000;
/// Default content length above which the `lg` breakpoint is emitted.
pub const LG_CONTENT_THRESHOLD: usize = 5000;
/// Default content length above which wide viewports use a grid layout.
pub const GRID_CONTENT_THRESHOLD: usize = 1000;
/// Default fade duration of a layout transition in milliseconds.
pub const FADE_DURATION_MS: u64 = 500;

/// Runtime configuration for the styling helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct SmartCssConfig {
    /// Widths strictly below this value are treated as mobile
    pub mobile_max_width: f32,
    /// Content longer than this gets the `md` breakpoint
    pub md_content_threshold: usize,
    /// Content longer than this also gets the `lg` breakpoint
    pub lg_content_threshold: usize,
    /// Content longer than this prefers a grid layout on wide viewports
    pub grid_content_threshold: usize,
    /// Fade-out phase length of a layout transition in milliseconds
    pub fade_duration_ms: u64,
}

impl Default for SmartCssConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: MOBILE_MAX_WIDTH,
            md_content_threshold: MD_CONTENT_THRESHOLD,
            lg_content_threshold: LG_CONTENT_THRESHOLD,
            grid_content_threshold: GRID_CONTENT_THRESHOLD,
            fade_duration_ms: FADE_DURATION_MS,
        }
    }
}

impl SmartCssConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `SMART_CSS_MOBILE_MAX_WIDTH`: mobile width cutoff in px (default: 600)
    /// - `SMART_CSS_MD_THRESHOLD`: content length for `md` (default: 1000)
    /// - `SMART_CSS_LG_THRESHOLD`: content length for `lg` (default: 5000)
    /// - `SMART_CSS_GRID_THRESHOLD`: content length for grid layout (default: 1000)
    /// - `SMART_CSS_FADE_MS`: transition fade duration in ms (default: 500)
    ///
    /// Values that fail to parse fall back to their defaults.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from a variable lookup, as [`Self::from_env`] does.
    ///
    /// An `lg` threshold below the `md` threshold is raised to it, so `lg`
    /// never appears without `md`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mobile_max_width = lookup("SMART_CSS_MOBILE_MAX_WIDTH")
            .and_then(|val| val.trim().parse::<f32>().ok())
            .filter(|width| width.is_finite() && *width > 0.0)
            .unwrap_or(defaults.mobile_max_width);
        let parse_usize = |name: &str| lookup(name).and_then(|val| val.trim().parse::<usize>().ok());
        let config = Self {
            mobile_max_width,
            md_content_threshold: parse_usize("SMART_CSS_MD_THRESHOLD")
                .unwrap_or(defaults.md_content_threshold),
            lg_content_threshold: parse_usize("SMART_CSS_LG_THRESHOLD")
                .unwrap_or(defaults.lg_content_threshold),
            grid_content_threshold: parse_usize("SMART_CSS_GRID_THRESHOLD")
                .unwrap_or(defaults.grid_content_threshold),
            fade_duration_ms: lookup("SMART_CSS_FADE_MS")
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(defaults.fade_duration_ms),
        };
        config.normalized()
    }

    /// Raise `lg_content_threshold` to at least `md_content_threshold`.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.lg_content_threshold >= self.md_content_threshold {
            return self;
        }
        warn!(
            "SmartCssConfig: lg threshold {} is below md threshold {}, using {}",
            self.lg_content_threshold, self.md_content_threshold, self.md_content_threshold
        );
        Self {
            lg_content_threshold: self.md_content_threshold,
            ..self
        }
    }

    /// Whether a width counts as a mobile viewport.
    #[inline]
    pub fn is_mobile_width(&self, width: f32) -> bool {
        width < self.mobile_max_width
    }

    /// Get the fade duration as a `Duration`.
    #[inline]
    #[must_use]
    pub const fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> SmartCssConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        SmartCssConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_match_stock_thresholds() {
        let config = SmartCssConfig::default();
        assert!(config.is_mobile_width(599.9));
        assert!(!config.is_mobile_width(600.0));
        assert_eq!(config.fade_duration(), Duration::from_millis(500));
    }

    #[test]
    fn lookup_overrides_every_threshold() {
        let config = from_pairs(&[
            ("SMART_CSS_MOBILE_MAX_WIDTH", "768"),
            ("SMART_CSS_MD_THRESHOLD", " 200 "),
            ("SMART_CSS_LG_THRESHOLD", "800"),
            ("SMART_CSS_GRID_THRESHOLD", "300"),
            ("SMART_CSS_FADE_MS", "250"),
        ]);
        assert_eq!(
            config,
            SmartCssConfig {
                mobile_max_width: 768.0,
                md_content_threshold: 200,
                lg_content_threshold: 800,
                grid_content_threshold: 300,
                fade_duration_ms: 250,
            }
        );
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = from_pairs(&[
            ("SMART_CSS_MOBILE_MAX_WIDTH", "wide"),
            ("SMART_CSS_MD_THRESHOLD", "-5"),
            ("SMART_CSS_LG_THRESHOLD", ""),
            ("SMART_CSS_FADE_MS", "0.5s"),
        ]);
        assert_eq!(config, SmartCssConfig::default());
        let negative_width = from_pairs(&[("SMART_CSS_MOBILE_MAX_WIDTH", "-1")]);
        assert!((negative_width.mobile_max_width - MOBILE_MAX_WIDTH).abs() < f32::EPSILON);
        assert_eq!(from_pairs(&[]), SmartCssConfig::default());
    }

    #[test]
    fn lg_threshold_never_drops_below_md() {
        let config = from_pairs(&[("SMART_CSS_MD_THRESHOLD", "3000"), ("SMART_CSS_LG_THRESHOLD", "100")]);
        assert_eq!(config.md_content_threshold, 3000);
        assert_eq!(config.lg_content_threshold, 3000);

        let inverted = SmartCssConfig {
            md_content_threshold: 50,
            lg_content_threshold: 10,
            ..SmartCssConfig::default()
        };
        assert_eq!(inverted.normalized().lg_content_threshold, 50);
        let stock = SmartCssConfig::default();
        assert_eq!(stock.clone().normalized(), stock);
    }
}
