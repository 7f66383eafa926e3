//! Context-aware styling helpers.
//!
//! Each module is one stateless helper group that reads metrics from an
//! injected [`style_host::Environment`] and writes classes or inline styles
//! back. [`SmartCss`] bundles all groups behind a shared configuration.

pub mod animation;
pub mod config;
pub mod facade;
pub mod layout;
pub mod performance;
pub mod responsive;
pub mod semantic;
pub mod spacing;
pub mod theme;
pub mod transition;
pub mod values;

pub use animation::Action;
pub use config::SmartCssConfig;
pub use facade::SmartCss;
pub use layout::{ConnectionLayout, LayoutMode};
pub use performance::{CssReport, SheetSummary};
pub use responsive::Breakpoint;
pub use theme::ThemePreferences;
pub use transition::{
    LayoutTransition, SharedEnvironment, StartOutcome, TransitionDriver, TransitionError,
    TransitionPhase,
};
