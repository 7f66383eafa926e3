//! One entry point for every helper group, bound to a configuration and a
//! diagnostic logger.

use crate::animation::{self, Action};
use crate::config::SmartCssConfig;
use crate::layout::{self, ConnectionLayout, LayoutMode};
use crate::performance::{self, CssReport};
use crate::responsive::{self, Breakpoint};
use crate::semantic;
use crate::spacing;
use crate::theme::{self, ThemePreferences};
use crate::transition::{SharedEnvironment, StartOutcome, TransitionDriver, TransitionError};
use std::sync::Arc;
use style_host::{ConsoleLogger, Environment, HostError, HostLogger, LogLevel, NodeKey};

/// Line logged by [`SmartCss::optimize_layout_animation`].
pub const LAYOUT_ANIMATION_NOTICE: &str = "Applying smooth layout animations";

/// Aggregates the responsive, spacing, layout, semantic, theme, performance,
/// animation and transition helpers.
pub struct SmartCss {
    config: SmartCssConfig,
    logger: Arc<dyn HostLogger>,
    transitions: TransitionDriver,
}

impl Default for SmartCss {
    fn default() -> Self {
        Self::new(SmartCssConfig::default())
    }
}

impl SmartCss {
    /// Helpers with `config`, logging diagnostics through [`ConsoleLogger`].
    pub fn new(config: SmartCssConfig) -> Self {
        Self::with_logger(config, Arc::new(ConsoleLogger))
    }

    pub fn with_logger(config: SmartCssConfig, logger: Arc<dyn HostLogger>) -> Self {
        let transitions = TransitionDriver::new(config.fade_duration());
        Self {
            config,
            logger,
            transitions,
        }
    }

    pub const fn config(&self) -> &SmartCssConfig {
        &self.config
    }

    // Responsive design

    pub fn auto_breakpoints(&self, content: &str) -> Vec<Breakpoint> {
        responsive::auto_breakpoints(&self.config, content)
    }

    pub fn adjust_layout_based_on_content(&self, env: &mut Environment) -> Result<bool, HostError> {
        responsive::adjust_layout_based_on_content(&self.config, env)
    }

    // Spacing adjustment

    pub fn auto_spacing(&self, env: &mut Environment, elements: &[NodeKey]) -> Result<usize, HostError> {
        spacing::auto_spacing(env, elements)
    }

    pub fn optimize_spacing_for_responsive(&self, env: &mut Environment) -> Result<usize, HostError> {
        spacing::optimize_spacing_for_responsive(&self.config, env)
    }

    // Dynamic layout

    pub fn switch_layout_based_on_conditions(
        &self,
        env: &mut Environment,
    ) -> Result<ConnectionLayout, HostError> {
        layout::switch_layout_based_on_conditions(env)
    }

    pub fn detect_best_layout(&self, env: &Environment, content: &str) -> Result<LayoutMode, HostError> {
        layout::detect_best_layout(&self.config, env, content)
    }

    // Semantic styling

    pub fn apply_semantic_styles(&self, env: &mut Environment) -> Result<usize, HostError> {
        semantic::apply_semantic_styles(env)
    }

    pub fn optimize_for_accessibility(&self, env: &mut Environment) -> Result<(), HostError> {
        semantic::optimize_for_accessibility(env)
    }

    // Theme customization

    pub fn generate_theme(&self, preferences: ThemePreferences) -> String {
        theme::generate_theme(preferences)
    }

    pub fn apply_user_theme(&self, env: &mut Environment, theme: &str) -> Result<(), HostError> {
        theme::apply_user_theme(env, theme)
    }

    // CSS performance

    pub fn analyze_css_performance(&self, env: &Environment) -> CssReport {
        performance::analyze_css_performance(env, self.logger.as_ref())
    }

    pub fn suggest_css_optimization(&self, env: &Environment) -> Vec<String> {
        performance::suggest_css_optimization(env, self.logger.as_ref())
    }

    // Contextual animation

    pub fn animate_on_action(
        &self,
        env: &mut Environment,
        element: NodeKey,
        action: &str,
    ) -> Result<bool, HostError> {
        animation::animate_on_action(env, element, &Action::parse(action))
    }

    pub fn optimize_animation_for_context(&self, env: &mut Environment) -> Result<usize, HostError> {
        animation::optimize_animation_for_context(env)
    }

    // Layout transition

    /// Cross-fade from the first match of `from` to the first match of `to`.
    ///
    /// Rejects the call with [`TransitionError::InFlight`] while another
    /// transition started through this instance is running.
    pub async fn animate_layout_transition(
        &self,
        env: &SharedEnvironment,
        from: &str,
        to: &str,
    ) -> Result<StartOutcome, TransitionError> {
        self.transitions.run(env, from, to).await
    }

    /// Cancel the running layout transition, if any.
    pub fn cancel_layout_transition(&self) -> bool {
        self.transitions.cancel()
    }

    pub fn optimize_layout_animation(&self) {
        self.logger.log(LogLevel::Info, LAYOUT_ANIMATION_NOTICE);
    }
}
