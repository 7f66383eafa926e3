//! Cross-fade between two document regions.
//!
//! [`LayoutTransition`] is a two-phase state machine driven by explicit clock
//! ticks:
//!
//! ```text
//! Idle --start--> FadingOut --advance(now >= hide_at)--> Revealing --advance--> Idle
//! ```
//!
//! Only one transition may be in flight; a second `start` is rejected with
//! [`TransitionError::InFlight`] until the first completes or is cancelled.
//! A host error while stepping aborts the transition back to `Idle`.
//! [`TransitionDriver`] runs the machine on the tokio timer.

use crate::config::SmartCssConfig;
use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::time::Duration;
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use style_host::{Environment, HostError, NodeKey};
use tokio::task::yield_now;
use tokio::time::{Instant, sleep_until};

/// `transition` value applied to both regions.
pub const FADE_TRANSITION: &str = "opacity 0.5s ease";

/// Environment shared between the caller and an in-flight [`TransitionDriver`].
pub type SharedEnvironment = Arc<Mutex<Environment>>;

/// Observable phase of a [`LayoutTransition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut,
    Revealing,
}

/// Result of a start request that was not rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// One of the selectors matched nothing; the document was left untouched.
    MissingElements,
}

#[derive(Debug)]
pub enum TransitionError {
    /// Another transition has not finished yet.
    InFlight,
    Host(HostError),
}

impl Display for TransitionError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InFlight => formatter.write_str("a layout transition is already in flight"),
            Self::Host(err) => write!(formatter, "layout transition failed: {err}"),
        }
    }
}

impl Error for TransitionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InFlight => None,
            Self::Host(err) => Some(err),
        }
    }
}

impl From<HostError> for TransitionError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    FadingOut {
        from: NodeKey,
        to: NodeKey,
        hide_at: Instant,
    },
    Revealing {
        to: NodeKey,
    },
}

/// Two-phase fade-out / fade-in state machine with a single in-flight guard.
#[derive(Debug)]
pub struct LayoutTransition {
    state: State,
    fade: Duration,
    generation: u64,
}

impl LayoutTransition {
    pub const fn new(fade: Duration) -> Self {
        Self {
            state: State::Idle,
            fade,
            generation: 0,
        }
    }

    pub const fn from_config(config: &SmartCssConfig) -> Self {
        Self::new(config.fade_duration())
    }

    pub const fn phase(&self) -> TransitionPhase {
        match self.state {
            State::Idle => TransitionPhase::Idle,
            State::FadingOut { .. } => TransitionPhase::FadingOut,
            State::Revealing { .. } => TransitionPhase::Revealing,
        }
    }

    pub const fn is_in_flight(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Incremented by every successful start; lets drivers detect that the
    /// transition they were driving was replaced.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// When the fade-out phase ends, if fading out.
    pub const fn hide_at(&self) -> Option<Instant> {
        match self.state {
            State::FadingOut { hide_at, .. } => Some(hide_at),
            State::Idle | State::Revealing { .. } => None,
        }
    }

    /// Begin fading out the first match of `from_selector`.
    pub fn start(
        &mut self,
        env: &mut Environment,
        from_selector: &str,
        to_selector: &str,
        now: Instant,
    ) -> Result<StartOutcome, TransitionError> {
        if self.is_in_flight() {
            return Err(TransitionError::InFlight);
        }
        let document = env.document_mut();
        let (Some(from), Some(to)) = (
            document.query_selector(from_selector),
            document.query_selector(to_selector),
        ) else {
            debug!("layout transition: '{from_selector}' or '{to_selector}' not found");
            return Ok(StartOutcome::MissingElements);
        };
        document.set_style(from, "transition", FADE_TRANSITION)?;
        document.set_style(from, "opacity", "0")?;
        self.state = State::FadingOut {
            from,
            to,
            hide_at: now + self.fade,
        };
        self.generation = self.generation.wrapping_add(1);
        Ok(StartOutcome::Started)
    }

    /// Step the machine at time `now` and return the phase afterwards.
    ///
    /// While fading out nothing happens before `hide_at`; at or after it the
    /// outgoing region is hidden and the incoming one shown at opacity 0. The
    /// next call fades the incoming region in and returns to idle.
    ///
    /// A host error aborts the transition: the machine is back in `Idle`
    /// when the error is returned, so a new transition can start.
    pub fn advance(
        &mut self,
        env: &mut Environment,
        now: Instant,
    ) -> Result<TransitionPhase, HostError> {
        let applied = match self.state {
            State::Idle => Ok(()),
            State::FadingOut { hide_at, .. } if now < hide_at => Ok(()),
            State::FadingOut { from, to, .. } => {
                self.state = State::Revealing { to };
                swap_regions(env, from, to)
            }
            State::Revealing { to } => {
                self.state = State::Idle;
                fade_in(env, to)
            }
        };
        if let Err(err) = applied {
            warn!("layout transition {} aborted: {err}", self.generation);
            self.state = State::Idle;
            return Err(err);
        }
        Ok(self.phase())
    }

    /// Abandon an in-flight transition; styles already applied stay as they are.
    pub fn cancel(&mut self) -> bool {
        let was_in_flight = self.is_in_flight();
        self.state = State::Idle;
        was_in_flight
    }
}

fn swap_regions(env: &mut Environment, from: NodeKey, to: NodeKey) -> Result<(), HostError> {
    let document = env.document_mut();
    document.set_style(from, "display", "none")?;
    document.set_style(to, "display", "block")?;
    document.set_style(to, "opacity", "0")
}

fn fade_in(env: &mut Environment, to: NodeKey) -> Result<(), HostError> {
    let document = env.document_mut();
    document.set_style(to, "transition", FADE_TRANSITION)?;
    document.set_style(to, "opacity", "1")
}

/// Runs [`LayoutTransition`]s on the tokio timer.
pub struct TransitionDriver {
    transition: Mutex<LayoutTransition>,
}

impl TransitionDriver {
    pub const fn new(fade: Duration) -> Self {
        Self {
            transition: Mutex::new(LayoutTransition::new(fade)),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.lock_transition().phase()
    }

    /// Cancel the in-flight transition, if any. Its driver stops at its next tick.
    pub fn cancel(&self) -> bool {
        self.lock_transition().cancel()
    }

    /// Fade `from_selector` out, then swap in `to_selector` and fade it in.
    ///
    /// Resolves once the transition has finished, was cancelled, or found
    /// nothing to animate.
    pub async fn run(
        &self,
        env: &SharedEnvironment,
        from_selector: &str,
        to_selector: &str,
    ) -> Result<StartOutcome, TransitionError> {
        let (generation, hide_at) = {
            let mut transition = self.lock_transition();
            let mut guard = env.lock().unwrap_or_else(PoisonError::into_inner);
            let outcome = transition.start(&mut guard, from_selector, to_selector, Instant::now())?;
            if outcome == StartOutcome::MissingElements {
                return Ok(outcome);
            }
            (transition.generation(), transition.hide_at())
        };
        if let Some(deadline) = hide_at {
            sleep_until(deadline).await;
        }
        if !self.step(env, generation)? {
            return Ok(StartOutcome::Started);
        }
        yield_now().await;
        self.step(env, generation)?;
        Ok(StartOutcome::Started)
    }

    /// Advance the machine if it is still running `generation`; returns whether
    /// the transition is still in flight afterwards.
    fn step(&self, env: &SharedEnvironment, generation: u64) -> Result<bool, HostError> {
        let mut transition = self.lock_transition();
        if transition.generation() != generation || !transition.is_in_flight() {
            debug!("layout transition {generation} was cancelled");
            return Ok(false);
        }
        let mut guard = env.lock().unwrap_or_else(PoisonError::into_inner);
        let phase = transition.advance(&mut guard, Instant::now())?;
        Ok(phase != TransitionPhase::Idle)
    }

    fn lock_transition(&self) -> MutexGuard<'_, LayoutTransition> {
        self.transition.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
