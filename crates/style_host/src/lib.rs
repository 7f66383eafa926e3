//! Host environment facade for styling helpers.
//! This crate centralizes the capabilities that styling code reads from and
//! writes to (document tree, viewport metrics, network information, style
//! sheets, console output) so the helpers never touch ambient globals.

/// Console sink for diagnostic output.
pub mod console;
pub use console::{BufferedLogger, Console, ConsoleLogger, HostLogger, LogLevel};

/// Document capability: element queries, class lists, inline and computed style.
pub mod document;
pub use document::{CssRuleInfo, Document, StyleSheetInfo, validate_class_token};

/// Capability bundle handed to every styling helper.
pub mod environment;
pub use environment::{
    EffectiveType, Environment, NetworkInformation, StaticNetwork, StaticViewport, Viewport,
};

pub mod error;
pub use error::{Capability, HostError};

/// In-memory document used by headless hosts and tests.
pub mod memory;
pub use memory::{DocumentUpdate, MemoryDocument};

/// A 64-bit stable key for document nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// The root node key (always present).
    pub const ROOT: Self = Self(0);
}
