//! Errors raised by host capabilities.

use crate::NodeKey;
use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// A host capability that an operation may depend on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// The document has no `body` element.
    DocumentBody,
    /// No viewport metrics provider was installed.
    Viewport,
    /// No network information provider was installed.
    NetworkInformation,
}

impl Display for Capability {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::DocumentBody => "document body",
            Self::Viewport => "viewport",
            Self::NetworkInformation => "network information",
        };
        formatter.write_str(name)
    }
}

/// Error type for host-facing operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host does not provide a capability the operation needs.
    CapabilityMissing(Capability),
    /// A node key does not refer to an element in the document.
    NodeNotFound(NodeKey),
    /// A class token was empty or contained whitespace.
    InvalidClassToken(String),
}

impl Display for HostError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::CapabilityMissing(capability) => {
                write!(formatter, "CapabilityMissing: {capability}")
            }
            Self::NodeNotFound(node) => write!(formatter, "NodeNotFound: {}", node.0),
            Self::InvalidClassToken(token) => write!(formatter, "InvalidClassToken: '{token}'"),
        }
    }
}

impl Error for HostError {}
