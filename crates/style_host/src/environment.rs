use crate::{Capability, Document, HostError, NodeKey};
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Viewport and layout metrics reported by the host.
pub trait Viewport: Send {
    /// Layout width of the document body in CSS pixels.
    fn body_offset_width(&self) -> Option<f32>;
    /// Width of the window's layout viewport in CSS pixels.
    fn inner_width(&self) -> Option<f32>;
}

/// Effective connection type classification reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectiveType {
    Slow2g,
    TwoG,
    ThreeG,
    FourG,
    Other(String),
}

impl EffectiveType {
    /// Parse the host's label (`slow-2g`, `2g`, `3g`, `4g`).
    ///
    /// Matching is exact: any other label, including a differently cased or
    /// padded one, is kept verbatim as `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "slow-2g" => Self::Slow2g,
            "2g" => Self::TwoG,
            "3g" => Self::ThreeG,
            "4g" => Self::FourG,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Slow2g => "slow-2g",
            Self::TwoG => "2g",
            Self::ThreeG => "3g",
            Self::FourG => "4g",
            Self::Other(label) => label,
        }
    }
}

impl Display for EffectiveType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

/// Network information provider.
pub trait NetworkInformation: Send {
    /// Current effective connection type, if the host knows it.
    fn effective_type(&self) -> Option<EffectiveType>;
}

/// Fixed viewport metrics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StaticViewport {
    pub body_offset_width: Option<f32>,
    pub inner_width: Option<f32>,
}

impl StaticViewport {
    /// A viewport where the body spans the whole window width.
    pub const fn uniform(width: f32) -> Self {
        Self {
            body_offset_width: Some(width),
            inner_width: Some(width),
        }
    }
}

impl Viewport for StaticViewport {
    fn body_offset_width(&self) -> Option<f32> {
        self.body_offset_width
    }

    fn inner_width(&self) -> Option<f32> {
        self.inner_width
    }
}

/// Fixed network information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticNetwork {
    pub effective_type: Option<EffectiveType>,
}

impl StaticNetwork {
    pub fn new(label: &str) -> Self {
        Self {
            effective_type: Some(EffectiveType::parse(label)),
        }
    }
}

impl NetworkInformation for StaticNetwork {
    fn effective_type(&self) -> Option<EffectiveType> {
        self.effective_type.clone()
    }
}

/// Capability bundle injected into every styling helper.
///
/// The document is mandatory; viewport and network information are optional
/// and their absence is reported as [`HostError::CapabilityMissing`] by the
/// accessors below.
pub struct Environment {
    document: Box<dyn Document>,
    viewport: Option<Box<dyn Viewport>>,
    network: Option<Box<dyn NetworkInformation>>,
}

impl Environment {
    /// Create an environment around a document with no optional capabilities.
    pub fn new<D: Document + 'static>(document: D) -> Self {
        Self {
            document: Box::new(document),
            viewport: None,
            network: None,
        }
    }

    /// Install a viewport metrics provider.
    #[must_use]
    pub fn with_viewport<V: Viewport + 'static>(mut self, viewport: V) -> Self {
        self.viewport = Some(Box::new(viewport));
        self
    }

    /// Install a network information provider.
    #[must_use]
    pub fn with_network<N: NetworkInformation + 'static>(mut self, network: N) -> Self {
        self.network = Some(Box::new(network));
        self
    }

    /// Replace the viewport provider, e.g. after a resize.
    pub fn set_viewport<V: Viewport + 'static>(&mut self, viewport: V) {
        self.viewport = Some(Box::new(viewport));
    }

    pub fn document(&self) -> &dyn Document {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> &mut dyn Document {
        self.document.as_mut()
    }

    /// The document body or a capability error.
    pub fn body(&self) -> Result<NodeKey, HostError> {
        self.document
            .body()
            .ok_or(HostError::CapabilityMissing(Capability::DocumentBody))
    }

    /// Body offset width or a capability error.
    pub fn body_offset_width(&self) -> Result<f32, HostError> {
        self.viewport
            .as_ref()
            .and_then(|viewport| viewport.body_offset_width())
            .ok_or(HostError::CapabilityMissing(Capability::Viewport))
    }

    /// Window inner width or a capability error.
    pub fn inner_width(&self) -> Result<f32, HostError> {
        self.viewport
            .as_ref()
            .and_then(|viewport| viewport.inner_width())
            .ok_or(HostError::CapabilityMissing(Capability::Viewport))
    }

    /// Effective connection type or a capability error.
    pub fn effective_type(&self) -> Result<EffectiveType, HostError> {
        self.network
            .as_ref()
            .and_then(|network| network.effective_type())
            .ok_or(HostError::CapabilityMissing(Capability::NetworkInformation))
    }
}
