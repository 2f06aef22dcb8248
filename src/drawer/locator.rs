use std::sync::Arc;

use crate::host::{HostDocument, HostNode};

/// What a [`ContainerLocator::Resolver`] hands back.
#[derive(Clone, Debug)]
pub enum LocatorTarget {
    Element(HostNode),
    Selector(String),
}

impl LocatorTarget {
    /// Elements compare by node identity, selectors by their text.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a.is_same_node(b),
            (Self::Selector(a), Self::Selector(b)) => a == b,
            _ => false,
        }
    }
}

impl From<HostNode> for LocatorTarget {
    fn from(node: HostNode) -> Self {
        Self::Element(node)
    }
}

impl From<&str> for LocatorTarget {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_owned())
    }
}

pub type Resolver = Arc<dyn Fn() -> LocatorTarget + Send + Sync>;

/// Where a drawer's content should be mounted.
#[derive(Clone)]
pub enum ContainerLocator {
    /// Render in place, inside the caller's `Ui`.
    Inline,
    Element(HostNode),
    /// First node in document order matching the selector.
    Selector(String),
    /// Evaluated whenever the container is needed.
    Resolver(Resolver),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocatorKind {
    Inline,
    Element,
    Selector,
    Resolver,
}

impl Default for ContainerLocator {
    fn default() -> Self {
        Self::Selector("body".to_owned())
    }
}

impl std::fmt::Debug for ContainerLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline => f.write_str("Inline"),
            Self::Element(node) => f.debug_tuple("Element").field(node).finish(),
            Self::Selector(sel) => f.debug_tuple("Selector").field(sel).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<HostNode> for ContainerLocator {
    fn from(node: HostNode) -> Self {
        Self::Element(node)
    }
}

impl From<&str> for ContainerLocator {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_owned())
    }
}

impl From<String> for ContainerLocator {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl ContainerLocator {
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    pub fn resolver(resolve: impl Fn() -> LocatorTarget + Send + Sync + 'static) -> Self {
        Self::Resolver(Arc::new(resolve))
    }

    pub fn kind(&self) -> LocatorKind {
        match self {
            Self::Inline => LocatorKind::Inline,
            Self::Element(_) => LocatorKind::Element,
            Self::Selector(_) => LocatorKind::Selector,
            Self::Resolver(_) => LocatorKind::Resolver,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline)
    }

    /// The host this locator points at right now, with its geometry from `document`.
    ///
    /// `None` for [`Self::Inline`], for selectors that match nothing and for invalid selectors.
    pub fn resolve(&self, document: &HostDocument) -> Option<HostNode> {
        match self {
            Self::Inline => None,
            Self::Element(node) => Some(document.current(node).clone()),
            Self::Selector(selector) => query_first(document, selector).cloned(),
            Self::Resolver(resolve) => match resolve() {
                LocatorTarget::Element(node) => Some(document.current(&node).clone()),
                LocatorTarget::Selector(selector) => query_first(document, &selector).cloned(),
            },
        }
    }
}

fn query_first<'a>(document: &'a HostDocument, selector: &str) -> Option<&'a HostNode> {
    document.query_selector(selector).unwrap_or_else(|err| {
        log::debug!("container selector {selector:?} matches nothing: {err}");
        None
    })
}

/// The last container a drawer settled on.
///
/// Only replaced when a newly supplied locator of the *same kind* denotes a different host, so
/// a re-created selector string or closure that still points at the same node does not remount
/// the portal.
#[derive(Clone, Debug, Default)]
pub struct ContainerCache {
    locator: ContainerLocator,
}

impl ContainerCache {
    pub fn new(locator: ContainerLocator) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &ContainerLocator {
        &self.locator
    }

    /// Compare `next` against the cached locator and adopt it if it moved.
    ///
    /// Returns `true` when the cache was replaced.
    ///
    /// A change of kind (e.g. selector to resolver) is never adopted. That mirrors long-standing
    /// drawer behavior, but it means switching kinds does not retarget the portal.
    pub fn reconcile(&mut self, next: &ContainerLocator, document: &HostDocument) -> bool {
        let moved = match (&self.locator, next) {
            (_, ContainerLocator::Inline) => false,
            (ContainerLocator::Selector(old), ContainerLocator::Selector(new)) => {
                let old = query_first(document, old);
                let new = query_first(document, new);
                old.map(HostNode::id) != new.map(HostNode::id)
            }
            (ContainerLocator::Resolver(old), ContainerLocator::Resolver(new)) => {
                !new().same_as(&old())
            }
            (ContainerLocator::Element(old), ContainerLocator::Element(new)) => {
                !new.is_same_node(old)
            }
            _ => false,
        };

        if moved {
            log::debug!(
                "drawer container moved: {:?} -> {:?}",
                self.locator.kind(),
                next.kind()
            );
            self.locator = next.clone();
        }
        moved
    }
}
