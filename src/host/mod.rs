//! Named places on screen that drawer content can be mounted into.
//!
//! egui has no document tree, so the application describes the regions it lays out as
//! [`HostNode`]s and registers them in a [`HostDocument`] each frame. Drawers then find their
//! container by node, by selector, or through a resolver function.

use egui::{Context, Id, Rect};
use itertools::Itertools as _;

mod selector;

pub use selector::{Selector, SelectorError};

/// A region a drawer can be mounted into.
///
/// Identity is the `id`: two nodes with the same id denote the same physical host, even when
/// their rect or classes were captured on different frames.
#[derive(Clone, Debug)]
pub struct HostNode {
    id: Id,
    tag: String,
    element_id: Option<String>,
    classes: Vec<String>,
    rect: Rect,
}

impl HostNode {
    pub fn new(id: Id, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            element_id: None,
            classes: Vec::new(),
            rect: Rect::NOTHING,
        }
    }

    /// The `#id` this node answers to in selectors.
    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    /// Add classes from a whitespace separated class list (`"panel dark"`).
    #[must_use]
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        for class in class_name.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        }
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_same_node(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for HostNode {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_node(other)
    }
}

impl Eq for HostNode {}

impl std::fmt::Display for HostNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tag)?;
        if let Some(id) = &self.element_id {
            write!(f, "#{id}")?;
        }
        if !self.classes.is_empty() {
            write!(f, ".{}", self.classes.iter().join("."))?;
        }
        Ok(())
    }
}

/// Ordered registry of the hosts laid out this frame.
///
/// Registration order plays the role of document order: selector queries return matches in
/// the order the nodes were first inserted. A `body` node spanning the screen is always present
/// and is the first node.
#[derive(Clone, Debug)]
pub struct HostDocument {
    nodes: Vec<HostNode>,
    index: ahash::HashMap<Id, usize>,
}

impl HostDocument {
    pub const BODY_ID: &'static str = "egui_drawer::body";

    pub fn new(screen_rect: Rect) -> Self {
        let body = HostNode::new(Id::new(Self::BODY_ID), "body").with_rect(screen_rect);
        let mut index = ahash::HashMap::default();
        index.insert(body.id(), 0);
        Self {
            nodes: vec![body],
            index,
        }
    }

    /// A document whose body covers the current screen of `ctx`.
    pub fn from_ctx(ctx: &Context) -> Self {
        Self::new(ctx.screen_rect())
    }

    pub fn body(&self) -> &HostNode {
        &self.nodes[0]
    }

    /// Register a host. A node with an id already present replaces the old one in place,
    /// keeping its position in document order.
    pub fn insert(&mut self, node: HostNode) -> &HostNode {
        let slot = match self.index.get(&node.id()) {
            Some(&slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                let slot = self.nodes.len();
                self.index.insert(node.id(), slot);
                self.nodes.push(node);
                slot
            }
        };
        &self.nodes[slot]
    }

    /// Remove a host. The body can't be removed.
    pub fn remove(&mut self, id: Id) -> Option<HostNode> {
        if id == self.body().id() {
            return None;
        }
        let slot = self.index.remove(&id)?;
        let removed = self.nodes.remove(slot);
        for idx in self.index.values_mut() {
            if *idx > slot {
                *idx -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: Id) -> Option<&HostNode> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostNode> {
        self.nodes.iter()
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<&HostNode>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.nodes.iter().filter(|n| selector.matches(n)).collect())
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<&HostNode>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.nodes.iter().find(|n| selector.matches(n)))
    }

    /// The registered version of `node`, falling back to `node` itself when it isn't registered
    /// (a detached node still has the rect it was captured with).
    pub fn current<'a>(&'a self, node: &'a HostNode) -> &'a HostNode {
        self.get(node.id()).unwrap_or(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn screen() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn body_is_always_first_and_not_removable() {
        let mut doc = HostDocument::new(screen());
        doc.insert(HostNode::new(Id::new("side"), "aside"));
        assert_eq!(doc.body().tag(), "body");
        assert_eq!(doc.query_selector("body").unwrap(), Some(doc.body()));
        assert!(doc.remove(doc.body().id()).is_none());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn reinserting_keeps_document_order() {
        let mut doc = HostDocument::new(screen());
        doc.insert(HostNode::new(Id::new("a"), "div").with_class_name("slot"));
        doc.insert(HostNode::new(Id::new("b"), "div").with_class_name("slot"));
        doc.insert(
            HostNode::new(Id::new("a"), "div")
                .with_class_name("slot")
                .with_rect(Rect::from_min_size(pos2(1.0, 1.0), vec2(5.0, 5.0))),
        );

        let slots = doc.query_selector_all(".slot").unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].id(), Id::new("a"));
        assert_eq!(slots[0].rect().min, pos2(1.0, 1.0));
        assert_eq!(doc.query_selector(".slot").unwrap().map(HostNode::id), Some(Id::new("a")));
    }

    #[test]
    fn remove_reindexes_later_nodes() {
        let mut doc = HostDocument::new(screen());
        doc.insert(HostNode::new(Id::new("a"), "div"));
        doc.insert(HostNode::new(Id::new("b"), "div").with_element_id("b"));
        assert!(doc.remove(Id::new("a")).is_some());
        assert_eq!(doc.get(Id::new("b")).and_then(HostNode::element_id), Some("b"));
        assert_eq!(doc.query_selector("#b").unwrap().map(HostNode::id), Some(Id::new("b")));
    }

    #[test]
    fn node_identity_ignores_captured_geometry() {
        let a = HostNode::new(Id::new("x"), "div");
        let b = HostNode::new(Id::new("x"), "section").with_rect(screen());
        assert_eq!(a, b);
        assert_ne!(a, HostNode::new(Id::new("y"), "div"));
    }

    #[test]
    fn display_reads_like_a_selector() {
        let n = HostNode::new(Id::new("n"), "div")
            .with_element_id("side")
            .with_class_name("panel  dark panel");
        assert_eq!(n.to_string(), "div#side.panel.dark");
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let doc = HostDocument::new(screen());
        assert!(doc.query_selector("div > p").is_err());
    }
}
