//! Slide-in drawers for [`egui`].
//!
//! A [`DrawerController`] decides each frame whether its drawer is open, reconciling a
//! controlled `open` prop with its own state, and where the drawer is mounted: inline in the
//! caller's `Ui`, or through a portal into a [`HostNode`] of the application's [`HostDocument`].

#![forbid(unsafe_code)]

pub mod drawer;
pub mod host;

pub use drawer::{
    ContainerLocator, ContainerPortal, DrawerController, DrawerEvent, DrawerOptions, DrawerProps,
    DrawerResponse, DrawerView, Handler, LayerPortal, LocatorTarget, Placement, SlidingDrawerView,
};
pub use host::{HostDocument, HostNode, Selector, SelectorError};
