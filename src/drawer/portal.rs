use egui::{Context, Id, Order, Ui, UiBuilder};

use super::event::AfterClose;
use super::locator::ContainerLocator;
use super::view::DrawerViewResponse;
use crate::host::{HostDocument, HostNode};

/// How the controller asks a portal to mount the drawer.
pub struct PortalProps<'a> {
    pub id: Id,
    pub visible: bool,
    /// Mount even while not visible.
    pub force_render: bool,
    pub get_container: &'a ContainerLocator,
    pub wrapper_class_name: &'a str,
}

/// What a portal tells the content it mounts.
///
/// `visible` and `after_close` are only set while the portal tears itself down, and then take
/// precedence over the controller's own open state and visibility callback.
pub struct PortalChildProps {
    pub visible: Option<bool>,
    pub after_close: Option<AfterClose>,
    pub container: HostNode,
}

impl std::fmt::Debug for PortalChildProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalChildProps")
            .field("visible", &self.visible)
            .field("after_close", &self.after_close.is_some())
            .field("container", &self.container)
            .finish()
    }
}

/// Mounts drawer content into a container other than the caller's `Ui`.
pub trait ContainerPortal {
    /// Render `add_contents` into the container `props.get_container` resolves to.
    ///
    /// Returns `None` when nothing was mounted this pass.
    fn show(
        &mut self,
        ctx: &Context,
        document: &HostDocument,
        props: &PortalProps<'_>,
        add_contents: &mut dyn FnMut(&mut Ui, PortalChildProps) -> DrawerViewResponse,
    ) -> Option<DrawerViewResponse>;
}

/// Default portal: a foreground [`egui::Area`] placed over, and clipped to, the container.
///
/// Nothing is mounted until the drawer is first visible or force-rendered. From then on the
/// content stays mounted, so a closing drawer plays its exit transition and reports it settled
/// like any other. Never overrides the child's visibility or visibility callback.
#[derive(Debug, Default)]
pub struct LayerPortal {
    mounted: bool,
}

impl LayerPortal {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl ContainerPortal for LayerPortal {
    fn show(
        &mut self,
        ctx: &Context,
        document: &HostDocument,
        props: &PortalProps<'_>,
        add_contents: &mut dyn FnMut(&mut Ui, PortalChildProps) -> DrawerViewResponse,
    ) -> Option<DrawerViewResponse> {
        if !(props.visible || props.force_render || self.mounted) {
            return None;
        }

        let Some(container) = props.get_container.resolve(document) else {
            log::debug!(
                "drawer {:?}: container {:?} not found, nothing mounted",
                props.id,
                props.get_container
            );
            return None;
        };

        if !self.mounted {
            log::debug!("drawer {:?}: portal mounted into {container}", props.id);
            self.mounted = true;
        }
        let rect = container.rect();
        let child = PortalChildProps {
            visible: None,
            after_close: None,
            container,
        };

        let wrapper_id = props.id.with(("portal", props.wrapper_class_name));
        let response = egui::Area::new(wrapper_id)
            .order(Order::Foreground)
            .fixed_pos(rect.min)
            .constrain(false)
            .show(ctx, |ui| {
                ui.set_clip_rect(rect);
                ui.scope_builder(UiBuilder::new().max_rect(rect), |ui| {
                    add_contents(ui, child)
                })
                .inner
            })
            .inner;
        Some(response)
    }
}
