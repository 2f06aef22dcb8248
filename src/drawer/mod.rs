//! The drawer controller and its collaborators.

use egui::{Context, Id, Ui, UiBuilder};

mod derive;
mod event;
mod geometry;
mod handler;
mod locator;
mod options;
mod portal;
mod props;
mod view;


pub use derive::{DrawerState, derive_open_state};
pub use event::{AfterClose, DrawerEvent, DrawerPart, EventCallback, EventSource, ToggleCallback};
pub use handler::{Handler, HandlerUi};
pub use locator::{ContainerCache, ContainerLocator, LocatorKind, LocatorTarget, Resolver};
pub use options::{DrawerOptions, Placement};
pub use portal::{ContainerPortal, LayerPortal, PortalChildProps, PortalProps};
pub use props::{Content, Deprecation, DrawerProps};
pub use view::{DrawerView, DrawerViewProps, DrawerViewResponse, SlidingDrawerView};

use crate::host::{HostDocument, HostNode};

/// What happened during one [`DrawerController::show`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerResponse {
    /// The open value the view was rendered with.
    pub open: bool,
    /// Whether anything was rendered (a portal may skip a closed drawer).
    pub mounted: bool,
    pub handle_clicked: bool,
    pub close_requested: bool,
    /// The cached container was replaced after this pass.
    pub container_moved: bool,
}

/// A slide-in drawer that reconciles a controlled `open` prop with its own state and keeps track
/// of which container it is mounted in.
///
/// Each frame:
/// 1. [`Self::set_props`] with this frame's props (derives the open state),
/// 2. [`Self::show`] renders through the view (inline) or the portal, applies the interactions the
///    view reported, then reconciles the cached container.
///
/// Interactions therefore become visible on the next frame, and at most one state change
/// happens per interaction.
#[derive(Debug)]
pub struct DrawerController<V = SlidingDrawerView, P = LayerPortal> {
    id: Id,
    props: DrawerProps,
    state: DrawerState,
    container: ContainerCache,
    anchor: Option<HostNode>,
    view: V,
    portal: P,
    rendered: bool,
    last_rendered_open: Option<bool>,
    deprecations: Vec<Deprecation>,
}

impl DrawerController {
    pub fn new(id: impl Into<Id>, props: DrawerProps) -> Self {
        Self::with_parts(id, props, SlidingDrawerView, LayerPortal::default())
    }
}

impl<V: DrawerView, P: ContainerPortal> DrawerController<V, P> {
    /// Build a drawer with a custom view and portal.
    pub fn with_parts(id: impl Into<Id>, props: DrawerProps, view: V, portal: P) -> Self {
        let deprecations = props.deprecations();
        for deprecation in &deprecations {
            log::warn!("{}", deprecation.message());
        }

        let state = derive_open_state(None, &props, DrawerState::initial(&props));
        Self {
            id: id.into(),
            container: ContainerCache::new(props.get_container.clone()),
            props,
            state,
            anchor: None,
            view,
            portal,
            rendered: false,
            last_rendered_open: None,
            deprecations,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn props(&self) -> &DrawerProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_controlled(&self) -> bool {
        self.props.is_controlled()
    }

    /// The container the drawer currently targets in portal mode.
    pub fn container(&self) -> &ContainerLocator {
        self.container.locator()
    }

    /// The wrapper node captured by the last inline render.
    pub fn anchor(&self) -> Option<&HostNode> {
        self.anchor.as_ref()
    }

    /// Deprecated props found at construction.
    pub fn deprecations(&self) -> &[Deprecation] {
        &self.deprecations
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn portal(&self) -> &P {
        &self.portal
    }

    /// Hand in this frame's props. Must happen before [`Self::show`].
    pub fn set_props(&mut self, props: DrawerProps) {
        self.state = derive_open_state(Some(&self.props), &props, self.state);
        self.props = props;
    }

    /// The handle was clicked: tell the consumer, then toggle unless controlled.
    pub fn handle_click(&mut self, event: &DrawerEvent) {
        if let Some(on_handle_click) = &self.props.on_handle_click {
            on_handle_click(event);
        }
        if !self.props.is_controlled() {
            self.state.open = !self.state.open;
        }
    }

    /// A close was requested: tell the consumer, then close unless controlled.
    pub fn close(&mut self, event: &DrawerEvent) {
        if let Some(on_close) = &self.props.on_close {
            on_close(event);
        }
        if !self.props.is_controlled() {
            self.state.open = false;
        }
    }

    /// Post-render step: adopt a newly supplied container if it points somewhere else.
    ///
    /// Does nothing after the very first render. Returns `true` when the container moved.
    pub fn after_render(&mut self, document: &HostDocument) -> bool {
        if !self.rendered {
            self.rendered = true;
            return false;
        }
        self.container.reconcile(&self.props.get_container, document)
    }

    /// [`Self::set_props`] followed by [`Self::show`].
    pub fn show_with_props(
        &mut self,
        ui: &mut Ui,
        document: &HostDocument,
        props: DrawerProps,
    ) -> DrawerResponse {
        self.set_props(props);
        self.show(ui, document)
    }

    /// Render the drawer for this frame.
    ///
    /// Inline drawers paint into `ui`; portal drawers mount into the container resolved from
    /// `document`.
    pub fn show(&mut self, ui: &mut Ui, document: &HostDocument) -> DrawerResponse {
        let (rendered_open, view_response, after_close) = if self.props.get_container.is_inline()
        {
            let (open, response) = self.render_inline(ui);
            (open, Some(response), None)
        } else {
            self.anchor = None;
            self.render_portal(ui.ctx(), document)
        };

        let mut response = DrawerResponse {
            open: rendered_open,
            mounted: view_response.is_some(),
            ..Default::default()
        };

        if let Some(view_response) = view_response {
            if let Some(event) = view_response.handle_click {
                self.handle_click(&event);
                response.handle_clicked = true;
            }
            if let Some(event) = view_response.close {
                self.close(&event);
                response.close_requested = true;
            }
            if let Some(visible) = view_response.visibility_settled {
                match &after_close {
                    Some(after_close) => after_close(),
                    None => {
                        if let Some(after_visible_change) = &self.props.after_visible_change {
                            after_visible_change(visible);
                        }
                    }
                }
            }
        }

        if self
            .last_rendered_open
            .is_some_and(|last| last != rendered_open)
        {
            if let Some(on_change) = &self.props.on_change {
                on_change(rendered_open);
            }
        }
        self.last_rendered_open = Some(rendered_open);

        response.container_moved = self.after_render(document);
        response
    }

    fn render_inline(&mut self, ui: &mut Ui) -> (bool, DrawerViewResponse) {
        let rect = ui.available_rect_before_wrap();
        let anchor = HostNode::new(self.id.with("anchor"), "div")
            .with_class_name(&self.props.wrapper_class_name)
            .with_rect(rect);

        let Self {
            id,
            props,
            state,
            view,
            ..
        } = self;
        let view_props = DrawerViewProps {
            id: *id,
            open: state.open,
            options: &props.options,
            handler: &props.handler,
            content: props.content.as_ref(),
            container: Some(&anchor),
        };
        let response = ui
            .scope_builder(
                UiBuilder::new().id_salt(id.with("wrapper")).max_rect(rect),
                |ui| view.show(ui, &view_props),
            )
            .inner;
        let open = state.open;

        self.anchor = Some(anchor);
        (open, response)
    }

    fn render_portal(
        &mut self,
        ctx: &Context,
        document: &HostDocument,
    ) -> (bool, Option<DrawerViewResponse>, Option<AfterClose>) {
        let Self {
            id,
            props,
            state,
            container,
            view,
            portal,
            ..
        } = self;

        // An inline drawer that later got a container has nothing cached to go to yet.
        let locator = if container.locator().is_inline() {
            &props.get_container
        } else {
            container.locator()
        };
        let portal_props = PortalProps {
            id: *id,
            visible: state.open,
            force_render: props.needs_force_render(),
            get_container: locator,
            wrapper_class_name: &props.wrapper_class_name,
        };

        let mut rendered_open = state.open;
        let mut after_close = None;
        let mut add_contents = |ui: &mut Ui, child: PortalChildProps| {
            let open = child.visible.unwrap_or(state.open);
            rendered_open = open;
            after_close = child.after_close;
            view.show(
                ui,
                &DrawerViewProps {
                    id: *id,
                    open,
                    options: &props.options,
                    handler: &props.handler,
                    content: props.content.as_ref(),
                    container: Some(&child.container),
                },
            )
        };
        let response = portal.show(ctx, document, &portal_props, &mut add_contents);
        (rendered_open, response, after_close)
    }
}
