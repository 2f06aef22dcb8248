use std::sync::Arc;

use egui::Ui;

use super::event::{DrawerEvent, EventCallback, ToggleCallback};
use super::handler::Handler;
use super::locator::ContainerLocator;
use super::options::{DrawerOptions, Placement};

pub type Content = Arc<dyn Fn(&mut Ui) + Send + Sync>;

/// Everything a consumer hands a [`super::DrawerController`] on each pass.
///
/// Cloning is cheap: callbacks are reference counted. The controller keeps the previous pass's
/// props as a snapshot to detect external changes of [`Self::open`].
#[derive(Clone)]
pub struct DrawerProps {
    /// Controlled open flag. `None` leaves the drawer to manage itself.
    pub open: Option<bool>,

    /// Initial state when uncontrolled.
    pub default_open: bool,

    /// Where to mount the drawer. [`ContainerLocator::Inline`] renders in the caller's `Ui`.
    pub get_container: ContainerLocator,

    /// Render the portal even while closed.
    pub force_render: bool,

    pub handler: Handler,

    /// Classes of the wrapper node: the inline anchor, or the portal wrapper.
    pub wrapper_class_name: String,

    /// Panel contents.
    pub content: Option<Content>,

    pub options: DrawerOptions,

    pub on_close: Option<EventCallback>,
    pub on_handle_click: Option<EventCallback>,
    pub on_change: Option<ToggleCallback>,
    pub after_visible_change: Option<ToggleCallback>,

    /// Never bound to any behavior; supplying it only logs a warning when the controller is built.
    #[deprecated(note = "`on_mask_click` was removed, use `on_close` instead")]
    pub on_mask_click: Option<EventCallback>,
}

#[allow(deprecated)]
impl Default for DrawerProps {
    fn default() -> Self {
        Self {
            open: None,
            default_open: false,
            get_container: ContainerLocator::default(),
            force_render: false,
            handler: Handler::Default,
            wrapper_class_name: String::new(),
            content: None,
            options: DrawerOptions::default(),
            on_close: None,
            on_handle_click: None,
            on_change: None,
            after_visible_change: None,
            on_mask_click: None,
        }
    }
}

#[allow(deprecated)]
impl std::fmt::Debug for DrawerProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerProps")
            .field("open", &self.open)
            .field("default_open", &self.default_open)
            .field("get_container", &self.get_container)
            .field("force_render", &self.force_render)
            .field("handler", &self.handler)
            .field("wrapper_class_name", &self.wrapper_class_name)
            .field("content", &self.content.is_some())
            .field("options", &self.options)
            .field("on_close", &self.on_close.is_some())
            .field("on_handle_click", &self.on_handle_click.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("after_visible_change", &self.after_visible_change.is_some())
            .field("on_mask_click", &self.on_mask_click.is_some())
            .finish()
    }
}

/// A prop that is still accepted but no longer does anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deprecation {
    OnMaskClick,
}

impl Deprecation {
    pub fn message(self) -> &'static str {
        match self {
            Self::OnMaskClick => "`on_mask_click` was removed, please use `on_close` instead",
        }
    }
}

impl DrawerProps {
    /// Control the drawer: `open` wins over any internal toggling.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    #[must_use]
    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    #[must_use]
    pub fn container(mut self, locator: impl Into<ContainerLocator>) -> Self {
        self.get_container = locator.into();
        self
    }

    /// Render in the caller's `Ui` instead of a portal.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.get_container = ContainerLocator::Inline;
        self
    }

    #[must_use]
    pub fn force_render(mut self, force_render: bool) -> Self {
        self.force_render = force_render;
        self
    }

    #[must_use]
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = handler;
        self
    }

    #[must_use]
    pub fn wrapper_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.wrapper_class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.options.placement = placement;
        self
    }

    #[must_use]
    pub fn options(mut self, options: DrawerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn content(mut self, add_contents: impl Fn(&mut Ui) + Send + Sync + 'static) -> Self {
        self.content = Some(Arc::new(add_contents));
        self
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn(&DrawerEvent) + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_handle_click(mut self, f: impl Fn(&DrawerEvent) + Send + Sync + 'static) -> Self {
        self.on_handle_click = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_change(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn after_visible_change(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.after_visible_change = Some(Arc::new(f));
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.open.is_some()
    }

    /// The portal has to render while closed when asked to, or when there is a handle to show.
    pub fn needs_force_render(&self) -> bool {
        self.force_render || self.handler.is_visible()
    }

    #[allow(deprecated)]
    pub fn deprecations(&self) -> Vec<Deprecation> {
        let mut found = Vec::new();
        if self.on_mask_click.is_some() {
            found.push(Deprecation::OnMaskClick);
        }
        found
    }
}
