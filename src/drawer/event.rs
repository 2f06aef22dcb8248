use std::sync::Arc;

/// How the user triggered an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventSource {
    Pointer,
    Keyboard,
}

/// Which part of the drawer the interaction landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPart {
    Handle,
    Mask,
    /// Not tied to a widget, e.g. pressing Escape.
    Document,
}

/// A handle click or close request coming out of a [`super::DrawerView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerEvent {
    pub source: EventSource,
    pub part: DrawerPart,
}

impl DrawerEvent {
    pub fn pointer(part: DrawerPart) -> Self {
        Self {
            source: EventSource::Pointer,
            part,
        }
    }

    pub fn keyboard(part: DrawerPart) -> Self {
        Self {
            source: EventSource::Keyboard,
            part,
        }
    }

    /// Classify a click on `part` by whether the pointer clicked this frame.
    ///
    /// egui reports keyboard activation of a focused widget as a click too.
    pub fn from_click(ctx: &egui::Context, part: DrawerPart) -> Self {
        if ctx.input(|i| i.pointer.any_click()) {
            Self::pointer(part)
        } else {
            Self::keyboard(part)
        }
    }
}

pub type EventCallback = Arc<dyn Fn(&DrawerEvent) + Send + Sync>;
pub type ToggleCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Signal from a portal that its teardown finished.
pub type AfterClose = Arc<dyn Fn() + Send + Sync>;
