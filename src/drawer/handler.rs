use std::sync::Arc;

use egui::{Rect, Response, Sense, Stroke, Ui};

pub type HandlerUi = Arc<dyn Fn(&mut Ui) -> Response + Send + Sync>;

/// The toggle handle shown on the drawer's edge.
#[derive(Clone, Default)]
pub enum Handler {
    /// No handle: the drawer is driven by `open` or by code only.
    None,
    /// The built-in handle, a small tab with a "hamburger" icon.
    #[default]
    Default,
    /// Custom handle contents. A click on the returned response toggles the drawer.
    Custom(HandlerUi),
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Handler {
    pub fn custom(ui: impl Fn(&mut Ui) -> Response + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(ui))
    }

    /// Whether anything is shown. A visible handle forces the portal to render while closed.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Show the handle in `rect`. `None` if there is no handle.
    pub(super) fn ui(&self, ui: &mut Ui, rect: Rect, id: egui::Id) -> Option<Response> {
        match self {
            Self::None => None,
            Self::Default => Some(default_handle_ui(ui, rect, id)),
            Self::Custom(add) => {
                let mut child = ui.new_child(egui::UiBuilder::new().id_salt(id).max_rect(rect));
                Some(add(&mut child))
            }
        }
    }
}

fn default_handle_ui(ui: &mut Ui, rect: Rect, id: egui::Id) -> Response {
    let response = ui.interact(rect, id, Sense::click());
    let visuals = ui.style().interact(&response);

    let painter = ui.painter();
    painter.rect(
        rect,
        4.0,
        ui.visuals().window_fill(),
        visuals.bg_stroke,
        egui::StrokeKind::Inside,
    );

    let icon = Rect::from_center_size(rect.center(), rect.size() * 0.4);
    let stroke = Stroke::new(1.5, visuals.fg_stroke.color);
    for frac in [0.0, 0.5, 1.0] {
        let y = egui::lerp(icon.top()..=icon.bottom(), frac);
        painter.line_segment([egui::pos2(icon.left(), y), egui::pos2(icon.right(), y)], stroke);
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
