use egui::{Color32, Id, Key, Sense, Ui, UiBuilder};

use super::event::{DrawerEvent, DrawerPart};
use super::geometry::{handle_rect, panel_rect};
use super::handler::Handler;
use super::options::DrawerOptions;
use super::props::Content;
use crate::host::HostNode;

/// What a [`DrawerView`] gets to paint one pass.
pub struct DrawerViewProps<'a> {
    pub id: Id,
    pub open: bool,
    pub options: &'a DrawerOptions,
    pub handler: &'a Handler,
    pub content: Option<&'a Content>,
    /// The node the drawer is mounted in. Falls back to the `Ui`'s max rect when `None`.
    pub container: Option<&'a HostNode>,
}

/// Interactions a [`DrawerView`] observed during its pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerViewResponse {
    pub handle_click: Option<DrawerEvent>,
    pub close: Option<DrawerEvent>,
    /// The open/close transition finished this pass, with the visibility it settled on.
    pub visibility_settled: Option<bool>,
}

/// Presentational part of a drawer: paints it and reports interactions, owns no open state.
pub trait DrawerView {
    fn show(&mut self, ui: &mut Ui, props: &DrawerViewProps<'_>) -> DrawerViewResponse;
}

/// Default view: a mask, a panel sliding in from [`DrawerOptions::placement`] and a handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlidingDrawerView;

impl DrawerView for SlidingDrawerView {
    fn show(&mut self, ui: &mut Ui, props: &DrawerViewProps<'_>) -> DrawerViewResponse {
        let options = props.options;
        let container = props.container.map_or_else(|| ui.max_rect(), HostNode::rect);
        let mut response = DrawerViewResponse::default();

        let t = ui.ctx().animate_bool_with_time(
            props.id.with("open"),
            props.open,
            options.duration_secs,
        );
        response.visibility_settled = settle(ui, props.id.with("settled"), t);

        if options.show_mask && t > 0.0 {
            let alpha = (options.mask_opacity.clamp(0.0, 1.0) * t * 255.0) as u8;
            ui.painter()
                .with_clip_rect(container)
                .rect_filled(container, 0.0, Color32::from_black_alpha(alpha));
            let mask = ui.interact(
                container,
                props.id.with(options.part_class("mask")),
                Sense::click(),
            );
            if mask.clicked() && options.mask_closable && props.open {
                response.close = Some(DrawerEvent::pointer(DrawerPart::Mask));
            }
        }

        let panel = panel_rect(
            container,
            options.placement,
            options.panel_extent(),
            t,
        );

        if t > 0.0 {
            // Swallow clicks on the panel so they don't reach the mask.
            let _panel = ui.interact(
                panel,
                props.id.with(options.part_class("content")),
                Sense::click(),
            );
            let visuals = ui.visuals();
            ui.painter().with_clip_rect(container).rect(
                panel,
                0.0,
                visuals.window_fill(),
                visuals.window_stroke,
                egui::StrokeKind::Inside,
            );

            if let Some(content) = props.content {
                let mut panel_ui = ui.new_child(
                    UiBuilder::new()
                        .id_salt(props.id.with((
                            options.part_class("content-wrapper"),
                            options.class_name.as_str(),
                        )))
                        .max_rect(panel.shrink(8.0)),
                );
                panel_ui.set_clip_rect(panel.intersect(container));
                content(&mut panel_ui);
            }
        }

        let handle = handle_rect(panel, options.placement);
        if let Some(handle_response) =
            props
                .handler
                .ui(ui, handle, props.id.with(options.part_class("handle")))
        {
            if handle_response.clicked() {
                response.handle_click =
                    Some(DrawerEvent::from_click(ui.ctx(), DrawerPart::Handle));
            }
        }

        if options.keyboard && props.open && ui.input(|i| i.key_pressed(Key::Escape)) {
            response.close = Some(DrawerEvent::keyboard(DrawerPart::Document));
        }

        response
    }
}

/// Report the visibility a transition came to rest on, once per transition.
///
/// The first observed value is only recorded: mounting an already open drawer isn't a change.
fn settle(ui: &Ui, id: Id, t: f32) -> Option<bool> {
    let now = if t >= 1.0 {
        true
    } else if t <= 0.0 {
        false
    } else {
        return None;
    };

    let prev = ui.data(|d| d.get_temp::<bool>(id));
    if prev == Some(now) {
        return None;
    }
    ui.data_mut(|d| d.insert_temp(id, now));
    prev.map(|_| now)
}
