use egui::{Rect, Vec2, pos2, vec2};

use super::options::Placement;

pub(super) const HANDLE_SIZE: Vec2 = vec2(40.0, 40.0);

/// Distance from the container's leading edge to the handle.
pub(super) const HANDLE_OFFSET: f32 = 72.0;

/// Panel rect inside `container` for an open fraction `t` (`0.0` = fully hidden past the edge).
pub(super) fn panel_rect(container: Rect, placement: Placement, extent: f32, t: f32) -> Rect {
    let t = t.clamp(0.0, 1.0);
    let hidden = extent * (1.0 - t);
    match placement {
        Placement::Left => Rect::from_min_size(
            pos2(container.left() - hidden, container.top()),
            vec2(extent, container.height()),
        ),
        Placement::Right => Rect::from_min_size(
            pos2(container.right() - extent + hidden, container.top()),
            vec2(extent, container.height()),
        ),
        Placement::Top => Rect::from_min_size(
            pos2(container.left(), container.top() - hidden),
            vec2(container.width(), extent),
        ),
        Placement::Bottom => Rect::from_min_size(
            pos2(container.left(), container.bottom() - extent + hidden),
            vec2(container.width(), extent),
        ),
    }
}

/// The handle sticks out of the panel's inner edge, so it stays on screen while closed.
pub(super) fn handle_rect(panel: Rect, placement: Placement) -> Rect {
    match placement {
        Placement::Left => Rect::from_min_size(
            pos2(panel.right(), panel.top() + HANDLE_OFFSET),
            HANDLE_SIZE,
        ),
        Placement::Right => Rect::from_min_size(
            pos2(panel.left() - HANDLE_SIZE.x, panel.top() + HANDLE_OFFSET),
            HANDLE_SIZE,
        ),
        Placement::Top => Rect::from_min_size(
            pos2(panel.left() + HANDLE_OFFSET, panel.bottom()),
            HANDLE_SIZE,
        ),
        Placement::Bottom => Rect::from_min_size(
            pos2(panel.left() + HANDLE_OFFSET, panel.top() - HANDLE_SIZE.y),
            HANDLE_SIZE,
        ),
    }
}
