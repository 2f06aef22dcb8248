/// Which edge of its container the drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Placement {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl Placement {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Plain, serializable configuration of a drawer's look and dismiss behavior.
///
/// Everything that isn't state, a container or a callback lives here so it can be stored with
/// the rest of an application's settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerOptions {
    /// Prefix used to derive the ids and class names of the drawer's parts (`drawer-handle`, ...).
    pub prefix_cls: String,

    /// Extra classes of the drawer itself (not its wrapper). Salts the id of the panel contents,
    /// so two drawers differing only here keep separate widget state.
    pub class_name: String,

    pub placement: Placement,

    /// Panel width in points for [`Placement::Left`] / [`Placement::Right`].
    pub width: f32,

    /// Panel height in points for [`Placement::Top`] / [`Placement::Bottom`].
    pub height: f32,

    /// Length of the open/close slide, in seconds. `0.0` snaps.
    pub duration_secs: f32,

    /// Dim the container behind an open drawer.
    pub show_mask: bool,

    /// Clicking the mask requests a close.
    pub mask_closable: bool,

    /// Mask alpha when fully open, `0.0..=1.0`.
    pub mask_opacity: f32,

    /// Pressing Escape while open requests a close.
    pub keyboard: bool,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            prefix_cls: "drawer".to_owned(),
            class_name: String::new(),
            placement: Placement::Left,
            width: 256.0,
            height: 256.0,
            duration_secs: 0.3,
            show_mask: true,
            mask_closable: true,
            mask_opacity: 0.3,
            keyboard: true,
        }
    }
}

impl DrawerOptions {
    /// Extent of the panel along its sliding axis.
    pub fn panel_extent(&self) -> f32 {
        if self.placement.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    /// `"{prefix_cls}-{part}"`, e.g. `drawer-handle`.
    pub fn part_class(&self, part: &str) -> String {
        format!("{}-{part}", self.prefix_cls)
    }
}
