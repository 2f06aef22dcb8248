use super::props::DrawerProps;

/// The drawer's own state. Everything else is props or cached configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    /// Initial state: the controlled value when given, `default_open` otherwise.
    pub fn initial(props: &DrawerProps) -> Self {
        Self {
            open: props.open.unwrap_or(props.default_open),
        }
    }
}

/// Next state for a prop update, computed before the drawer renders.
///
/// Only a change of `open` between the previous and the incoming props touches the state, so
/// toggles made by the user since the last update survive re-renders with unchanged props, while
/// a genuine external change (including a late-arriving `open`) always wins. Dropping `open`
/// also counts as a change and closes the drawer.
///
/// `prev` is `None` on construction.
pub fn derive_open_state(
    prev: Option<&DrawerProps>,
    next: &DrawerProps,
    state: DrawerState,
) -> DrawerState {
    match prev {
        Some(prev) if prev.open != next.open => DrawerState {
            open: next.open.unwrap_or(false),
        },
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(open: Option<bool>) -> DrawerProps {
        DrawerProps {
            open,
            ..Default::default()
        }
    }

    #[test]
    fn first_derivation_keeps_seeded_state() {
        let p = DrawerProps {
            default_open: true,
            ..Default::default()
        };
        let state = DrawerState::initial(&p);
        assert!(state.open);
        assert_eq!(derive_open_state(None, &p, state), state);
    }

    #[test]
    fn controlled_value_beats_default_open() {
        let p = DrawerProps {
            open: Some(false),
            default_open: true,
            ..Default::default()
        };
        assert!(!DrawerState::initial(&p).open);
    }

    #[test]
    fn unchanged_open_leaves_toggled_state_alone() {
        let toggled = DrawerState { open: true };
        assert_eq!(
            derive_open_state(Some(&props(Some(false))), &props(Some(false)), toggled),
            toggled
        );
        assert_eq!(
            derive_open_state(Some(&props(None)), &props(None), toggled),
            toggled
        );
    }

    #[test]
    fn changed_open_overwrites_state() {
        let s = DrawerState { open: true };
        assert!(!derive_open_state(Some(&props(Some(true))), &props(Some(false)), s).open);
        assert!(
            derive_open_state(
                Some(&props(None)),
                &props(Some(true)),
                DrawerState { open: false }
            )
            .open
        );
    }

    #[test]
    fn dropping_open_closes() {
        let s = DrawerState { open: true };
        assert!(!derive_open_state(Some(&props(Some(true))), &props(None), s).open);
    }
}
