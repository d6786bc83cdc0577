//! Pointer-drag gesture state.

use bitflags::bitflags;

bitflags! {
    /// Pointer button state as reported by the input device.
    ///
    /// The layout matches the `buttons` bitmask of the web `PointerEvent`
    /// family, which is the form browser hosts deliver and desktop hosts
    /// can map onto.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PointerButtons: u8 {
        /// Primary button (left mouse button, or touch contact).
        const PRIMARY = 0b0000_0001;
        /// Secondary button (right mouse button).
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button (middle mouse button).
        const AUXILIARY = 0b0000_0100;
    }
}

/// State machine for one pointer-drag gesture.
///
/// Pressing the primary button on a cell opens a gesture whose fill value
/// is decided once, by the pressed cell's state, and then applied unchanged
/// to every cell the pointer enters. This is what makes a drag over mixed
/// filled/empty cells behave like a single stroke instead of toggling cell
/// by cell. Releasing the button anywhere closes the gesture.
///
/// `V` is the fill payload: `bool` for play-mode selection,
/// `Option<Color>` for editor painting.
///
/// The session is transient input state; it is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragState<V> {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A press is active; `fill` is applied to every entered cell.
    Dragging {
        /// Fill value fixed at gesture start.
        fill: V,
    },
}

impl<V: Copy> DragState<V> {
    /// Opens a gesture with the given fill value if the primary button is
    /// pressed.
    ///
    /// Returns the fill to apply to the pressed cell, or `None` when the
    /// press used a non-primary button (no transition occurs).
    pub fn press(&mut self, buttons: PointerButtons, fill: V) -> Option<V> {
        if !buttons.contains(PointerButtons::PRIMARY) {
            return None;
        }
        *self = Self::Dragging { fill };
        Some(fill)
    }

    /// Reports the fill to apply to a newly entered cell, if any.
    ///
    /// The fill is only returned while the device still reports the primary
    /// button held. If the button is no longer held — the release happened
    /// where no pointer-up reached us — the stored state is reconciled with
    /// the hardware state and the gesture ends without mutation, so a drag
    /// can never stick. An enter with no gesture open (including one
    /// delivered before its matching press) is ignored.
    pub fn entered(&mut self, buttons: PointerButtons) -> Option<V> {
        let Self::Dragging { fill } = *self else {
            return None;
        };
        if !buttons.contains(PointerButtons::PRIMARY) {
            *self = Self::Idle;
            return None;
        }
        Some(fill)
    }

    /// Closes the gesture. Safe to call at any time, from anywhere,
    /// including with the pointer outside the grid.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_requires_primary_button() {
        let mut drag = DragState::<bool>::Idle;
        assert_eq!(drag.press(PointerButtons::SECONDARY, true), None);
        assert!(drag.is_idle());

        assert_eq!(drag.press(PointerButtons::PRIMARY, true), Some(true));
        assert!(drag.is_dragging());
    }

    #[test]
    fn enter_before_press_is_ignored() {
        let mut drag = DragState::<bool>::Idle;
        assert_eq!(drag.entered(PointerButtons::PRIMARY), None);
        assert!(drag.is_idle());
    }

    #[test]
    fn enter_with_released_button_ends_the_gesture() {
        let mut drag = DragState::Idle;
        drag.press(PointerButtons::PRIMARY, true);

        // The release happened outside the surface; the next enter must not
        // paint and must clear the stale gesture.
        assert_eq!(drag.entered(PointerButtons::empty()), None);
        assert!(drag.is_idle());
        assert_eq!(drag.entered(PointerButtons::PRIMARY), None);
    }

    #[test]
    fn fill_value_is_fixed_for_the_gesture() {
        let mut drag = DragState::Idle;
        drag.press(PointerButtons::PRIMARY, false);
        assert_eq!(drag.entered(PointerButtons::PRIMARY), Some(false));
        assert_eq!(drag.entered(PointerButtons::PRIMARY), Some(false));

        drag.release();
        assert!(drag.is_idle());
    }
}
