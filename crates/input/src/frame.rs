use crate::action::Action;
use glam::Vec2;
use std::collections::BTreeSet;

/// Input state sampled once per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Cursor position in screen pixels, Y growing downward.
    pub cursor: Vec2,
    /// Actions whose keys are currently held, in `Action` order.
    pub held: BTreeSet<Action>,
    /// Primary (left) mouse button state.
    pub primary_pressed: bool,
}

impl FrameInput {
    pub fn new(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Builder-style helper for holding several actions at once.
    pub fn holding(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.held.extend(actions);
        self
    }

    pub fn set_held(&mut self, action: Action, held: bool) {
        if held {
            self.held.insert(action);
        } else {
            self.held.remove(&action);
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

/// One-bit rising-edge detector for a button.
///
/// `update` must be called exactly once per frame with the current button
/// state. It returns true only on the frame the button goes from released to
/// pressed, so a held button fires once per physical click.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickEdge {
    was_pressed: bool,
}

impl ClickEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        rising
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_actions() {
        let mut input = FrameInput::new(Vec2::ZERO).holding([Action::MoveForward]);
        assert!(input.is_held(Action::MoveForward));
        assert!(!input.is_held(Action::MoveBack));

        input.set_held(Action::MoveForward, false);
        input.set_held(Action::MoveUp, true);
        assert!(!input.is_held(Action::MoveForward));
        assert!(input.is_held(Action::MoveUp));
    }

    #[test]
    fn held_iterates_in_action_order() {
        let input = FrameInput::new(Vec2::ZERO).holding([
            Action::MoveDown,
            Action::StrafeLeft,
            Action::MoveForward,
        ]);
        let held: Vec<_> = input.held.iter().copied().collect();
        assert_eq!(held, vec![Action::MoveForward, Action::StrafeLeft, Action::MoveDown]);
    }

    #[test]
    fn click_edge_fires_once_per_press() {
        let mut edge = ClickEdge::new();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn click_edge_held_from_start_fires_once() {
        let mut edge = ClickEdge::new();
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
    }
}
