//! Keyboard state for manual navigation.

/// Logical movement actions the walkthrough understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveAction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// Map a DOM `KeyboardEvent.code` to a movement action. WASD and the arrow
/// keys are equivalent; anything else is ignored.
#[inline]
pub fn action_for_code(code: &str) -> Option<MoveAction> {
    match code {
        "ArrowUp" | "KeyW" => Some(MoveAction::Forward),
        "ArrowDown" | "KeyS" => Some(MoveAction::Backward),
        "ArrowLeft" | "KeyA" => Some(MoveAction::TurnLeft),
        "ArrowRight" | "KeyD" => Some(MoveAction::TurnRight),
        _ => None,
    }
}

/// Four independent flags, set on keydown and cleared on keyup. Created at
/// scene mount, read once per frame, reset to all-false on unmount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl KeyState {
    #[inline]
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.turn_left || self.turn_right
    }

    #[inline]
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        match action {
            MoveAction::Forward => self.forward = pressed,
            MoveAction::Backward => self.backward = pressed,
            MoveAction::TurnLeft => self.turn_left = pressed,
            MoveAction::TurnRight => self.turn_right = pressed,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
