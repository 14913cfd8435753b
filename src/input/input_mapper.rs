//! Input mapping from raw events to semantic actions
//!
//! Every control is a single key press. Releases and unbound keys map to
//! nothing.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Pause or resume the simulation (Space)
    TogglePause,
    /// Lower the frame rate by one (A)
    DecreaseFps,
    /// Raise the frame rate by one (D)
    IncreaseFps,
    /// Rebuild the scene from its initial layout (R)
    Reset,
    /// Kick the bottom of the net (I)
    Disturb,
    /// Show or hide position trails (T)
    ToggleTrails,
    /// Forget all recorded trail positions (C)
    ClearTrails,
    /// Show or hide pendulum connectors (M)
    ToggleConnectors,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for bound keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::KeyA => Some(InputAction::DecreaseFps),
            KeyCode::KeyD => Some(InputAction::IncreaseFps),
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::KeyI => Some(InputAction::Disturb),
            KeyCode::KeyT => Some(InputAction::ToggleTrails),
            KeyCode::KeyC => Some(InputAction::ClearTrails),
            KeyCode::KeyM => Some(InputAction::ToggleConnectors),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        let bindings = [
            (KeyCode::Space, InputAction::TogglePause),
            (KeyCode::KeyA, InputAction::DecreaseFps),
            (KeyCode::KeyD, InputAction::IncreaseFps),
            (KeyCode::KeyR, InputAction::Reset),
            (KeyCode::KeyI, InputAction::Disturb),
            (KeyCode::KeyT, InputAction::ToggleTrails),
            (KeyCode::KeyC, InputAction::ClearTrails),
            (KeyCode::KeyM, InputAction::ToggleConnectors),
            (KeyCode::KeyF, InputAction::ToggleFullscreen),
            (KeyCode::Escape, InputAction::Exit),
        ];

        for (key, action) in bindings {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed),
                Some(action),
                "Key {:?} should map to {:?}",
                key,
                action
            );
        }
    }

    #[test]
    fn test_key_release_ignored() {
        for key in [KeyCode::Space, KeyCode::KeyR, KeyCode::Escape] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Released), None);
        }
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyS, KeyCode::Enter, KeyCode::ArrowUp] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }
}
