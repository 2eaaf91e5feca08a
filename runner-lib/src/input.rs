//! Keyboard and gamepad mapping onto the device buttons.

use watch_core::Button;
use winit::keyboard::KeyCode;

/// Map a physical key to a device button.
pub fn map_key(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::ArrowUp => Some(Button::Up),
        KeyCode::ArrowDown => Some(Button::Down),
        KeyCode::Enter | KeyCode::Space => Some(Button::Select),
        _ => None,
    }
}

/// Map a gamepad button to a device button.
pub fn map_pad_button(button: gilrs::Button) -> Option<Button> {
    match button {
        gilrs::Button::DPadUp => Some(Button::Up),
        gilrs::Button::DPadDown => Some(Button::Down),
        gilrs::Button::South => Some(Button::Select),
        _ => None,
    }
}
