use crate::platform::InputDevice;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use std::collections::HashSet;

/// Held input state collected from SDL2
///
/// Mouse position and buttons come from events, which SDL already maps
/// into logical canvas coordinates. Keys are read from the keyboard
/// state once per tick.
#[derive(Debug, Default)]
pub struct SdlInput {
    keys: HashSet<Scancode>,
    left_down: bool,
    cursor: (i32, i32),
}

impl SdlInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks pointer events; call for every polled event
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::MouseMotion { x, y, .. } => self.cursor = (x, y),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.cursor = (x, y);
                self.left_down = true;
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.cursor = (x, y);
                self.left_down = false;
            }
            _ => {}
        }
    }

    /// Refreshes the held keys after the tick's events are drained
    pub fn sample_keys(&mut self, event_pump: &EventPump) {
        self.keys = event_pump.keyboard_state().pressed_scancodes().collect();
    }
}

impl InputDevice for SdlInput {
    fn is_key_down(&self, key: Scancode) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        button == MouseButton::Left && self.left_down
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }
}
