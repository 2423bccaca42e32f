use crate::platform::InputDevice;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;

/// Actions the shell can react to
///
/// This enum represents the discrete, already edge-filtered input events
/// of one tick. It decouples input sampling from the screen logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellAction {
    // === Keyboard ===
    Escape,
    NavigateUp,
    NavigateDown,
    Confirm,

    // === Pointer ===
    Hover(i32, i32),          // x, y - emitted every tick
    PointerPressed(i32, i32), // x, y - first tick the button is down
    PointerDragged(i32, i32), // x, y - button still held after the press tick
    PointerReleased,
}

/// Keys bound to each logical keyboard action
const UP_KEYS: &[Scancode] = &[Scancode::Up, Scancode::W];
const DOWN_KEYS: &[Scancode] = &[Scancode::Down, Scancode::S];
const CONFIRM_KEYS: &[Scancode] = &[Scancode::Return, Scancode::KpEnter, Scancode::Space];
const ESCAPE_KEYS: &[Scancode] = &[Scancode::Escape];

/// Turns a level-sensitive "is held" sample into a one-shot press
///
/// `update` returns `true` only on the tick where the input goes from
/// released to held. The latch clears once every input watched by this
/// trigger is released.
#[derive(Debug, Clone, Default)]
pub struct EdgeTrigger {
    latched: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        EdgeTrigger { latched: false }
    }

    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.latched;
        self.latched = held;
        pressed
    }

    /// Samples any of `keys` on `device`
    pub fn update_keys(&mut self, device: &impl InputDevice, keys: &[Scancode]) -> bool {
        let held = keys.iter().any(|&key| device.is_key_down(key));
        self.update(held)
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}

/// InputSystem samples the input device and produces ShellActions
///
/// # Architecture
///
/// Input processing happens once per tick, before any state changes:
/// 1. Sample held keys, the primary mouse button and the cursor
/// 2. Run every sample through its own EdgeTrigger
/// 3. Emit actions in a fixed order (escape, navigation, confirm, pointer)
///
/// Each logical action owns its trigger, so holding one key never masks a
/// press of another.
pub struct InputSystem {
    escape: EdgeTrigger,
    up: EdgeTrigger,
    down: EdgeTrigger,
    confirm: EdgeTrigger,
    pointer: EdgeTrigger,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            escape: EdgeTrigger::new(),
            up: EdgeTrigger::new(),
            down: EdgeTrigger::new(),
            confirm: EdgeTrigger::new(),
            pointer: EdgeTrigger::new(),
        }
    }

    /// Sample the device and return this tick's actions
    pub fn poll_actions(&mut self, device: &impl InputDevice) -> Vec<ShellAction> {
        let mut actions = Vec::new();

        if self.escape.update_keys(device, ESCAPE_KEYS) {
            actions.push(ShellAction::Escape);
        }
        if self.up.update_keys(device, UP_KEYS) {
            actions.push(ShellAction::NavigateUp);
        }
        if self.down.update_keys(device, DOWN_KEYS) {
            actions.push(ShellAction::NavigateDown);
        }
        if self.confirm.update_keys(device, CONFIRM_KEYS) {
            actions.push(ShellAction::Confirm);
        }

        let (x, y) = device.cursor_position();
        let pointer_down = device.is_mouse_button_down(MouseButton::Left);
        let was_down = self.pointer.is_latched();

        actions.push(ShellAction::Hover(x, y));
        if self.pointer.update(pointer_down) {
            actions.push(ShellAction::PointerPressed(x, y));
        } else if pointer_down {
            actions.push(ShellAction::PointerDragged(x, y));
        } else if was_down {
            actions.push(ShellAction::PointerReleased);
        }

        actions
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockInput;

    fn keyboard_actions(actions: &[ShellAction]) -> Vec<ShellAction> {
        actions
            .iter()
            .copied()
            .filter(|a| {
                matches!(
                    a,
                    ShellAction::Escape
                        | ShellAction::NavigateUp
                        | ShellAction::NavigateDown
                        | ShellAction::Confirm
                )
            })
            .collect()
    }

    #[test]
    fn test_edge_trigger_fires_once_per_press() {
        let mut trigger = EdgeTrigger::new();
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_latch_holds_while_any_bound_key_is_down() {
        let mut input = MockInput::new();
        let mut trigger = EdgeTrigger::new();

        input.press(Scancode::Up);
        assert!(trigger.update_keys(&input, UP_KEYS));

        // Switch from arrow to W without a gap: still the same press
        input.press(Scancode::W);
        input.release(Scancode::Up);
        assert!(!trigger.update_keys(&input, UP_KEYS));

        input.release(Scancode::W);
        assert!(!trigger.update_keys(&input, UP_KEYS));
        assert!(!trigger.is_latched());

        input.press(Scancode::W);
        assert!(trigger.update_keys(&input, UP_KEYS));
    }

    #[test]
    fn test_held_key_produces_single_action() {
        let mut system = InputSystem::new();
        let mut input = MockInput::new();
        input.press(Scancode::Down);

        let first = keyboard_actions(&system.poll_actions(&input));
        assert_eq!(first, vec![ShellAction::NavigateDown]);

        for _ in 0..10 {
            assert!(keyboard_actions(&system.poll_actions(&input)).is_empty());
        }
    }

    #[test]
    fn test_per_action_triggers_do_not_mask_each_other() {
        let mut system = InputSystem::new();
        let mut input = MockInput::new();

        input.press(Scancode::Down);
        system.poll_actions(&input);

        // Down still held, Enter pressed: confirm must still fire
        input.press(Scancode::Return);
        let actions = keyboard_actions(&system.poll_actions(&input));
        assert_eq!(actions, vec![ShellAction::Confirm]);
    }

    #[test]
    fn test_escape_and_enter_in_same_tick_both_fire() {
        let mut system = InputSystem::new();
        let mut input = MockInput::new();
        input.press(Scancode::Escape);
        input.press(Scancode::Space);

        let actions = keyboard_actions(&system.poll_actions(&input));
        assert_eq!(actions, vec![ShellAction::Escape, ShellAction::Confirm]);
    }

    #[test]
    fn test_pointer_press_drag_release_sequence() {
        let mut system = InputSystem::new();
        let mut input = MockInput::new();
        input.move_to(10, 20);

        let idle = system.poll_actions(&input);
        assert_eq!(idle, vec![ShellAction::Hover(10, 20)]);

        input.mouse_down();
        let pressed = system.poll_actions(&input);
        assert_eq!(
            pressed,
            vec![ShellAction::Hover(10, 20), ShellAction::PointerPressed(10, 20)]
        );

        input.move_to(30, 20);
        let dragged = system.poll_actions(&input);
        assert_eq!(
            dragged,
            vec![ShellAction::Hover(30, 20), ShellAction::PointerDragged(30, 20)]
        );

        input.mouse_up();
        let released = system.poll_actions(&input);
        assert_eq!(
            released,
            vec![ShellAction::Hover(30, 20), ShellAction::PointerReleased]
        );

        let after = system.poll_actions(&input);
        assert_eq!(after, vec![ShellAction::Hover(30, 20)]);
    }
}
