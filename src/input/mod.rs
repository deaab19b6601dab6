use macroquad::prelude::*;
use crate::application::{InputEvent, InputSource, PointerButton};

/// Key that advances a manual run while held
pub const STEP_KEY: KeyCode = KeyCode::Space;

/// Polls macroquad's input state once per frame.
///
/// Pointer presses on the first drain are dropped: they are the click that
/// left the menu, not an edit.
#[derive(Default)]
pub struct MacroquadInput {
    armed: bool,
}

impl MacroquadInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn admit(&mut self, events: Vec<InputEvent>) -> Vec<InputEvent> {
        if self.armed {
            return events;
        }
        self.armed = true;
        events
            .into_iter()
            .filter(|event| !matches!(event, InputEvent::PointerDown { .. }))
            .collect()
    }
}

/// Translate a mouse press into a controller event. Other buttons are dropped.
pub fn pointer_event(button: MouseButton, mouse_pos: (f32, f32)) -> Option<InputEvent> {
    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => return None,
    };
    if !mouse_pos.0.is_finite() || !mouse_pos.1.is_finite() {
        return None;
    }
    Some(InputEvent::PointerDown {
        button,
        screen_x: mouse_pos.0.floor() as i32,
        screen_y: mouse_pos.1.floor() as i32,
    })
}

impl InputSource for MacroquadInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            return vec![InputEvent::Quit];
        }

        let mouse_pos = mouse_position();
        let mut events: Vec<InputEvent> = [MouseButton::Left, MouseButton::Right]
            .into_iter()
            .filter(|&button| is_mouse_button_pressed(button))
            .filter_map(|button| pointer_event(button, mouse_pos))
            .collect();
        events.push(InputEvent::KeyState {
            step_key_held: is_key_down(STEP_KEY),
        });
        self.admit(events)
    }
}

/// Live tick rate adjustment from the arrow keys
pub fn tick_rate_delta() -> i32 {
    let mut delta = 0;
    if is_key_pressed(KeyCode::Up) {
        delta += 1;
    }
    if is_key_pressed(KeyCode::Down) {
        delta -= 1;
    }
    delta
}
