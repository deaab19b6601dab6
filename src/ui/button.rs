use macroquad::prelude::*;
use super::{BUTTON_COLOR, HOVER_COLOR, FONT_SIZE};

/// Clickable menu entry
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    text: String,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            HOVER_COLOR
        } else {
            BUTTON_COLOR
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, color);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);
        super::draw_centered_text(&self.text, self.rect, FONT_SIZE, WHITE);
    }
}

/// On/off switch, drawn as a button with a state suffix
#[derive(Clone)]
pub struct Toggle {
    button: Button,
    on: bool,
}

impl Toggle {
    pub fn new(rect: Rect, label: impl Into<String>, on: bool) -> Self {
        Self {
            button: Button::new(rect, label),
            on,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip on a click inside the switch. Returns true if it flipped.
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.button.is_hovered(mouse_pos) {
            self.on = !self.on;
            return true;
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let label = format!("{}: {}", self.button.text(), if self.on { "On" } else { "Off" });
        Button::new(self.button.rect, label).draw(mouse_pos);
    }
}
