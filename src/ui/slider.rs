use macroquad::prelude::*;
use super::{BUTTON_COLOR, HOVER_COLOR, FONT_SIZE};

/// Horizontal range slider snapping to a fixed increment
#[derive(Clone)]
pub struct Slider {
    rect: Rect,
    label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    decimals: usize,
}

impl Slider {
    pub fn new(rect: Rect, label: impl Into<String>, range: (f64, f64), step: f64, value: f64) -> Self {
        let decimals = if step.fract() == 0.0 { 0 } else { 2 };
        let mut slider = Self {
            rect,
            label: label.into(),
            min: range.0,
            max: range.1,
            step,
            value: range.0,
            decimals,
        };
        slider.value = slider.snap(value);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Nearest step within range
    fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Value under a horizontal screen position
    pub fn value_at(&self, x: f32) -> f64 {
        let t = f64::from(((x - self.rect.x) / self.rect.w).clamp(0.0, 1.0));
        self.snap(self.min + t * (self.max - self.min))
    }

    /// Move the knob to the pointer if it is over the track.
    /// Returns true if the value changed.
    pub fn drag(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !self.rect.contains(vec2(mouse_pos.0, mouse_pos.1)) {
            return false;
        }
        let value = self.value_at(mouse_pos.0);
        let changed = (value - self.value).abs() > f64::EPSILON;
        self.value = value;
        changed
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let r = self.rect;
        let hovered = r.contains(vec2(mouse_pos.0, mouse_pos.1));
        draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(45, 45, 45, 255));

        let t = ((self.value - self.min) / (self.max - self.min)) as f32;
        let fill = if hovered { HOVER_COLOR } else { BUTTON_COLOR };
        draw_rectangle(r.x, r.y, r.w * t, r.h, fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WHITE);

        let text = format!("{}: {:.*}", self.label, self.decimals, self.value);
        super::draw_centered_text(&text, r, FONT_SIZE, WHITE);
    }
}
