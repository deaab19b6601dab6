use macroquad::prelude::*;
use super::{BUTTON_COLOR, HOVER_COLOR, FONT_SIZE};

const ARROW_WIDTH: f32 = 40.0;

/// Cycles through a fixed list of options with left/right arrows.
///
/// A locked selector shows a single placeholder and ignores clicks.
#[derive(Clone)]
pub struct Selector {
    rect: Rect,
    label: String,
    items: Vec<String>,
    selected: usize,
    locked: Option<String>,
}

impl Selector {
    pub fn new(rect: Rect, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            items,
            selected: 0,
            locked: None,
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Show `placeholder` instead of the items until unlocked
    pub fn lock(&mut self, placeholder: impl Into<String>) {
        self.locked = Some(placeholder.into());
    }

    pub fn unlock(&mut self) {
        self.locked = None;
    }

    fn left_arrow(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, ARROW_WIDTH, self.rect.h)
    }

    fn right_arrow(&self) -> Rect {
        Rect::new(self.rect.right() - ARROW_WIDTH, self.rect.y, ARROW_WIDTH, self.rect.h)
    }

    /// Handle a click, wrapping at either end. Returns true if selection changed.
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.locked.is_some() || self.items.len() < 2 {
            return false;
        }
        let point = vec2(mouse_pos.0, mouse_pos.1);
        let n = self.items.len();
        if self.left_arrow().contains(point) {
            self.selected = (self.selected + n - 1) % n;
            true
        } else if self.right_arrow().contains(point) {
            self.selected = (self.selected + 1) % n;
            true
        } else {
            false
        }
    }

    /// Text currently shown in the middle of the selector
    pub fn display_text(&self) -> String {
        let item = match &self.locked {
            Some(placeholder) => placeholder.as_str(),
            None => self.items.get(self.selected).map_or("", String::as_str),
        };
        format!("{}: {}", self.label, item)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, BUTTON_COLOR);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WHITE);

        if self.locked.is_none() {
            let point = vec2(mouse_pos.0, mouse_pos.1);
            for (arrow, glyph) in [(self.left_arrow(), "<"), (self.right_arrow(), ">")] {
                if arrow.contains(point) {
                    draw_rectangle(arrow.x, arrow.y, arrow.w, arrow.h, HOVER_COLOR);
                }
                super::draw_centered_text(glyph, arrow, FONT_SIZE, WHITE);
            }
        }

        super::draw_centered_text(&self.display_text(), r, FONT_SIZE, WHITE);
    }
}
