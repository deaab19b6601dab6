mod button;
mod menu;
mod selector;
mod slider;

pub use button::{Button, Toggle};
pub use menu::{Menu, MenuAction};
pub use selector::Selector;
pub use slider::Slider;

use macroquad::prelude::*;

pub const MENU_WIDTH: f32 = 600.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const ROW_SPACING: f32 = 60.0;
pub const FONT_SIZE: f32 = 24.0;

pub const BUTTON_COLOR: Color = Color::new(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0, 1.0);
pub const HOVER_COLOR: Color = Color::new(100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0, 1.0);

/// Draw `text` centred inside `rect`
fn draw_centered_text(text: &str, rect: Rect, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        rect.x + (rect.w - size.width) / 2.0,
        rect.y + (rect.h + size.height) / 2.0,
        font_size,
        color,
    );
}
