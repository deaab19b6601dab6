use macroquad::prelude::*;
use crate::application::{Palette, Renderer, Rgb};
use crate::domain::Grid;

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Draws the grid as fixed-size squares from the top-left corner.
///
/// Dead cells get a 1px border in the palette's border colour; live cells
/// are drawn solid.
pub struct MacroquadRenderer {
    cell_size: f32,
}

impl MacroquadRenderer {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }
}

impl Renderer for MacroquadRenderer {
    fn render(&mut self, grid: &Grid, palette: &Palette) {
        clear_background(BLACK);
        let (alive, dead, border) = (to_color(palette.alive), to_color(palette.dead), to_color(palette.border));
        let size = self.cell_size;

        for (x, y, cell) in grid.iter_cells() {
            let (sx, sy) = self.cell_origin(x, y);
            if cell.is_alive() {
                draw_rectangle(sx, sy, size, size, alive);
            } else {
                draw_rectangle(sx, sy, size, size, dead);
                draw_rectangle_lines(sx, sy, size, size, 1.0, border);
            }
        }
    }
}
