//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the 22 visible rows are drawn. An active piece that still pokes out of
//! the last buffer row shows up as half-block marks on the top border.

use crate::core::shapes::{minos, occupancy};
use crate::core::{GameSnapshot, Phase};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Rotation, Shape, PLAYFIELD_WIDTH, VISIBLE_HEIGHT, VISIBLE_TOP};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the well lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Border size, including the border itself.
    pub width: u16,
    pub height: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Layout {
    /// Terminal position of playfield column `x`, visible row `row`.
    pub fn cell_origin(&self, x: u16, row: u16) -> (u16, u16) {
        (self.x + 1 + x * self.cell_w, self.y + 1 + row * self.cell_h)
    }

    /// Left edge of the side panel.
    pub fn panel_x(&self) -> u16 {
        self.x.saturating_add(self.width).saturating_add(2)
    }
}

pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Well centered in the viewport.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let width = PLAYFIELD_WIDTH as u16 * self.cell_w + 2;
        let height = VISIBLE_HEIGHT as u16 * self.cell_h + 2;
        Layout {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(viewport);
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.width - 2,
            layout.height - 2,
            ' ',
            Style::new(Rgb::new(80, 80, 90), WELL_BG),
        );
        draw_border(fb, layout, border);

        for row in 0..VISIBLE_HEIGHT as u16 {
            let y = VISIBLE_TOP as i8 + row as i8;
            for x in 0..PLAYFIELD_WIDTH as u16 {
                match snap.playfield.get(x as i8, y) {
                    Some(Some(shape)) => self.draw_cell(fb, layout, x, row, shape),
                    _ => self.draw_empty_cell(fb, layout, x, row),
                }
            }
        }

        if let Some(active) = snap.active {
            for (mx, my) in minos(active.bitmap) {
                let x = active.x + mx;
                let y = active.y + my;
                if !(0..PLAYFIELD_WIDTH as i8).contains(&x) {
                    continue;
                }
                if y >= VISIBLE_TOP as i8 {
                    let row = (y - VISIBLE_TOP as i8) as u16;
                    if row < VISIBLE_HEIGHT as u16 {
                        self.draw_cell(fb, layout, x as u16, row, active.shape);
                    }
                } else if y == VISIBLE_TOP as i8 - 1 {
                    self.draw_peek(fb, layout, x as u16, active.shape);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if snap.phase == Phase::GameOver {
            draw_overlay_text(fb, layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, row: u16, shape: Shape) {
        let (px, py) = layout.cell_origin(x, row);
        let style = Style::new(shape_color(shape), WELL_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, row: u16) {
        let (px, py) = layout.cell_origin(x, row);
        let style = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    /// Mark a column on the top border where the piece is still in the buffer.
    fn draw_peek(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, shape: Shape) {
        let (px, _) = layout.cell_origin(x, 0);
        let style = Style::new(shape_color(shape), Rgb::new(0, 0, 0));
        fb.fill_rect(px, layout.y, self.cell_w, 1, '▄', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.panel_x();
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let style = Style::new(shape_color(snap.next), Rgb::new(0, 0, 0));
        for (mx, my) in minos(occupancy(snap.next, Rotation::North)) {
            let px = panel_x + mx as u16 * self.cell_w;
            let py = y + my as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: Style) {
    let Layout {
        x,
        y,
        width: w,
        height: h,
        ..
    } = layout;

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: Layout, text: &str) {
    let mid_y = layout.y.saturating_add(layout.height / 2);
    let text_w = text.chars().count() as u16;
    let x = layout.x.saturating_add(layout.width.saturating_sub(text_w) / 2);
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}

pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::S => Rgb::new(100, 220, 120),
        Shape::Z => Rgb::new(220, 80, 80),
        Shape::J => Rgb::new(80, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    }
}
