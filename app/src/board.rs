use eframe::egui;
use minefield_core::{CellKind, Coord2, GRID_SIZE, GameEngine};

use crate::theme;

/// Fixed cell edge in pixels; pointer positions map to cells by division.
pub const CELL_PIXELS: f32 = 70.0;
pub const BOARD_PIXELS: f32 = CELL_PIXELS * GRID_SIZE as f32;

pub struct BoardClick {
    pub coords: Coord2,
    pub secondary: bool,
}

/// Paints the board and reports a click on it, if any. The engine itself
/// decides whether the targeted cell accepts the move.
pub fn show(ui: &mut egui::Ui, engine: &GameEngine) -> Option<BoardClick> {
    let (response, painter) =
        ui.allocate_painter(egui::Vec2::splat(BOARD_PIXELS), egui::Sense::click());
    let rect = response.rect;

    painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::BOARD_BACKGROUND);
    let stroke = egui::Stroke::new(1.0, theme::GRID_LINE);
    for i in 1..GRID_SIZE {
        let offset = f32::from(i) * CELL_PIXELS;
        painter.line_segment(
            [
                egui::pos2(rect.min.x, rect.min.y + offset),
                egui::pos2(rect.max.x, rect.min.y + offset),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.min.x + offset, rect.min.y),
                egui::pos2(rect.min.x + offset, rect.max.y),
            ],
            stroke,
        );
    }
    painter.rect_stroke(rect, egui::CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = engine.cell_at((x, y));
            let center = rect.min
                + egui::vec2(
                    (f32::from(x) + 0.5) * CELL_PIXELS,
                    (f32::from(y) + 0.5) * CELL_PIXELS,
                );
            if cell.revealed {
                match cell.kind {
                    CellKind::Mine => {
                        painter.text(
                            center,
                            egui::Align2::CENTER_CENTER,
                            "M",
                            egui::FontId::proportional(32.0),
                            theme::MINE,
                        );
                    }
                    CellKind::Number(count) => {
                        painter.text(
                            center,
                            egui::Align2::CENTER_CENTER,
                            count.to_string(),
                            egui::FontId::monospace(32.0),
                            theme::count_color(count),
                        );
                    }
                }
            } else if engine.is_flagged((x, y)) {
                painter.rect_filled(
                    egui::Rect::from_center_size(center, egui::vec2(14.0, 14.0)),
                    egui::CornerRadius::same(2),
                    theme::FLAG,
                );
            }
        }
    }

    let secondary = response.secondary_clicked();
    if !(response.clicked() || secondary) {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    let coords = (
        ((pos.x - rect.min.x) / CELL_PIXELS) as u8,
        ((pos.y - rect.min.y) / CELL_PIXELS) as u8,
    );
    Some(BoardClick { coords, secondary })
}
