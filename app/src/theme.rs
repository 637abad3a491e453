use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::WHITE;
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const MINE: Color32 = Color32::BLUE;
pub const FLAG: Color32 = Color32::RED;

/// Classic per-count digit colors, 0 through 8.
pub fn count_color(count: u8) -> Color32 {
    match count {
        1 => Color32::from_rgb(0, 0, 255),
        2 => Color32::from_rgb(0, 128, 0),
        3 => Color32::from_rgb(255, 0, 0),
        4 => Color32::from_rgb(0, 0, 128),
        5 => Color32::from_rgb(128, 0, 0),
        6 => Color32::from_rgb(0, 128, 128),
        8 => Color32::from_rgb(128, 128, 128),
        // 0 and 7 both draw black
        _ => Color32::BLACK,
    }
}
