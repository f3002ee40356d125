//! Theme constants for the PNT GUI

use egui::Color32;

// Token grid
pub const GRID_BG: Color32 = Color32::from_rgb(44, 47, 52);
pub const TOKEN_AVAILABLE: Color32 = Color32::from_rgb(70, 74, 80);
pub const TOKEN_LEGAL: Color32 = Color32::from_rgb(222, 184, 135);
pub const TOKEN_BORDER: Color32 = Color32::from_rgb(30, 32, 36);

// Taken tokens, coloured by the player who took them
pub const PLAYER_ONE: Color32 = Color32::from_rgb(70, 130, 220);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(220, 95, 80);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 220, 90);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_legal() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

pub fn suggestion_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 220, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const TEXT_DARK: Color32 = Color32::from_rgb(30, 30, 35);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const GRID_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 8.0;
pub const MAX_CELL_SIZE: f32 = 72.0;
pub const LAST_MOVE_STROKE: f32 = 3.0;

pub fn player_color(player: crate::Player) -> Color32 {
    match player {
        crate::Player::One => PLAYER_ONE,
        crate::Player::Two => PLAYER_TWO,
    }
}
