//! Centralized color palette.
//! Single source of truth for scene / HUD colors.

use bevy::prelude::*;
use seesaw_sim::BallColor;

pub struct Palette;
impl Palette {
    pub const BG: Color = Color::srgb(0.96, 0.95, 0.92);
    pub const PLANK: Color = Color::srgb(0.82, 0.41, 0.12); // #D2691E
    pub const PLANK_GRAIN: Color = Color::srgb(0.63, 0.32, 0.18); // #A0522D
    pub const FULCRUM: Color = Color::srgb(0.55, 0.27, 0.07); // #8B4513
    pub const PIVOT: Color = Color::srgb(0.18, 0.31, 0.31); // #2F4F4F
    pub const CANVAS_BORDER: Color = Color::srgb(0.75, 0.75, 0.75);
    pub const TEXT: Color = Color::srgb(0.15, 0.15, 0.18);
    pub const LOG_TEXT: Color = Color::srgb(0.30, 0.30, 0.35);
    pub const BUTTON: Color = Color::srgb(0.85, 0.30, 0.30);
    pub const BUTTON_TEXT: Color = Color::WHITE;
}

/// Fill color for a ball.
#[inline]
pub fn ball_color(color: BallColor) -> Color {
    let [r, g, b] = color.srgb();
    Color::srgb(r, g, b)
}
