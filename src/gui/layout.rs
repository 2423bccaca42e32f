//! Fixed screen geometry
//!
//! The same rectangles drive drawing and hit-testing, so what the player
//! sees is exactly what they can click. Coordinates are logical pixels on
//! the 1280x720 screen.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use sdl2::rect::Rect;

// Main menu
pub const MENU_X: i32 = 80;
pub const MENU_START_Y: i32 = 300;
pub const MENU_SPACING: i32 = 60;
pub const MENU_ENTRY_WIDTH: u32 = 300;
pub const MENU_ENTRY_HEIGHT: u32 = 40;

// Title block
pub const TITLE_X: i32 = 60;
pub const TITLE_Y: i32 = 70;

// Settings
pub const SETTINGS_TITLE_Y: i32 = 80;
pub const LANGUAGE_LABEL_Y: i32 = 210;
pub const VOLUME_LABEL_Y: i32 = 370;
pub const SLIDER_BAR_HEIGHT: u32 = 12;

/// Full-screen rectangle
pub fn screen() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Horizontal centre of the screen
pub fn center_x() -> i32 {
    SCREEN_WIDTH as i32 / 2
}

/// Top of the text row for menu entry `index`
pub fn menu_entry_text_y(index: usize) -> i32 {
    MENU_START_Y + index as i32 * MENU_SPACING
}

/// Clickable box around menu entry `index`
pub fn menu_entry(index: usize) -> Rect {
    Rect::new(
        MENU_X,
        menu_entry_text_y(index) - 10,
        MENU_ENTRY_WIDTH,
        MENU_ENTRY_HEIGHT,
    )
}

pub fn russian_button() -> Rect {
    Rect::new(center_x() - 200, 260, 180, 70)
}

pub fn english_button() -> Rect {
    Rect::new(center_x() + 20, 260, 180, 70)
}

/// Grab area of the volume slider; the bar is drawn in its middle
pub fn volume_slider() -> Rect {
    Rect::new(center_x() - 150, 414, 300, 24)
}

/// Visible bar of the volume slider
pub fn volume_bar() -> Rect {
    let slider = volume_slider();
    let inset = (slider.height() - SLIDER_BAR_HEIGHT) as i32 / 2;
    Rect::new(slider.x(), slider.y() + inset, slider.width(), SLIDER_BAR_HEIGHT)
}

pub fn back_button() -> Rect {
    Rect::new(center_x() - 100, 520, 200, 50)
}

/// Inclusive containment: points on the edge count as inside
pub fn hit_test(rect: Rect, x: i32, y: i32) -> bool {
    x >= rect.x()
        && x <= rect.x() + rect.width() as i32
        && y >= rect.y()
        && y <= rect.y() + rect.height() as i32
}
