//! Screen Drawing
//!
//! Stateless draw functions for each screen. They read widget state and
//! issue draw calls on a [`Renderer`]; nothing here decides behaviour.
//! Positions come from [`crate::gui::layout`], so what is drawn is what
//! can be clicked.
//!
//! Draw order per tick:
//! 1. Background (video frame or still image, dimmed; black if none)
//! 2. The current screen on top

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::gui::layout;
use crate::gui::{MainMenu, SettingsPanel};
use crate::localization::{Language, resolve};
use crate::platform::{FontKind, Renderer};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Grey tint that dims the background to 40%
pub const BACKGROUND_TINT: Color = Color::RGB(102, 102, 102);

const TITLE_COLOR: Color = Color::RGB(230, 220, 200);
const SUBTITLE_COLOR: Color = Color::RGBA(180, 170, 150, 200);
const DECORATION_COLOR: Color = Color::RGBA(180, 170, 150, 100);
const ITEM_COLOR: Color = Color::RGBA(150, 140, 130, 200);
const LABEL_COLOR: Color = Color::RGB(200, 190, 180);
const SHADOW_COLOR: Color = Color::RGBA(0, 0, 0, 100);
const OVERLAY_COLOR: Color = Color::RGBA(0, 0, 0, 200);

/// Button colours: (fill, border, text)
const BUTTON_SELECTED: (Color, Color, Color) = (
    Color::RGB(100, 80, 150),
    Color::RGB(150, 120, 200),
    Color::RGB(255, 255, 255),
);
const BUTTON_HOVER: (Color, Color, Color) = (
    Color::RGB(80, 60, 120),
    Color::RGB(150, 120, 200),
    Color::RGB(255, 255, 255),
);
const BUTTON_NORMAL: (Color, Color, Color) = (
    Color::RGB(50, 40, 80),
    Color::RGBA(100, 80, 140, 200),
    Color::RGB(200, 200, 200),
);

fn with_alpha(color: Color, alpha: f64) -> Color {
    Color::RGBA(color.r, color.g, color.b, alpha.clamp(0.0, 255.0) as u8)
}

/// Draws the current frame stretched over the screen, or clears to black
pub fn draw_background<R: Renderer>(renderer: &mut R, frame: Option<&R::Image>) -> Result<(), String> {
    match frame {
        Some(image) => renderer.draw_image(image, layout::screen(), BACKGROUND_TINT),
        None => renderer.fill_rect(layout::screen(), Color::RGB(0, 0, 0)),
    }
}

/// Text with a drop shadow offset by `offset` pixels
fn draw_shadowed_text<R: Renderer>(
    renderer: &mut R,
    text: &str,
    font: FontKind,
    (x, y): (i32, i32),
    color: Color,
    offset: i32,
) -> Result<(), String> {
    renderer.draw_text(text, font, (x + offset, y + offset), SHADOW_COLOR)?;
    renderer.draw_text(text, font, (x, y), color)
}

/// Two-pixel frame just inside `rect`
fn draw_border<R: Renderer>(renderer: &mut R, rect: Rect, color: Color) -> Result<(), String> {
    let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
    renderer.fill_rect(Rect::new(x, y, w, 2), color)?;
    renderer.fill_rect(Rect::new(x, y + h as i32 - 2, w, 2), color)?;
    renderer.fill_rect(Rect::new(x, y, 2, h), color)?;
    renderer.fill_rect(Rect::new(x + w as i32 - 2, y, 2, h), color)
}

/// Soft square halo with a bright core, pulsing with `glow`
fn draw_glowing_dot<R: Renderer>(renderer: &mut R, (x, y): (i32, i32), glow: f64) -> Result<(), String> {
    for i in 0..4u32 {
        let size = 8 - i * 2;
        let alpha = 50.0 * glow * (4 - i) as f64 / 4.0;
        let half = (size / 2) as i32;
        renderer.fill_rect(
            Rect::new(x - half, y - half, size, size),
            with_alpha(Color::RGB(200, 160, 255), alpha),
        )?;
    }
    renderer.fill_rect(
        Rect::new(x - 1, y - 1, 2, 2),
        with_alpha(Color::RGB(240, 220, 255), 220.0 + 35.0 * glow),
    )
}

/// Filled button with a border and centred label
fn draw_button<R: Renderer>(
    renderer: &mut R,
    rect: Rect,
    label: &str,
    (fill, border, text): (Color, Color, Color),
) -> Result<(), String> {
    renderer.fill_rect(rect, fill)?;
    draw_border(renderer, rect, border)?;

    let (w, h) = renderer.measure_text(label, FontKind::Menu);
    let x = rect.center().x() - w as i32 / 2;
    let y = rect.center().y() - h as i32 / 2;
    draw_shadowed_text(renderer, label, FontKind::Menu, (x, y), text, 2)
}

/// Draws `text` horizontally centred on the screen at row `y`
fn draw_centered<R: Renderer>(
    renderer: &mut R,
    text: &str,
    font: FontKind,
    y: i32,
    color: Color,
    shadow: i32,
) -> Result<(), String> {
    let (w, _) = renderer.measure_text(text, font);
    let x = layout::center_x() - w as i32 / 2;
    draw_shadowed_text(renderer, text, font, (x, y), color, shadow)
}

pub fn draw_menu<R: Renderer>(
    renderer: &mut R,
    menu: &MainMenu,
    language: Language,
    glow: f64,
) -> Result<(), String> {
    // 1. Title with a stacked shadow
    let title = "Aethelgard";
    let (x, y) = (layout::TITLE_X, layout::TITLE_Y);
    for i in (1..=5).rev() {
        renderer.draw_text(
            title,
            FontKind::Title,
            (x + i, y + i),
            Color::RGBA(0, 0, 0, 30 * i as u8),
        )?;
    }
    renderer.draw_text(title, FontKind::Title, (x, y), TITLE_COLOR)?;

    // 2. Subtitle and underline
    let (title_w, title_h) = renderer.measure_text(title, FontKind::Title);
    let subtitle_y = y + title_h as i32 + 14;
    renderer.draw_text("Realms Unbound", FontKind::Menu, (x + 10, subtitle_y), SUBTITLE_COLOR)?;
    let (_, subtitle_h) = renderer.measure_text("Realms Unbound", FontKind::Menu);
    renderer.fill_rect(
        Rect::new(x, subtitle_y + subtitle_h as i32 + 10, title_w, 2),
        DECORATION_COLOR,
    )?;

    // 3. Entries
    for (i, entry) in menu.entries().iter().enumerate() {
        let text = resolve(entry.text_key, language);
        let item_y = layout::menu_entry_text_y(i);
        let (text_w, text_h) = renderer.measure_text(text, FontKind::Menu);

        let color = if i == menu.selected_index() {
            let line_y = item_y + text_h as i32 + 4;
            let line_w = text_w + 10;
            for j in 0..3i32 {
                renderer.fill_rect(
                    Rect::new(layout::MENU_X - 5 - j, line_y + j, line_w + j as u32 * 2, 1),
                    with_alpha(Color::RGB(180, 140, 255), (60 - j * 15) as f64 * glow),
                )?;
            }
            renderer.fill_rect(
                Rect::new(layout::MENU_X - 5, line_y, line_w, 2),
                with_alpha(Color::RGB(200, 160, 255), 200.0 * glow),
            )?;
            draw_glowing_dot(renderer, (layout::MENU_X - 25, item_y + text_h as i32 / 2), glow)?;

            let bright = (220.0 + 35.0 * glow).min(255.0) as u8;
            Color::RGB(bright, bright.saturating_sub(20), 255)
        } else {
            ITEM_COLOR
        };

        draw_shadowed_text(renderer, text, FontKind::Menu, (layout::MENU_X, item_y), color, 2)?;
    }

    // 4. Bottom decoration and version tag
    let bottom = SCREEN_HEIGHT as i32 - 40;
    renderer.fill_rect(
        Rect::new(60, bottom, SCREEN_WIDTH - 120, 1),
        Color::RGBA(180, 170, 150, 80),
    )?;
    renderer.draw_text(
        concat!("v", env!("CARGO_PKG_VERSION")),
        FontKind::Caption,
        (SCREEN_WIDTH as i32 - 150, bottom + 16),
        Color::RGBA(120, 110, 100, 150),
    )
}

pub fn draw_settings<R: Renderer>(
    renderer: &mut R,
    panel: &SettingsPanel,
    cursor: (i32, i32),
    glow: f64,
) -> Result<(), String> {
    let language = panel.language();
    let (mouse_x, mouse_y) = cursor;

    renderer.fill_rect(layout::screen(), OVERLAY_COLOR)?;

    // Title and decorative line
    let title = resolve("Settings", language);
    draw_centered(renderer, title, FontKind::Title, layout::SETTINGS_TITLE_Y, TITLE_COLOR, 2)?;
    let (title_w, title_h) = renderer.measure_text(title, FontKind::Title);
    renderer.fill_rect(
        Rect::new(
            layout::center_x() - title_w as i32 / 2,
            layout::SETTINGS_TITLE_Y + title_h as i32 + 8,
            title_w,
            2,
        ),
        DECORATION_COLOR,
    )?;

    // Language section
    let label = resolve("Language", language);
    draw_centered(renderer, label, FontKind::Menu, layout::LANGUAGE_LABEL_Y, LABEL_COLOR, 2)?;

    for (choice, rect) in [
        (Language::Russian, layout::russian_button()),
        (Language::English, layout::english_button()),
    ] {
        let selected = choice == language;
        let style = if selected {
            BUTTON_SELECTED
        } else if layout::hit_test(rect, mouse_x, mouse_y) {
            BUTTON_HOVER
        } else {
            BUTTON_NORMAL
        };
        draw_button(renderer, rect, choice.native_name(), style)?;
        if selected {
            draw_glowing_dot(renderer, (rect.x() + 15, rect.center().y()), glow)?;
        }
    }

    // Volume section
    let label = resolve("Volume", language);
    draw_centered(renderer, label, FontKind::Menu, layout::VOLUME_LABEL_Y, LABEL_COLOR, 2)?;

    let bar = layout::volume_bar();
    let volume = panel.master_volume();
    let filled = (bar.width() as f64 * volume) as u32;
    renderer.fill_rect(bar, Color::RGB(40, 30, 60))?;
    if filled > 0 {
        renderer.fill_rect(
            Rect::new(bar.x(), bar.y(), filled, bar.height()),
            Color::RGB(100, 80, 150),
        )?;
    }
    draw_border(renderer, bar, Color::RGBA(120, 100, 160, 200))?;

    let knob_x = bar.x() + filled as i32;
    let knob_y = bar.center().y();
    for i in 0..3u32 {
        let size = 12 + i * 3;
        let half = (size / 2) as i32;
        renderer.fill_rect(
            Rect::new(knob_x - half, knob_y - half, size, size),
            Color::RGBA(150, 120, 200, (50 - i * 15) as u8),
        )?;
    }
    renderer.fill_rect(Rect::new(knob_x - 6, knob_y - 6, 12, 12), Color::RGB(200, 160, 255))?;

    let percent = format!("{}%", (volume * 100.0) as u32);
    let percent_y = bar.y() + bar.height() as i32 + 24;
    draw_centered(renderer, &percent, FontKind::Menu, percent_y, Color::RGB(220, 200, 255), 2)?;

    // Back button
    let back = layout::back_button();
    let style = if layout::hit_test(back, mouse_x, mouse_y) {
        BUTTON_HOVER
    } else {
        BUTTON_NORMAL
    };
    draw_button(renderer, back, resolve("Back", language), style)
}

pub fn draw_playing<R: Renderer>(renderer: &mut R, language: Language) -> Result<(), String> {
    renderer.fill_rect(layout::screen(), OVERLAY_COLOR)?;

    let center_y = SCREEN_HEIGHT as i32 / 2;
    draw_centered(
        renderer,
        resolve("Game Started", language),
        FontKind::Title,
        center_y - 40,
        Color::RGB(220, 200, 180),
        3,
    )?;

    let hint = resolve("Press ESC", language);
    let (w, _) = renderer.measure_text(hint, FontKind::Menu);
    renderer.draw_text(
        hint,
        FontKind::Menu,
        (layout::center_x() - w as i32 / 2, center_y + 60),
        Color::RGBA(180, 170, 160, 200),
    )
}
