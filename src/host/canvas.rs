use crate::platform::{FontKind, Renderer};
use crate::text::{draw_simple_text, text_size};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::marker::PhantomData;

/// Bitmap font scale for each symbolic font
pub fn font_scale(font: FontKind) -> u32 {
    match font {
        FontKind::Title => 8,
        FontKind::Menu => 3,
        FontKind::Caption => 2,
    }
}

/// `Renderer` over an SDL2 window canvas
///
/// `'t` is the lifetime of the texture creator the images came from.
pub struct SdlRenderer<'r, 't> {
    canvas: &'r mut Canvas<Window>,
    _textures: PhantomData<&'t ()>,
}

impl<'r, 't> SdlRenderer<'r, 't> {
    pub fn new(canvas: &'r mut Canvas<Window>) -> Self {
        SdlRenderer {
            canvas,
            _textures: PhantomData,
        }
    }
}

impl<'r, 't> Renderer for SdlRenderer<'r, 't> {
    type Image = Texture<'t>;

    fn draw_image(&mut self, image: &Texture<'t>, dest: Rect, tint: Color) -> Result<(), String> {
        self.canvas.copy(image, None, dest)?;

        // Colour modulation needs a mutable texture; a black overlay of the
        // matching strength gives the same result for grey tints
        let darkness = 255 - tint.r.min(tint.g).min(tint.b);
        if darkness > 0 {
            self.canvas.set_draw_color(Color::RGBA(0, 0, 0, darkness));
            self.canvas.fill_rect(dest)?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontKind,
        (x, y): (i32, i32),
        color: Color,
    ) -> Result<(), String> {
        draw_simple_text(self.canvas, text, x, y, color, font_scale(font))
    }

    fn measure_text(&self, text: &str, font: FontKind) -> (u32, u32) {
        text_size(text, font_scale(font))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }
}
