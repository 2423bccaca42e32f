//! Collaborator Interfaces
//!
//! The shell core never talks to SDL2, kira or the filesystem directly.
//! Everything it needs from the outside world goes through the traits in
//! this module, and the `host` module provides the real implementations.
//!
//! # Available Interfaces
//!
//! - [`Renderer`] - draw calls and text measurement
//! - [`InputDevice`] - held keys, mouse buttons and cursor position
//! - [`AssetLoader`] - file reads, image decoding and directory listing
//! - [`AudioService`] - a single looping background track
//!
//! Image and track handles are associated types so that the host can use
//! borrowed SDL textures without the core knowing about their lifetimes.

#[cfg(test)]
pub mod mock;

use crate::error::AssetError;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::path::{Path, PathBuf};

/// Symbolic font faces, resolved to real glyph sizes by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontKind {
    /// Large heading (menu title, settings header)
    Title,
    /// Menu entries, labels and buttons
    Menu,
    /// Small print (version tag, hints)
    Caption,
}

/// Drawing surface for one Render call
pub trait Renderer {
    type Image;

    /// Draws `image` stretched to `dest`, modulated by `tint`
    fn draw_image(&mut self, image: &Self::Image, dest: Rect, tint: Color) -> Result<(), String>;

    /// Draws `text` with its top-left corner at `position`
    fn draw_text(
        &mut self,
        text: &str,
        font: FontKind,
        position: (i32, i32),
        color: Color,
    ) -> Result<(), String>;

    /// Returns the (width, height) `text` would occupy in `font`
    fn measure_text(&self, text: &str, font: FontKind) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;
}

/// Level-sensitive input state, sampled once per tick
pub trait InputDevice {
    fn is_key_down(&self, key: Scancode) -> bool;

    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Cursor position in logical screen coordinates
    fn cursor_position(&self) -> (i32, i32);
}

/// Asset access used at startup and by the streaming frame source
pub trait AssetLoader {
    type Image;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AssetError>;

    fn decode_image(&self, bytes: &[u8]) -> Result<Self::Image, AssetError>;

    /// Lists directory entries sorted by path
    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, AssetError>;

    /// Reads and decodes the image at `path`
    fn load_image(&self, path: &Path) -> Result<Self::Image, AssetError> {
        let bytes = self.read_file(path)?;
        self.decode_image(&bytes).map_err(|e| e.at(path))
    }
}

/// Playback of one looping background track
///
/// Looping is the service's job: a track loaded here restarts at its
/// beginning with no gap when it reaches the end.
pub trait AudioService {
    type Track;

    fn load_looping_track(&mut self, bytes: Vec<u8>) -> Result<Self::Track, AssetError>;

    fn play(&mut self, track: &mut Self::Track);

    fn pause(&mut self, track: &mut Self::Track);

    fn rewind_to_start(&mut self, track: &mut Self::Track);

    fn is_playing(&self, track: &Self::Track) -> bool;

    /// Sets linear loudness in `0.0..=1.0`
    fn set_volume(&mut self, track: &mut Self::Track, volume: f64);
}
