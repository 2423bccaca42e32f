//! Test doubles for the collaborator interfaces.

use super::{AssetLoader, AudioService, FontKind, InputDevice, Renderer};
use crate::error::AssetError;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Bytes that `MockLoader::decode_image` refuses to decode
pub const CORRUPT: &[u8] = b"corrupt";

/// Decoded image that tracks how many of its kind are alive
#[derive(Debug)]
pub struct MockImage {
    pub name: String,
    live: Rc<Cell<usize>>,
}

impl Drop for MockImage {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// In-memory filesystem; file contents double as the decoded image name
#[derive(Default)]
pub struct MockLoader {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashMap<PathBuf, Vec<PathBuf>>,
    live: Rc<Cell<usize>>,
    decodes: Cell<usize>,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    /// Adds `count` frames named `frame_00001.png`.. under `dir`
    pub fn with_frames(mut self, dir: &str, count: usize) -> Self {
        let mut entries = Vec::new();
        for i in 1..=count {
            let path = Path::new(dir).join(format!("frame_{:05}.png", i));
            self.files
                .insert(path.clone(), format!("frame{}", i).into_bytes());
            entries.push(path);
        }
        self.dirs.insert(PathBuf::from(dir), entries);
        self
    }

    pub fn corrupt(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), CORRUPT.to_vec());
        self
    }

    /// Number of decoded images currently alive
    pub fn live_images(&self) -> usize {
        self.live.get()
    }

    pub fn decode_count(&self) -> usize {
        self.decodes.get()
    }
}

impl AssetLoader for MockLoader {
    type Image = MockImage;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_path_buf()))
    }

    fn decode_image(&self, bytes: &[u8]) -> Result<MockImage, AssetError> {
        self.decodes.set(self.decodes.get() + 1);
        if bytes == CORRUPT {
            return Err(AssetError::decode("corrupt image"));
        }
        self.live.set(self.live.get() + 1);
        Ok(MockImage {
            name: String::from_utf8_lossy(bytes).into_owned(),
            live: Rc::clone(&self.live),
        })
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, AssetError> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_path_buf()))
    }
}

/// Held-state input controlled by the test
#[derive(Default)]
pub struct MockInput {
    keys: HashSet<Scancode>,
    left_down: bool,
    cursor: (i32, i32),
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Scancode) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Scancode) {
        self.keys.remove(&key);
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    pub fn mouse_down(&mut self) {
        self.left_down = true;
    }

    pub fn mouse_up(&mut self) {
        self.left_down = false;
    }
}

impl InputDevice for MockInput {
    fn is_key_down(&self, key: Scancode) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        button == MouseButton::Left && self.left_down
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }
}

/// Observable state of the mock audio device
#[derive(Debug, Default)]
pub struct MockAudioState {
    pub playing: bool,
    pub volume: f64,
    pub plays: usize,
    pub pauses: usize,
    pub rewinds: usize,
    /// When set, `play` is counted but never starts the stream
    pub broken: bool,
}

/// Audio service whose state is shared with the test through an `Rc`
#[derive(Clone, Default)]
pub struct MockAudio {
    pub state: Rc<RefCell<MockAudioState>>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the device dropping the stream
    pub fn halt(&self) {
        self.state.borrow_mut().playing = false;
    }

    pub fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    pub fn is_playing_now(&self) -> bool {
        self.state.borrow().playing
    }
}

pub struct MockTrack;

impl AudioService for MockAudio {
    type Track = MockTrack;

    fn load_looping_track(&mut self, bytes: Vec<u8>) -> Result<MockTrack, AssetError> {
        if bytes == CORRUPT {
            return Err(AssetError::decode("corrupt track"));
        }
        Ok(MockTrack)
    }

    fn play(&mut self, _track: &mut MockTrack) {
        let mut state = self.state.borrow_mut();
        state.playing = !state.broken;
        state.plays += 1;
    }

    fn pause(&mut self, _track: &mut MockTrack) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.pauses += 1;
    }

    fn rewind_to_start(&mut self, _track: &mut MockTrack) {
        self.state.borrow_mut().rewinds += 1;
    }

    fn is_playing(&self, _track: &MockTrack) -> bool {
        self.state.borrow().playing
    }

    fn set_volume(&mut self, _track: &mut MockTrack, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }
}

/// A draw call captured by `MockRenderer`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image { name: String, dest: Rect, tint: Color },
    Text { text: String, font: FontKind, position: (i32, i32) },
    Fill { rect: Rect, color: Color },
}

/// Renderer that records calls; text is measured as 10px per char
#[derive(Default)]
pub struct MockRenderer {
    pub calls: Vec<DrawCall>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for MockRenderer {
    type Image = MockImage;

    fn draw_image(&mut self, image: &MockImage, dest: Rect, tint: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Image {
            name: image.name.clone(),
            dest,
            tint,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: FontKind,
        position: (i32, i32),
        _color: Color,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            font,
            position,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, _font: FontKind) -> (u32, u32) {
        (text.chars().count() as u32 * 10, 20)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Fill { rect, color });
        Ok(())
    }
}
