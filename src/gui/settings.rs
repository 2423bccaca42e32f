//! Settings Panel
//!
//! Holds the widget state of the settings screen: the active language,
//! the master volume shown on the slider, and whether the slider is being
//! dragged.

use super::layout;
use crate::localization::Language;

/// Volume slider drag state
///
/// Set on a press inside the slider; cleared only when the pointer button
/// is released, not when the pointer leaves the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    pub active: bool,
}

/// Something on the settings screen the pointer can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTarget {
    Language(Language),
    VolumeSlider,
    Back,
}

#[derive(Debug, Clone)]
pub struct SettingsPanel {
    language: Language,
    master_volume: f64,
    drag: DragState,
}

impl SettingsPanel {
    pub fn new(master_volume: f64) -> Self {
        SettingsPanel {
            language: Language::default(),
            master_volume: master_volume.clamp(0.0, 1.0),
            drag: DragState::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches language; returns `true` if it changed
    pub fn set_language(&mut self, language: Language) -> bool {
        let changed = self.language != language;
        self.language = language;
        changed
    }

    pub fn master_volume(&self) -> f64 {
        self.master_volume
    }

    #[cfg(test)]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Control under the point, if any
    pub fn target_at(&self, x: i32, y: i32) -> Option<SettingsTarget> {
        if layout::hit_test(layout::russian_button(), x, y) {
            Some(SettingsTarget::Language(Language::Russian))
        } else if layout::hit_test(layout::english_button(), x, y) {
            Some(SettingsTarget::Language(Language::English))
        } else if layout::hit_test(layout::volume_slider(), x, y) {
            Some(SettingsTarget::VolumeSlider)
        } else if layout::hit_test(layout::back_button(), x, y) {
            Some(SettingsTarget::Back)
        } else {
            None
        }
    }

    /// Starts dragging and jumps the volume to `x`; returns the new volume
    pub fn begin_drag(&mut self, x: i32) -> Option<f64> {
        self.drag.active = true;
        self.drag_to(x)
    }

    /// Moves the volume to `x` while dragging; returns it if it changed
    pub fn drag_to(&mut self, x: i32) -> Option<f64> {
        if !self.drag.active {
            return None;
        }
        let volume = slider_value(x);
        if volume == self.master_volume {
            return None;
        }
        self.master_volume = volume;
        Some(volume)
    }

    pub fn end_drag(&mut self) {
        self.drag.active = false;
    }
}

/// Maps a pointer x to a volume through the slider geometry, clamped to `[0, 1]`
pub fn slider_value(x: i32) -> f64 {
    let slider = layout::volume_slider();
    let relative = (x - slider.x()) as f64 / slider.width() as f64;
    relative.clamp(0.0, 1.0)
}
