//! Shell Configuration
//!
//! Read-only asset manifest loaded once at startup from
//! `assets/config/shell.json`. Every field has a default, so a missing or
//! partial file is fine. Nothing here is ever written back: volume,
//! language and menu selection always start from these defaults.
//!
//! ```json
//! {
//!   "tick_rate": 60,
//!   "assets": { "video_frames_dir": "assets/menu-background-video" },
//!   "video": { "fps": 30, "strategy": "preloaded" }
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the manifest, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config/shell.json";

/// Logical screen size; fixed, never negotiated with the window
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    /// Host ticks per second; one Advance and one Render per tick
    pub tick_rate: u32,
    pub assets: AssetPaths,
    pub video: VideoConfig,
    pub glow: GlowConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Static background; load-bearing, startup fails without it
    pub background_image: PathBuf,
    /// Directory of pre-extracted video frames (`frame_00001.png`, ...)
    pub video_frames_dir: PathBuf,
    pub music: PathBuf,
}

/// How the background video keeps its frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStrategy {
    /// One decoded frame resident at a time
    Streaming,
    /// Every frame decoded at startup
    Preloaded,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub fps: f64,
    pub strategy: FrameStrategy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub default_master_volume: f64,
    /// Loudness multiplier while the main menu is shown
    pub menu_duck: f64,
    /// Loudness multiplier on every other screen
    pub background_duck: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            window: WindowConfig::default(),
            tick_rate: 60,
            assets: AssetPaths::default(),
            video: VideoConfig::default(),
            glow: GlowConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Aethelgard: Realms Unbound".to_string(),
            fullscreen: false,
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            background_image: PathBuf::from("assets/background.png"),
            video_frames_dir: PathBuf::from("assets/menu-background-video"),
            music: PathBuf::from("assets/main_menu_sound.mp3"),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            fps: 30.0,
            strategy: FrameStrategy::Streaming,
        }
    }
}

impl Default for GlowConfig {
    fn default() -> Self {
        GlowConfig {
            min: 0.3,
            max: 1.0,
            step: 0.02,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            default_master_volume: 0.7,
            menu_duck: 1.0,
            background_duck: 0.2,
        }
    }
}

impl ShellConfig {
    /// Loads the manifest, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::info!("No shell config at {:?} ({}), using defaults", path, e);
                return ShellConfig::default();
            }
        };

        match Self::from_json(&content) {
            Ok(config) => {
                log::info!("Loaded shell config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Shell config {:?} is malformed: {}. Using defaults.", path, e);
                ShellConfig::default()
            }
        }
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut config: ShellConfig = serde_json::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    /// Clamps values that would break tick arithmetic
    fn sanitize(&mut self) {
        if self.tick_rate == 0 {
            log::warn!("tick_rate must be positive, using 60");
            self.tick_rate = 60;
        }
        if !(self.video.fps > 0.0) {
            log::warn!("video.fps must be positive, using 30");
            self.video.fps = 30.0;
        }
        if self.glow.min > self.glow.max {
            std::mem::swap(&mut self.glow.min, &mut self.glow.max);
        }
        self.audio.default_master_volume = self.audio.default_master_volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_startup_state() {
        let config = ShellConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.video.strategy, FrameStrategy::Streaming);
        assert_eq!(config.glow.min, 0.3);
        assert_eq!(config.audio.default_master_volume, 0.7);
        assert_eq!(config.audio.background_duck, 0.2);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = ShellConfig::from_json(
            r#"{ "video": { "strategy": "preloaded" }, "tick_rate": 120 }"#,
        )
        .unwrap();
        assert_eq!(config.video.strategy, FrameStrategy::Preloaded);
        assert_eq!(config.video.fps, 30.0);
        assert_eq!(config.tick_rate, 120);
        assert_eq!(config.assets.music, PathBuf::from("assets/main_menu_sound.mp3"));
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let config = ShellConfig::from_json(
            r#"{ "tick_rate": 0, "video": { "fps": -5.0 }, "audio": { "default_master_volume": 3.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.video.fps, 30.0);
        assert_eq!(config.audio.default_master_volume, 1.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ShellConfig::load_or_default("definitely/not/here.json");
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ShellConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("aethelgard-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shell.json");
        fs::write(&path, r#"{ "tick_rate": 120, "video": "#).unwrap();

        let config = ShellConfig::load_or_default(&path);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.video.strategy, FrameStrategy::Streaming);

        fs::remove_dir_all(&dir).unwrap();
    }
}
