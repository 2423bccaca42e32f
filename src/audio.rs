//! Background music volume control
//!
//! The menu track plays at the master volume on the main menu and is
//! ducked on every other screen. A watchdog keeps it playing while the
//! main menu is visible.

use crate::config::AudioConfig;
use crate::game::Screen;
use crate::platform::AudioService;
use log::{debug, info, warn};

/// Ticks the watchdog waits after a restart that did not take
const RESTART_RETRY_TICKS: u32 = 60;

/// Multiplier applied to the master volume on `screen`
pub fn duck_factor(screen: Screen, config: &AudioConfig) -> f64 {
    match screen {
        Screen::Menu => config.menu_duck,
        Screen::Settings | Screen::Playing => config.background_duck,
    }
}

struct Playback<A: AudioService> {
    service: A,
    track: A::Track,
}

/// Applies the master volume and per-screen ducking to the menu track
///
/// A controller without a track (music missing or no audio device) accepts
/// every call and does nothing.
pub struct VolumeController<A: AudioService> {
    playback: Option<Playback<A>>,
    config: AudioConfig,
    master: f64,
    screen: Screen,
    /// Set when playback was paused because the target volume is zero
    paused_deliberately: bool,
    /// Set while restarts keep failing, so the failure is logged once
    restart_failed: bool,
    restart_cooldown: u32,
}

impl<A: AudioService> VolumeController<A> {
    pub fn new(service: A, track: A::Track, config: &AudioConfig) -> Self {
        Self::build(Some(Playback { service, track }), config)
    }

    pub fn silent(config: &AudioConfig) -> Self {
        Self::build(None, config)
    }

    /// Loads the looping track from `bytes`, going silent if it does not decode
    pub fn load(mut service: A, bytes: Vec<u8>, config: &AudioConfig) -> Self {
        let size = bytes.len();
        match service.load_looping_track(bytes) {
            Ok(track) => {
                info!("Background music loaded ({} bytes)", size);
                Self::new(service, track, config)
            }
            Err(e) => {
                warn!("Background music disabled: {}", e);
                Self::silent(config)
            }
        }
    }

    fn build(playback: Option<Playback<A>>, config: &AudioConfig) -> Self {
        VolumeController {
            playback,
            config: config.clone(),
            master: config.default_master_volume.clamp(0.0, 1.0),
            screen: Screen::Menu,
            paused_deliberately: false,
            restart_failed: false,
            restart_cooldown: 0,
        }
    }

    /// Starts playback for the main menu
    pub fn start(&mut self) {
        self.on_screen_change(Screen::Menu);
    }

    #[cfg(test)]
    pub fn has_track(&self) -> bool {
        self.playback.is_some()
    }

    pub fn master(&self) -> f64 {
        self.master
    }

    /// Loudness the track should currently have
    pub fn target(&self) -> f64 {
        self.master * duck_factor(self.screen, &self.config)
    }

    pub fn on_screen_change(&mut self, screen: Screen) {
        self.screen = screen;
        let target = self.target();
        let Some(playback) = self.playback.as_mut() else {
            return;
        };

        if target <= 0.0 {
            if playback.service.is_playing(&playback.track) {
                playback.service.pause(&mut playback.track);
                debug!("Music paused on {:?}", screen);
            }
            self.paused_deliberately = true;
            return;
        }

        self.paused_deliberately = false;
        if !playback.service.is_playing(&playback.track) {
            playback.service.rewind_to_start(&mut playback.track);
            playback.service.play(&mut playback.track);
            debug!("Music restarted on {:?}", screen);
        }
        playback.service.set_volume(&mut playback.track, target);
    }

    /// Applies a new master volume without restarting playback
    pub fn on_master_volume_changed(&mut self, master: f64) {
        self.master = master.clamp(0.0, 1.0);
        let target = self.target();
        if let Some(playback) = self.playback.as_mut() {
            playback.service.set_volume(&mut playback.track, target);
        }
    }

    /// Restarts the track if it stopped on its own while the main menu is up
    ///
    /// A restart that does not start the track is retried every
    /// `RESTART_RETRY_TICKS` calls.
    pub fn watchdog(&mut self) {
        if self.screen != Screen::Menu || self.paused_deliberately {
            return;
        }
        if self.restart_cooldown > 0 {
            self.restart_cooldown -= 1;
            return;
        }
        let target = self.target();
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        if playback.service.is_playing(&playback.track) {
            self.restart_failed = false;
            return;
        }

        if !self.restart_failed {
            warn!("Menu music stopped unexpectedly, restarting");
        }
        playback.service.rewind_to_start(&mut playback.track);
        playback.service.play(&mut playback.track);
        playback.service.set_volume(&mut playback.track, target);

        if playback.service.is_playing(&playback.track) {
            self.restart_failed = false;
        } else {
            if !self.restart_failed {
                warn!(
                    "Menu music did not restart, retrying every {} ticks",
                    RESTART_RETRY_TICKS
                );
            }
            self.restart_failed = true;
            self.restart_cooldown = RESTART_RETRY_TICKS;
        }
    }
}
