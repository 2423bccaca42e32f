use crate::error::AssetError;
use crate::platform::AudioService;
use kira::sound::PlaybackState;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween};
use log::error;
use std::io::Cursor;

/// Converts linear loudness to kira's decibel scale
fn amplitude_to_db(amplitude: f64) -> Decibels {
    if amplitude <= 0.001 {
        Decibels::SILENCE
    } else {
        Decibels(20.0 * (amplitude as f32).log10())
    }
}

fn is_active(state: PlaybackState) -> bool {
    matches!(
        state,
        PlaybackState::Playing | PlaybackState::Resuming | PlaybackState::WaitingToResume
    )
}

/// `AudioService` backed by a kira audio manager
pub struct KiraAudio {
    manager: AudioManager<DefaultBackend>,
}

impl KiraAudio {
    /// Opens the default output device
    pub fn new() -> Result<Self, AssetError> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AssetError::Audio(e.to_string()))?;
        Ok(KiraAudio { manager })
    }
}

/// A decoded looping track and its playback handle, if started
pub struct KiraTrack {
    data: StaticSoundData,
    handle: Option<StaticSoundHandle>,
    volume: f64,
    /// Set after a failed `play` until one succeeds
    play_failed: bool,
}

impl AudioService for KiraAudio {
    type Track = KiraTrack;

    fn load_looping_track(&mut self, bytes: Vec<u8>) -> Result<KiraTrack, AssetError> {
        let data = StaticSoundData::from_cursor(Cursor::new(bytes))
            .map_err(|e| AssetError::decode(e.to_string()))?
            .loop_region(..);
        Ok(KiraTrack {
            data,
            handle: None,
            volume: 1.0,
            play_failed: false,
        })
    }

    fn play(&mut self, track: &mut KiraTrack) {
        if let Some(handle) = track.handle.as_mut() {
            let state = handle.state();
            if matches!(state, PlaybackState::Paused | PlaybackState::Pausing) {
                handle.resume(Tween::default());
                return;
            }
            if is_active(state) {
                return;
            }
        }

        // Stopped or never started
        let data = track.data.clone().volume(amplitude_to_db(track.volume));
        match self.manager.play(data) {
            Ok(handle) => {
                track.handle = Some(handle);
                track.play_failed = false;
            }
            Err(e) => {
                if !track.play_failed {
                    error!("Kira play error: {}", e);
                }
                track.play_failed = true;
            }
        }
    }

    fn pause(&mut self, track: &mut KiraTrack) {
        if let Some(handle) = track.handle.as_mut() {
            handle.pause(Tween::default());
        }
    }

    fn rewind_to_start(&mut self, track: &mut KiraTrack) {
        if let Some(handle) = track.handle.as_mut() {
            handle.seek_to(0.0);
        }
    }

    fn is_playing(&self, track: &KiraTrack) -> bool {
        track
            .handle
            .as_ref()
            .is_some_and(|handle| is_active(handle.state()))
    }

    fn set_volume(&mut self, track: &mut KiraTrack, volume: f64) {
        track.volume = volume;
        if let Some(handle) = track.handle.as_mut() {
            handle.set_volume(amplitude_to_db(volume), Tween::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_to_db() {
        assert_eq!(amplitude_to_db(0.0), Decibels::SILENCE);
        assert!((amplitude_to_db(1.0).0).abs() < 1e-6);
        assert!((amplitude_to_db(0.1).0 + 20.0).abs() < 1e-4);
    }
}
