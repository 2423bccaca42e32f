//! Menu Background Video
//!
//! The main menu background is either a looping frame sequence or a single
//! still image. Which one is decided once at startup from what is on disk:
//!
//! 1. The frame directory from the config, loaded with the configured
//!    strategy (streaming or preloaded)
//! 2. The fallback background image
//!
//! If neither loads the shell cannot start.

pub mod pacing;
pub mod sequence;

pub use pacing::FramePacer;
pub use sequence::{PreloadedSequence, StreamingSequence};

use crate::config::{FrameStrategy, ShellConfig};
use crate::error::AssetError;
use crate::platform::AssetLoader;
use log::{info, warn};

/// Where background frames come from
///
/// The variant is fixed at construction and never changes afterwards.
pub enum FrameSource<I> {
    Static(I),
    Preloaded(PreloadedSequence<I>),
    Streaming(StreamingSequence<I>),
}

impl<I> FrameSource<I> {
    /// Picks the best available source
    ///
    /// Video problems are logged and fall back to the still image. An error
    /// is returned only when the still image is unusable as well.
    pub fn open<L>(config: &ShellConfig, loader: &L) -> Result<Self, AssetError>
    where
        L: AssetLoader<Image = I>,
    {
        let dir = &config.assets.video_frames_dir;
        let pacer = FramePacer::new(config.tick_rate, config.video.fps);

        let video = match config.video.strategy {
            FrameStrategy::Streaming => {
                StreamingSequence::open(loader, dir, pacer).map(FrameSource::Streaming)
            }
            FrameStrategy::Preloaded => {
                PreloadedSequence::load(loader, dir, pacer).map(FrameSource::Preloaded)
            }
        };

        match video {
            Ok(source) => {
                info!("Menu background: {} video from {:?}", source.kind(), dir);
                Ok(source)
            }
            Err(e) => {
                warn!("Background video unavailable ({}), using still image", e);
                let image = loader.load_image(&config.assets.background_image)?;
                info!(
                    "Menu background: still image {:?}",
                    config.assets.background_image
                );
                Ok(FrameSource::Static(image))
            }
        }
    }

    /// Frame to draw this tick, if any
    ///
    /// The borrow must not outlive the current render; the next `advance`
    /// may replace the frame.
    pub fn current_image(&self) -> Option<&I> {
        match self {
            FrameSource::Static(image) => Some(image),
            FrameSource::Preloaded(seq) => seq.current(),
            FrameSource::Streaming(seq) => seq.current(),
        }
    }

    pub fn advance<L>(&mut self, ticks: u32, loader: &L)
    where
        L: AssetLoader<Image = I>,
    {
        match self {
            FrameSource::Static(_) => {}
            FrameSource::Preloaded(seq) => seq.advance(ticks),
            FrameSource::Streaming(seq) => seq.advance(ticks, loader),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FrameSource::Static(_) => "static",
            FrameSource::Preloaded(_) => "preloaded",
            FrameSource::Streaming(_) => "streaming",
        }
    }
}
