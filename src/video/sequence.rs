//! Frame sequences backed by a directory of pre-extracted frame images.

use super::pacing::FramePacer;
use crate::error::AssetError;
use crate::platform::AssetLoader;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Lists the frame images in `dir`, ordered by file name
pub fn discover_frames<L: AssetLoader>(loader: &L, dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut frames: Vec<PathBuf> = loader
        .list_directory(dir)?
        .into_iter()
        .filter(|path| is_frame_image(path))
        .collect();
    frames.sort();

    if frames.is_empty() {
        return Err(AssetError::EmptySequence(dir.to_path_buf()));
    }
    Ok(frames)
}

fn is_frame_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FRAME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Every frame decoded up front
///
/// Frames that failed to decode are kept as `None` so indices still match
/// the file order; selecting one draws nothing for that step.
pub struct PreloadedSequence<I> {
    frames: Vec<Option<I>>,
    index: usize,
    pacer: FramePacer,
}

impl<I> PreloadedSequence<I> {
    pub fn new(frames: Vec<Option<I>>, pacer: FramePacer) -> Self {
        PreloadedSequence {
            frames,
            index: 0,
            pacer,
        }
    }

    /// Decodes every frame in `dir`
    ///
    /// Fails when the directory is missing, holds no frames, or not a
    /// single frame decodes.
    pub fn load<L>(loader: &L, dir: &Path, pacer: FramePacer) -> Result<Self, AssetError>
    where
        L: AssetLoader<Image = I>,
    {
        let paths = discover_frames(loader, dir)?;
        let mut loaded = 0;
        let frames: Vec<Option<I>> = paths
            .iter()
            .map(|path| match loader.load_image(path) {
                Ok(image) => {
                    loaded += 1;
                    Some(image)
                }
                Err(e) => {
                    warn!("Skipping video frame: {}", e);
                    None
                }
            })
            .collect();

        if loaded == 0 {
            return Err(AssetError::EmptySequence(dir.to_path_buf()));
        }
        debug!("Preloaded {}/{} frames from {:?}", loaded, frames.len(), dir);
        Ok(Self::new(frames, pacer))
    }

    pub fn current(&self) -> Option<&I> {
        self.frames.get(self.index).and_then(|frame| frame.as_ref())
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, ticks: u32) {
        let steps = self.pacer.tick(ticks) as usize;
        if steps > 0 && !self.frames.is_empty() {
            self.index = (self.index + steps) % self.frames.len();
        }
    }
}

/// One decoded frame resident at a time
///
/// On every frame step the resident frame is dropped before the next one
/// is decoded. `displayed` tracks which file the resident frame came
/// from, so a failed decode can bring that frame back.
pub struct StreamingSequence<I> {
    paths: Vec<PathBuf>,
    index: usize,
    displayed: usize,
    current: Option<I>,
    pacer: FramePacer,
}

impl<I> StreamingSequence<I> {
    /// Discovers frames in `dir` and decodes the first one
    pub fn open<L>(loader: &L, dir: &Path, pacer: FramePacer) -> Result<Self, AssetError>
    where
        L: AssetLoader<Image = I>,
    {
        let paths = discover_frames(loader, dir)?;
        let first = loader.load_image(&paths[0])?;
        debug!("Streaming {} frames from {:?}", paths.len(), dir);
        Ok(StreamingSequence {
            paths,
            index: 0,
            displayed: 0,
            current: Some(first),
            pacer,
        })
    }

    pub fn current(&self) -> Option<&I> {
        self.current.as_ref()
    }

    /// Index of the next frame the sequence will step from
    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the frame currently resident
    #[cfg(test)]
    pub fn displayed_index(&self) -> usize {
        self.displayed
    }

    pub fn advance<L>(&mut self, ticks: u32, loader: &L)
    where
        L: AssetLoader<Image = I>,
    {
        let steps = self.pacer.tick(ticks) as usize;
        if steps == 0 {
            return;
        }
        let next = (self.index + steps) % self.paths.len();
        self.index = next;

        // Release before decoding the next frame
        self.current = None;

        match loader.load_image(&self.paths[next]) {
            Ok(image) => {
                self.current = Some(image);
                self.displayed = next;
            }
            Err(e) => {
                warn!("Video frame {} failed, keeping previous: {}", next, e);
                match loader.load_image(&self.paths[self.displayed]) {
                    Ok(image) => self.current = Some(image),
                    Err(e) => warn!("Previous video frame is gone too: {}", e),
                }
            }
        }
    }
}
