use crate::error::AssetError;
use crate::platform::AssetLoader;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem reads plus `sdl2::image` decoding into textures
pub struct SdlAssets<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
}

impl<'a> SdlAssets<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        SdlAssets { texture_creator }
    }
}

impl<'a> AssetLoader for SdlAssets<'a> {
    type Image = Texture<'a>;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        fs::read(path).map_err(|e| AssetError::from_io(path, e))
    }

    fn decode_image(&self, bytes: &[u8]) -> Result<Texture<'a>, AssetError> {
        self.texture_creator
            .load_texture_bytes(bytes)
            .map_err(AssetError::decode)
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, AssetError> {
        let mut entries = fs::read_dir(path)
            .map_err(|e| AssetError::from_io(path, e))?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .collect::<Vec<_>>();
        entries.sort();
        Ok(entries)
    }
}
