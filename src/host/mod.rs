//! SDL2 and kira implementations of the collaborator interfaces.

pub mod assets;
pub mod audio;
pub mod canvas;
pub mod input;

pub use assets::SdlAssets;
pub use audio::KiraAudio;
pub use canvas::SdlRenderer;
pub use input::SdlInput;
